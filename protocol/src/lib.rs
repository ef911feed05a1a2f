use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{ChatRequest, StartBattleRequest, TurnAction, TurnRequest};
pub use server::{BattleSnapshot, Battler, ChatReply, CreatureSummary, MoveSlot};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("snapshot {battle_id} is missing the {side} active battler")]
    MissingActive { battle_id: String, side: &'static str },

    #[error("{name} reports {current} HP with a maximum of {max}")]
    HpOutOfRange {
        name: String,
        current: u32,
        max: u32,
    },
}
