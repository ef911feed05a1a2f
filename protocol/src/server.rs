//! Response payloads from the battle backend
//!
//! Every turn endpoint returns a complete [`BattleSnapshot`]; the backend
//! never sends partial patches, so these types always describe the full
//! authoritative state of a battle at one point in time.

use serde::Deserialize;

use crate::SnapshotError;

/// One entry of the creature listing (`GET /pokemon/list`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureSummary {
    pub name: String,

    /// Elemental type tags, for display only
    #[serde(default)]
    pub types: Vec<String>,
}

/// A move slot on a battler
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveSlot {
    /// Display name of the move
    pub name: String,

    /// Elemental type tag
    #[serde(rename = "type")]
    pub move_type: String,

    /// Remaining power points, if the backend reports them
    #[serde(default)]
    pub pp: Option<u32>,
}

/// One creature as it currently stands in battle
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Battler {
    pub name: String,

    pub current_hp: u32,
    pub max_hp: u32,

    /// Status condition code ("BRN", "PAR", ...), absent when healthy
    #[serde(default)]
    pub status: Option<String>,

    /// Sprite URLs for the two camera angles
    #[serde(default)]
    pub sprite_front: Option<String>,
    #[serde(default)]
    pub sprite_back: Option<String>,

    #[serde(default)]
    pub is_fainted: bool,

    /// Available moves, in slot order
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl Battler {
    /// Current HP as a fraction of maximum, clamped to [0.0, 1.0]
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.current_hp as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }
}

/// Authoritative battle state, returned by `/battle/start` and `/battle/turn`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleSnapshot {
    /// Opaque session token scoping this battle's turns
    pub battle_id: String,

    /// Present only once the battle has concluded
    #[serde(default)]
    pub winner: Option<String>,

    /// Narrative lines produced by the most recent server action
    #[serde(default)]
    pub turn_log: Vec<String>,

    /// The player's creature currently on the field
    #[serde(rename = "user_pokemon", default)]
    pub user_active: Option<Battler>,

    /// The opponent's creature currently on the field
    #[serde(rename = "opponent_pokemon", default)]
    pub opponent_active: Option<Battler>,

    /// The player's full team, in roster order
    #[serde(default)]
    pub user_team_status: Vec<String>,

    /// The opponent's full team, in roster order
    #[serde(default)]
    pub ai_team_status: Vec<String>,
}

impl BattleSnapshot {
    /// Check if the battle has concluded
    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    /// Check the structural invariants a snapshot must satisfy before it
    /// may replace session state.
    ///
    /// An ongoing battle always has both active battlers, and no battler
    /// may report more HP than its maximum.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (side, battler) in [
            ("user", self.user_active.as_ref()),
            ("opponent", self.opponent_active.as_ref()),
        ] {
            match battler {
                Some(b) if b.current_hp > b.max_hp => {
                    return Err(SnapshotError::HpOutOfRange {
                        name: b.name.clone(),
                        current: b.current_hp,
                        max: b.max_hp,
                    });
                }
                None if !self.is_ended() => {
                    return Err(SnapshotError::MissingActive {
                        battle_id: self.battle_id.clone(),
                        side,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Answer from the oracle chat endpoint (`POST /chat`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}
