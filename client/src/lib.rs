//! Async client for the skirmish battle service.
//!
//! [`SkirmishApp`] ties two independent request lanes over one shared
//! backend: the battle lane ([`BattleController`]) and the chat lane
//! ([`OracleChat`]). The lanes live in separate fields so both may hold a
//! request in flight at once; within the battle lane, turns are strictly
//! sequential.
//!
//! ```ignore
//! use skirmish_client::{HttpBackend, SkirmishApp, TurnAction};
//!
//! let mut app = SkirmishApp::new(HttpBackend::new("http://localhost:8000")?);
//! app.battle.load_roster().await?;
//! // ... toggle three picks, then:
//! app.battle.start_battle().await?;
//!
//! // The lanes do not wait on each other
//! let (turn, chat) = tokio::join!(
//!     app.battle.dispatch(TurnAction::Attack(0)),
//!     app.oracle.ask("Which type beats Rock?"),
//! );
//! ```

mod backend;
mod controller;
mod http;
mod oracle;

#[cfg(test)]
mod testutil;

use std::sync::Arc;

use thiserror::Error;

pub use backend::Backend;
pub use controller::BattleController;
pub use http::{HttpBackend, HttpConfig};
pub use oracle::OracleChat;

pub use skirmish_protocol::{BattleSnapshot, Battler, CreatureSummary, MoveSlot, TurnAction};
pub use skirmish_session::{
    ActionError, BattleLog, BattleSession, ChatEntry, ChatSpeaker, ChatTranscript,
    RosterSelection, StatusCondition, SwitchCandidate, TEAM_SIZE, TURN_SEPARATOR, View,
};

/// What went wrong with a client action
#[derive(Error, Debug)]
pub enum ClientError {
    /// Refused locally; no request was made
    #[error(transparent)]
    Rejected(#[from] ActionError),

    /// The backend or transport failed; state is unchanged and the same
    /// action may be attempted again
    #[error("backend request failed: {0}")]
    Backend(anyhow::Error),
}

/// The player-facing client: both request lanes over one backend.
pub struct SkirmishApp<B> {
    pub battle: BattleController<B>,
    pub oracle: OracleChat<B>,
}

impl<B: Backend> SkirmishApp<B> {
    pub fn new(backend: B) -> Self {
        Self::with_shared(Arc::new(backend))
    }

    /// Build from an already-shared backend, keeping the caller a handle
    pub fn with_shared(backend: Arc<B>) -> Self {
        Self {
            battle: BattleController::new(Arc::clone(&backend)),
            oracle: OracleChat::new(backend),
        }
    }

    /// Which screen to present, derived from session presence
    pub fn view(&self) -> View {
        View::for_session(self.battle.session().is_some())
    }

    /// Discard everything, as a reload would: battle, selection, and chat.
    pub fn reset(&mut self) {
        self.battle.reset();
        self.oracle.reset();
    }
}
