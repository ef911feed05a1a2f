//! Client-side interaction state machine for skirmish battles.
//!
//! This crate owns every piece of transient client state and decides which
//! actions are currently legal. It performs no I/O and holds no async
//! machinery; it sits between `skirmish-protocol` (wire format) and the
//! request lanes:
//!
//! ```text
//! skirmish-protocol (wire format)
//!        │
//!        ▼
//! skirmish-session (state machine) ← THIS CRATE
//!        │
//!        └─> skirmish-client (request lanes + HTTP backend)
//! ```
//!
//! # Main Types
//!
//! - [`RosterSelection`] - the 0-3 pick team builder on the select screen
//! - [`BattleSession`] - the last authoritative snapshot plus derived views
//! - [`BattleLog`] - append-only narrative record with turn separators
//! - [`TurnGate`] - one-outstanding-turn sequencing and local validation
//! - [`ChatTranscript`] - the oracle exchange history
//! - [`View`] - the two-state presentation switch
//!
//! # Example Usage
//!
//! ```ignore
//! use skirmish_session::{BattleSession, TurnGate};
//! use skirmish_protocol::TurnAction;
//!
//! let mut session = BattleSession::start(snapshot)?;
//! let mut gate = TurnGate::new();
//!
//! // Admit an action to the wire, then merge the response
//! let ticket = gate.begin(&session, TurnAction::Attack(0))?;
//! let snapshot = backend_response;
//! if gate.settle(&ticket) {
//!     session.apply_turn(snapshot)?;
//! }
//! ```

pub mod battle;
pub mod chat;
pub mod log;
pub mod roster;
pub mod status;
pub mod turn;
pub mod view;

// Re-export main types at crate root for convenience
pub use battle::{BattleSession, SwitchCandidate};
pub use chat::{ChatEntry, ChatSpeaker, ChatTranscript};
pub use log::{BattleLog, TURN_SEPARATOR};
pub use roster::{RosterSelection, TEAM_SIZE};
pub use status::StatusCondition;
pub use turn::{ActionError, TurnGate, TurnTicket};
pub use view::View;

// Re-export commonly used protocol types
pub use skirmish_protocol::{BattleSnapshot, Battler, MoveSlot, SnapshotError, TurnAction};
