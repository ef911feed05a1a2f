//! Turn-lane sequencing and local action validation

use skirmish_protocol::TurnAction;
use thiserror::Error;

use crate::battle::BattleSession;
use crate::roster::TEAM_SIZE;

/// Why an action was refused locally, before any request was made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("no battle is in progress")]
    NoBattle,

    #[error("the battle is already decided")]
    BattleOver,

    #[error("a turn is already being resolved")]
    TurnInFlight,

    #[error("move index {0} is out of range")]
    MoveOutOfRange(usize),

    #[error("switch target {0} is out of range")]
    SwitchOutOfRange(usize),

    #[error("{0} is already on the field")]
    SwitchToActive(String),

    #[error("a team of exactly {TEAM_SIZE} is required, {0} selected")]
    TeamIncomplete(usize),

    #[error("a battle is already in progress")]
    BattleInProgress,
}

/// Receipt for a turn request that has been admitted to the wire.
///
/// The ticket pins the battle id and the gate epoch the request was issued
/// under, so a response that arrives after a reset can be recognized as
/// stale and discarded instead of merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTicket {
    battle_id: String,
    epoch: u64,
}

impl TurnTicket {
    pub fn battle_id(&self) -> &str {
        &self.battle_id
    }
}

/// Serializes the battle-turn request lane.
///
/// The backend resolves turns as a strict sequence per battle id, so at
/// most one turn request may be outstanding; a second dispatch is refused
/// until the first settles, success or failure.
#[derive(Debug, Default)]
pub struct TurnGate {
    in_flight: bool,
    epoch: u64,
}

impl TurnGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an action against the current session and, if legal, mark
    /// the lane busy.
    ///
    /// Every error here is a local rejection; nothing has been sent.
    pub fn begin(
        &mut self,
        session: &BattleSession,
        action: TurnAction,
    ) -> Result<TurnTicket, ActionError> {
        if self.in_flight {
            return Err(ActionError::TurnInFlight);
        }
        if session.is_over() {
            return Err(ActionError::BattleOver);
        }

        match action {
            TurnAction::Attack(index) => {
                if index >= session.legal_moves().len() {
                    return Err(ActionError::MoveOutOfRange(index));
                }
            }
            TurnAction::Switch(index) => {
                let candidates = session.switch_candidates();
                let candidate = candidates
                    .get(index)
                    .ok_or(ActionError::SwitchOutOfRange(index))?;
                if !candidate.selectable {
                    return Err(ActionError::SwitchToActive(candidate.name.clone()));
                }
            }
        }

        self.in_flight = true;
        Ok(TurnTicket {
            battle_id: session.battle_id().to_string(),
            epoch: self.epoch,
        })
    }

    /// Free the lane once its request resolved, success or failure.
    ///
    /// Returns whether the ticket is still current. A stale ticket (the
    /// session was reset while the request was outstanding) does not touch
    /// the lane and its response must be discarded, not merged.
    pub fn settle(&mut self, ticket: &TurnTicket) -> bool {
        let current = ticket.epoch == self.epoch;
        if current {
            self.in_flight = false;
        }
        current
    }

    /// Invalidate every outstanding ticket. Called on session reset.
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.epoch += 1;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(winner: Option<&str>) -> BattleSession {
        let snapshot = serde_json::from_value(serde_json::json!({
            "battle_id": "b-9",
            "winner": winner,
            "turn_log": [],
            "user_pokemon": {
                "name": "A",
                "current_hp": 50,
                "max_hp": 50,
                "moves": [
                    {"name": "Tackle", "type": "Normal"},
                    {"name": "Growl", "type": "Normal"}
                ]
            },
            "opponent_pokemon": {"name": "X", "current_hp": 50, "max_hp": 50, "moves": []},
            "user_team_status": ["A", "B", "C"],
        }))
        .unwrap();
        BattleSession::start(snapshot).unwrap()
    }

    #[test]
    fn test_begin_admits_a_legal_attack() {
        let mut gate = TurnGate::new();
        let ticket = gate.begin(&session(None), TurnAction::Attack(1)).unwrap();

        assert_eq!(ticket.battle_id(), "b-9");
        assert!(gate.is_in_flight());
    }

    #[test]
    fn test_attack_index_out_of_range_is_refused() {
        let mut gate = TurnGate::new();
        let err = gate.begin(&session(None), TurnAction::Attack(2)).unwrap_err();

        assert_eq!(err, ActionError::MoveOutOfRange(2));
        assert!(!gate.is_in_flight());
    }

    #[test]
    fn test_switch_to_active_is_refused() {
        let mut gate = TurnGate::new();
        let err = gate.begin(&session(None), TurnAction::Switch(0)).unwrap_err();

        assert_eq!(err, ActionError::SwitchToActive("A".to_string()));
    }

    #[test]
    fn test_switch_out_of_range_is_refused() {
        let mut gate = TurnGate::new();
        let err = gate.begin(&session(None), TurnAction::Switch(3)).unwrap_err();

        assert_eq!(err, ActionError::SwitchOutOfRange(3));
    }

    #[test]
    fn test_terminal_battle_refuses_every_action() {
        let mut gate = TurnGate::new();
        let over = session(Some("AI"));

        assert_eq!(
            gate.begin(&over, TurnAction::Attack(0)).unwrap_err(),
            ActionError::BattleOver
        );
        assert_eq!(
            gate.begin(&over, TurnAction::Switch(1)).unwrap_err(),
            ActionError::BattleOver
        );
    }

    #[test]
    fn test_second_dispatch_while_in_flight_is_refused() {
        let mut gate = TurnGate::new();
        let session = session(None);

        let ticket = gate.begin(&session, TurnAction::Attack(0)).unwrap();
        assert_eq!(
            gate.begin(&session, TurnAction::Attack(1)).unwrap_err(),
            ActionError::TurnInFlight
        );

        assert!(gate.settle(&ticket));
        assert!(gate.begin(&session, TurnAction::Attack(1)).is_ok());
    }

    #[test]
    fn test_settle_after_reset_reports_stale() {
        let mut gate = TurnGate::new();
        let ticket = gate.begin(&session(None), TurnAction::Attack(0)).unwrap();

        gate.reset();
        assert!(!gate.settle(&ticket));
    }

    #[test]
    fn test_stale_settle_does_not_free_a_newer_request() {
        let mut gate = TurnGate::new();
        let session = session(None);

        let stale = gate.begin(&session, TurnAction::Attack(0)).unwrap();
        gate.reset();
        let current = gate.begin(&session, TurnAction::Attack(0)).unwrap();

        assert!(!gate.settle(&stale));
        assert!(gate.is_in_flight());

        assert!(gate.settle(&current));
        assert!(!gate.is_in_flight());
    }
}
