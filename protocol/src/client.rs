//! Request payloads the client sends to the battle backend

use serde::Serialize;

/// A player decision for one battle turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Use the move at this index of the active battler's move list
    Attack(usize),

    /// Bring in the team member at this index of the roster
    Switch(usize),
}

impl TurnAction {
    /// Wire identifier for the action type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Attack(_) => "attack",
            Self::Switch(_) => "switch",
        }
    }

    /// Move or roster index carried by the action
    pub fn value(&self) -> usize {
        match self {
            Self::Attack(index) | Self::Switch(index) => *index,
        }
    }
}

/// Body of `POST /battle/start`
///
/// Team order is significant: the backend sends out the first name as the
/// initial active creature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartBattleRequest {
    pub user_team: Vec<String>,
}

/// Body of `POST /battle/turn`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnRequest {
    pub battle_id: String,
    pub action_type: &'static str,
    pub action_value: usize,
}

impl TurnRequest {
    pub fn new(battle_id: impl Into<String>, action: TurnAction) -> Self {
        Self {
            battle_id: battle_id.into(),
            action_type: action.kind(),
            action_value: action.value(),
        }
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_action_wire_mapping() {
        assert_eq!(TurnAction::Attack(2).kind(), "attack");
        assert_eq!(TurnAction::Attack(2).value(), 2);
        assert_eq!(TurnAction::Switch(1).kind(), "switch");
        assert_eq!(TurnAction::Switch(1).value(), 1);
    }

    #[test]
    fn test_turn_request_serialization() {
        let request = TurnRequest::new("b-42", TurnAction::Attack(0));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "battle_id": "b-42",
                "action_type": "attack",
                "action_value": 0,
            })
        );
    }

    #[test]
    fn test_start_request_preserves_team_order() {
        let request = StartBattleRequest {
            user_team: vec!["Charmander".into(), "Squirtle".into(), "Bulbasaur".into()],
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(
            json,
            r#"{"user_team":["Charmander","Squirtle","Bulbasaur"]}"#
        );
    }
}
