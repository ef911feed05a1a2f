//! Scripted backend and fixtures for lane tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use skirmish_protocol::{BattleSnapshot, CreatureSummary, TurnAction};

use crate::backend::Backend;

/// A backend that replays queued responses and counts what was actually
/// sent, so tests can assert that rejected actions never hit the wire.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    starts: Mutex<VecDeque<Result<BattleSnapshot>>>,
    turns: Mutex<VecDeque<Result<BattleSnapshot>>>,
    answers: Mutex<VecDeque<Result<String>>>,
    start_calls: AtomicUsize,
    turn_calls: AtomicUsize,
    chat_calls: AtomicUsize,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script_start(&self, result: Result<BattleSnapshot>) {
        self.starts.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_turn(&self, result: Result<BattleSnapshot>) {
        self.turns.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_answer(&self, result: Result<String>) {
        self.answers.lock().unwrap().push_back(result);
    }

    pub(crate) fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn turn_calls(&self) -> usize {
        self.turn_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

impl Backend for ScriptedBackend {
    async fn list_creatures(&self) -> Result<Vec<CreatureSummary>> {
        let listing = serde_json::from_str(
            r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"}]"#,
        )
        .unwrap();
        Ok(listing)
    }

    async fn start_battle(&self, _team: &[String]) -> Result<BattleSnapshot> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.starts
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted start_battle call")
    }

    async fn submit_turn(&self, _battle_id: &str, _action: TurnAction) -> Result<BattleSnapshot> {
        self.turn_calls.fetch_add(1, Ordering::SeqCst);
        self.turns
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted submit_turn call")
    }

    async fn ask_oracle(&self, _question: &str) -> Result<String> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted ask_oracle call")
    }
}

/// A well-formed snapshot for the fixed team A/B/C against X/Y/Z, with the
/// opponent's active creature at `opponent_hp`.
pub(crate) fn snapshot(winner: Option<&str>, opponent_hp: u32, log: &[&str]) -> BattleSnapshot {
    serde_json::from_value(serde_json::json!({
        "battle_id": "b-1",
        "winner": winner,
        "turn_log": log,
        "user_pokemon": {
            "name": "A",
            "current_hp": 50,
            "max_hp": 50,
            "status": null,
            "is_fainted": false,
            "moves": [
                {"name": "Tackle", "type": "Normal", "pp": 35},
                {"name": "Ember", "type": "Fire", "pp": 25}
            ]
        },
        "opponent_pokemon": {
            "name": "X",
            "current_hp": opponent_hp,
            "max_hp": 50,
            "status": null,
            "is_fainted": opponent_hp == 0,
            "moves": [{"name": "Scratch", "type": "Normal", "pp": 35}]
        },
        "user_team_status": ["A", "B", "C"],
        "ai_team_status": ["X", "Y", "Z"]
    }))
    .unwrap()
}
