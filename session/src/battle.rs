//! Battle session state and derived views

use skirmish_protocol::{BattleSnapshot, Battler, MoveSlot, SnapshotError};

use crate::log::BattleLog;

/// One roster entry as offered by the switch dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCandidate {
    /// Position in the roster, as the turn endpoint expects it
    pub index: usize,

    pub name: String,

    /// False for the creature already on the field
    pub selectable: bool,
}

/// A live battle: the last authoritative snapshot and the log built from it.
///
/// The snapshot is replaced wholesale on every merged turn, never
/// field-mutated; all views below are recomputed from it on read, so no
/// stale derived value can be observed after a committed change.
#[derive(Debug, Clone)]
pub struct BattleSession {
    snapshot: BattleSnapshot,
    log: BattleLog,
    switch_menu_open: bool,
}

impl BattleSession {
    /// Start a session from the snapshot returned by the start endpoint.
    pub fn start(snapshot: BattleSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let mut log = BattleLog::new();
        log.initialize(snapshot.turn_log.clone());
        Ok(Self {
            snapshot,
            log,
            switch_menu_open: false,
        })
    }

    /// Merge a turn response: the new snapshot replaces the old one
    /// atomically and its narrative lines join the log behind a separator.
    /// Any open switch dialog is closed.
    ///
    /// A snapshot that fails validation is not merged and the session is
    /// left exactly as it was.
    pub fn apply_turn(&mut self, snapshot: BattleSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        self.log.append_turn(&snapshot.turn_log);
        self.snapshot = snapshot;
        self.switch_menu_open = false;
        Ok(())
    }

    /// Opaque token scoping this battle's turns
    pub fn battle_id(&self) -> &str {
        &self.snapshot.battle_id
    }

    pub fn snapshot(&self) -> &BattleSnapshot {
        &self.snapshot
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn active_user(&self) -> Option<&Battler> {
        self.snapshot.user_active.as_ref()
    }

    pub fn active_opponent(&self) -> Option<&Battler> {
        self.snapshot.opponent_active.as_ref()
    }

    /// Moves the player may legally submit this turn.
    ///
    /// Empty once the battle is over; attack dispatch must not be offered
    /// from an empty list.
    pub fn legal_moves(&self) -> &[MoveSlot] {
        if self.is_over() {
            return &[];
        }
        self.active_user()
            .map(|battler| battler.moves.as_slice())
            .unwrap_or(&[])
    }

    /// The switch dialog's entries: the full roster in order, with the
    /// creature already on the field marked unselectable.
    ///
    /// Fainted teammates are not filtered here; the backend is the
    /// authority on their legality.
    pub fn switch_candidates(&self) -> Vec<SwitchCandidate> {
        let active_name = self.active_user().map(|battler| battler.name.as_str());

        self.snapshot
            .user_team_status
            .iter()
            .enumerate()
            .map(|(index, name)| SwitchCandidate {
                index,
                name: name.clone(),
                selectable: Some(name.as_str()) != active_name,
            })
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.snapshot.is_ended()
    }

    /// Winner identifier as asserted by the backend, once terminal
    pub fn winner(&self) -> Option<&str> {
        self.snapshot.winner.as_deref()
    }

    pub fn open_switch_menu(&mut self) {
        self.switch_menu_open = true;
    }

    pub fn close_switch_menu(&mut self) {
        self.switch_menu_open = false;
    }

    pub fn switch_menu_open(&self) -> bool {
        self.switch_menu_open
    }
}
