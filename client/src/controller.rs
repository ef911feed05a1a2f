//! The battle request lane

use std::sync::Arc;

use skirmish_protocol::{CreatureSummary, TurnAction};
use skirmish_session::{ActionError, BattleSession, RosterSelection, TurnGate};

use crate::ClientError;
use crate::backend::Backend;

/// The battle lane: roster building, session ownership, and strictly
/// sequential turn dispatch.
///
/// At most one turn request is ever outstanding; while one is in flight
/// every further dispatch is refused locally. A response that resolves
/// after a [`reset`](Self::reset) is discarded rather than merged.
pub struct BattleController<B> {
    backend: Arc<B>,
    available: Vec<CreatureSummary>,
    roster: RosterSelection,
    session: Option<BattleSession>,
    gate: TurnGate,
}

impl<B: Backend> BattleController<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            available: Vec::new(),
            roster: RosterSelection::new(),
            session: None,
            gate: TurnGate::new(),
        }
    }

    /// Fetch the selectable creature roster from the backend.
    pub async fn load_roster(&mut self) -> Result<&[CreatureSummary], ClientError> {
        let listing = self
            .backend
            .list_creatures()
            .await
            .map_err(ClientError::Backend)?;
        self.available = listing;
        Ok(&self.available)
    }

    /// Creatures available on the select screen, as last fetched
    pub fn available(&self) -> &[CreatureSummary] {
        &self.available
    }

    pub fn selection(&self) -> &RosterSelection {
        &self.roster
    }

    /// Add or remove a team pick
    pub fn toggle(&mut self, name: &str) {
        self.roster.toggle(name);
    }

    /// Open a battle from the current selection.
    ///
    /// On success the returned snapshot becomes the session and the view
    /// flips to battle. On failure the selection and view are untouched
    /// and the error is returned to be surfaced.
    pub async fn start_battle(&mut self) -> Result<(), ClientError> {
        if self.session.is_some() {
            return Err(ActionError::BattleInProgress.into());
        }
        if !self.roster.can_start() {
            return Err(ActionError::TeamIncomplete(self.roster.len()).into());
        }

        let team = self.roster.names().to_vec();
        let snapshot = self
            .backend
            .start_battle(&team)
            .await
            .map_err(ClientError::Backend)?;
        let session =
            BattleSession::start(snapshot).map_err(|e| ClientError::Backend(e.into()))?;

        tracing::info!(battle_id = %session.battle_id(), "Battle session opened");
        self.session = Some(session);
        Ok(())
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut BattleSession> {
        self.session.as_mut()
    }

    /// Submit one turn action.
    ///
    /// Locally illegal actions are refused before any request is made. On
    /// a backend failure the snapshot and log are left exactly as they
    /// were and the same action may be retried; nothing retries
    /// automatically.
    pub async fn dispatch(&mut self, action: TurnAction) -> Result<(), ClientError> {
        let session = self.session.as_ref().ok_or(ActionError::NoBattle)?;
        let ticket = self.gate.begin(session, action)?;

        let result = self.backend.submit_turn(ticket.battle_id(), action).await;
        let current = self.gate.settle(&ticket);

        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(
                    battle_id = %ticket.battle_id(),
                    error = %error,
                    "Turn dispatch failed"
                );
                return Err(ClientError::Backend(error));
            }
        };

        if !current {
            // The session was reset while the request was outstanding;
            // its response no longer has a home.
            tracing::debug!(battle_id = %ticket.battle_id(), "Discarding stale turn response");
            return Ok(());
        }

        let session = self.session.as_mut().ok_or(ActionError::NoBattle)?;
        session
            .apply_turn(snapshot)
            .map_err(|e| ClientError::Backend(e.into()))?;
        Ok(())
    }

    /// Whether a turn request is currently outstanding
    pub fn is_turn_in_flight(&self) -> bool {
        self.gate.is_in_flight()
    }

    /// Drop the battle and return to team select. The one reset edge out
    /// of the battle view; any outstanding turn response becomes stale.
    pub fn reset(&mut self) {
        self.session = None;
        self.roster.clear();
        self.gate.reset();
    }
}
