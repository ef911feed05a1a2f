//! Team selection on the select screen

/// Team size the backend requires to start a battle
pub const TEAM_SIZE: usize = 3;

/// The in-progress team pick.
///
/// Holds at most [`TEAM_SIZE`] distinct names. Order is kept: the backend
/// sends out the first name as the initial active creature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSelection {
    names: Vec<String>,
}

impl RosterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a pick.
    ///
    /// A name already selected is removed; a new name is appended unless
    /// the selection is full, in which case nothing changes.
    pub fn toggle(&mut self, name: &str) {
        if let Some(position) = self.names.iter().position(|n| n == name) {
            self.names.remove(position);
        } else if self.names.len() < TEAM_SIZE {
            self.names.push(name.to_string());
        }
    }

    /// Whether a battle can be started from this selection
    pub fn can_start(&self) -> bool {
        self.names.len() == TEAM_SIZE
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Selected names in pick order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
