//! The battle narrative log

/// Marker entry pushed between the lines of consecutive turns
pub const TURN_SEPARATOR: &str = "---";

/// Append-only record of the battle narrative.
///
/// Initialized once from the opening snapshot, then grown by one separator
/// plus the response lines on every merged turn. Entries are never
/// reordered, deduplicated, or truncated for the life of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    lines: Vec<String>,
    revision: u64,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the log wholesale. Used only at battle start.
    pub fn initialize(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.revision += 1;
    }

    /// Push a separator, then every line of the turn response in order.
    pub fn append_turn(&mut self, lines: &[String]) {
        self.lines.push(TURN_SEPARATOR.to_string());
        self.lines.extend(lines.iter().cloned());
        self.revision += 1;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Counter bumped on every mutation.
    ///
    /// Consumers compare revisions between observations to notice "latest
    /// entry changed" and drive scroll-to-latest without diffing lines.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
