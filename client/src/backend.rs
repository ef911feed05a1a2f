use anyhow::Result;
use skirmish_protocol::{BattleSnapshot, CreatureSummary, TurnAction};

/// The remote services the client consumes.
///
/// The battle resolver is authoritative and opaque: every battle call
/// returns a complete snapshot and the client never second-guesses its
/// contents. Implemented over HTTP by [`crate::HttpBackend`]; tests
/// substitute scripted fakes.
#[allow(async_fn_in_trait)]
pub trait Backend: Send + Sync {
    /// Fetch the selectable creature roster
    async fn list_creatures(&self) -> Result<Vec<CreatureSummary>>;

    /// Open a battle for an ordered team of three
    async fn start_battle(&self, team: &[String]) -> Result<BattleSnapshot>;

    /// Submit one turn action and receive the resolved state
    async fn submit_turn(&self, battle_id: &str, action: TurnAction) -> Result<BattleSnapshot>;

    /// Ask the oracle a free-text question
    async fn ask_oracle(&self, question: &str) -> Result<String>;
}
