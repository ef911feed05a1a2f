//! HTTP backend over the battle service's JSON endpoints

use std::time::Duration;

use anyhow::{Context, Result};
use skirmish_protocol::{
    BattleSnapshot, ChatReply, ChatRequest, CreatureSummary, StartBattleRequest, TurnAction,
    TurnRequest,
};

use crate::backend::Backend;

/// Tunables for the HTTP lanes
pub struct HttpConfig {
    /// Per-request deadline. An expired request surfaces as an ordinary
    /// failed action; it never hangs the UI.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
        }
    }
}

/// [`Backend`] implementation against the battle service's HTTP API.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend rooted at `base_url` (without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, HttpConfig::default())
    }

    pub fn with_config(base_url: impl Into<String>, config: HttpConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for HttpBackend {
    async fn list_creatures(&self) -> Result<Vec<CreatureSummary>> {
        let listing: Vec<CreatureSummary> = self
            .http
            .get(self.url("/pokemon/list"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse creature listing")?;

        tracing::debug!(count = listing.len(), "Fetched creature listing");
        Ok(listing)
    }

    async fn start_battle(&self, team: &[String]) -> Result<BattleSnapshot> {
        let request = StartBattleRequest {
            user_team: team.to_vec(),
        };

        let snapshot: BattleSnapshot = self
            .http
            .post(self.url("/battle/start"))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse battle snapshot")?;

        tracing::debug!(battle_id = %snapshot.battle_id, "Battle started");
        Ok(snapshot)
    }

    async fn submit_turn(&self, battle_id: &str, action: TurnAction) -> Result<BattleSnapshot> {
        let request = TurnRequest::new(battle_id, action);

        let snapshot: BattleSnapshot = self
            .http
            .post(self.url("/battle/turn"))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse battle snapshot")?;

        tracing::debug!(
            battle_id = %battle_id,
            action = request.action_type,
            "Turn resolved"
        );
        Ok(snapshot)
    }

    async fn ask_oracle(&self, question: &str) -> Result<String> {
        let request = ChatRequest {
            question: question.to_string(),
        };

        let reply: ChatReply = self
            .http
            .post(self.url("/chat"))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse oracle reply")?;

        Ok(reply.answer)
    }
}
