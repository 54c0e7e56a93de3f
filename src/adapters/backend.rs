use crate::adapters::http::{build_client, check_status, join_url, read_json};
use crate::domain::model::{BattleRecord, NewBattleRecord, NewRosterEntry, RosterEntry};
use crate::domain::ports::{ArenaBackend, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the roster and battle-history service.
#[derive(Debug, Clone)]
pub struct HttpArenaBackend {
    client: Client,
    base_url: String,
}

impl HttpArenaBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.backend_url())
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait]
impl ArenaBackend for HttpArenaBackend {
    async fn list_roster(&self) -> Result<Vec<RosterEntry>> {
        let response = self.client.get(self.url("team")).send().await?;
        let response = check_status(response, "Roster", "team").await?;
        read_json(response).await
    }

    async fn add_roster_entry(&self, entry: &NewRosterEntry) -> Result<RosterEntry> {
        tracing::debug!("Posting roster entry for {}", entry.name);
        let response = self.client.post(self.url("team")).json(entry).send().await?;
        let response = check_status(response, "Roster", "team").await?;
        read_json(response).await
    }

    async fn remove_roster_entry(&self, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("team/{}", id)))
            .send()
            .await?;
        check_status(response, "Roster entry", &id.to_string()).await?;
        Ok(())
    }

    async fn list_battles(&self) -> Result<Vec<BattleRecord>> {
        let response = self.client.get(self.url("battles")).send().await?;
        let response = check_status(response, "Battle history", "battles").await?;
        read_json(response).await
    }

    async fn record_battle(&self, record: &NewBattleRecord) -> Result<BattleRecord> {
        let response = self
            .client
            .post(self.url("battles"))
            .json(record)
            .send()
            .await?;
        let response = check_status(response, "Battle history", "battles").await?;
        read_json(response).await
    }

    async fn delete_battle(&self, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("battles/{}", id)))
            .send()
            .await?;
        check_status(response, "Battle", &id.to_string()).await?;
        Ok(())
    }
}
