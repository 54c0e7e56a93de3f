use crate::domain::model::{
    BattleRecord, CatalogPage, Creature, NewBattleRecord, NewRosterEntry, RosterEntry,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_url(&self) -> &str;
    fn backend_url(&self) -> &str;
    fn page_size(&self) -> usize;
    fn max_pages(&self) -> usize;
    fn concurrent_requests(&self) -> usize;
}

/// Read side of the public creature catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches a 1-based page with every creature's detail resolved.
    async fn fetch_page(&self, page: usize) -> Result<CatalogPage>;
    async fn fetch_creature(&self, id: u32) -> Result<Creature>;
    /// Resolves several creatures at once, keeping the order of `ids`.
    async fn fetch_many(&self, ids: &[u32]) -> Result<Vec<Creature>>;
}

/// Roster and battle-history persistence.
#[async_trait]
pub trait ArenaBackend: Send + Sync {
    async fn list_roster(&self) -> Result<Vec<RosterEntry>>;
    async fn add_roster_entry(&self, entry: &NewRosterEntry) -> Result<RosterEntry>;
    async fn remove_roster_entry(&self, id: u64) -> Result<()>;
    async fn list_battles(&self) -> Result<Vec<BattleRecord>>;
    async fn record_battle(&self, record: &NewBattleRecord) -> Result<BattleRecord>;
    async fn delete_battle(&self, id: u64) -> Result<()>;
}
