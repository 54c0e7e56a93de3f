use crate::adapters::storage::StorageBackend;
use crate::domain::model::{BattleRecord, NewBattleRecord, NewRosterEntry, RosterEntry};
use crate::domain::ports::Storage;
use crate::domain::services::roster::check_admission;
use crate::utils::error::{ArenaError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

pub const DEFAULT_DB_FILE: &str = "db.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    team: Vec<RosterEntry>,
    #[serde(default)]
    battles: Vec<BattleRecord>,
    #[serde(default)]
    next_team_id: u64,
    #[serde(default)]
    next_battle_id: u64,
}

impl Database {
    /// Ids are never reused, even after the newest entry is deleted.
    fn normalize_counters(&mut self) {
        let max_team = self.team.iter().map(|e| e.id).max().unwrap_or(0);
        let max_battle = self.battles.iter().map(|b| b.id).max().unwrap_or(0);
        self.next_team_id = self.next_team_id.max(max_team + 1);
        self.next_battle_id = self.next_battle_id.max(max_battle + 1);
    }
}

/// Roster and battle history kept in one JSON document.
///
/// Every mutation is applied to a copy, written to storage and only then
/// made visible, so a failed write leaves the previous state in place.
pub struct JsonStore {
    storage: StorageBackend,
    file_name: String,
    db: Mutex<Database>,
}

impl JsonStore {
    pub async fn open(storage: StorageBackend, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let mut db = match storage.read_file(&file_name).await {
            Ok(bytes) => serde_json::from_slice::<Database>(&bytes)?,
            Err(ArenaError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No {} yet, starting with an empty store", file_name);
                Database::default()
            }
            Err(e) => return Err(e),
        };
        db.normalize_counters();

        tracing::info!(
            "Store opened: {} roster entries, {} battles",
            db.team.len(),
            db.battles.len()
        );

        Ok(Self {
            storage,
            file_name,
            db: Mutex::new(db),
        })
    }

    async fn commit(&self, current: &mut Database, next: Database) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&next)?;
        self.storage.write_file(&self.file_name, &bytes).await?;
        *current = next;
        Ok(())
    }

    pub async fn list_team(&self) -> Vec<RosterEntry> {
        self.db.lock().await.team.clone()
    }

    pub async fn add_team_entry(&self, entry: NewRosterEntry) -> Result<RosterEntry> {
        validate_non_empty_string("name", &entry.name)?;

        let mut db = self.db.lock().await;
        check_admission(&db.team, entry.pokemon_id, &entry.name)?;

        let mut next = db.clone();
        let stored = RosterEntry::from_new(next.next_team_id, entry);
        next.next_team_id += 1;
        next.team.push(stored.clone());

        self.commit(&mut db, next).await?;
        Ok(stored)
    }

    pub async fn remove_team_entry(&self, id: u64) -> Result<()> {
        let mut db = self.db.lock().await;
        if !db.team.iter().any(|e| e.id == id) {
            return Err(ArenaError::not_found("Roster entry", id));
        }

        let mut next = db.clone();
        next.team.retain(|e| e.id != id);
        self.commit(&mut db, next).await
    }

    pub async fn list_battles(&self) -> Vec<BattleRecord> {
        self.db.lock().await.battles.clone()
    }

    pub async fn add_battle(&self, record: NewBattleRecord) -> Result<BattleRecord> {
        validate_non_empty_string("pokemon1", &record.pokemon1)?;
        validate_non_empty_string("pokemon2", &record.pokemon2)?;
        if record.winner != record.pokemon1 && record.winner != record.pokemon2 {
            return Err(ArenaError::ValidationError {
                message: format!(
                    "winner '{}' is neither '{}' nor '{}'",
                    record.winner, record.pokemon1, record.pokemon2
                ),
            });
        }

        let mut db = self.db.lock().await;
        let mut next = db.clone();
        let stored = BattleRecord::from_new(next.next_battle_id, record);
        next.next_battle_id += 1;
        next.battles.push(stored.clone());

        self.commit(&mut db, next).await?;
        Ok(stored)
    }

    pub async fn remove_battle(&self, id: u64) -> Result<()> {
        let mut db = self.db.lock().await;
        if !db.battles.iter().any(|b| b.id == id) {
            return Err(ArenaError::not_found("Battle", id));
        }

        let mut next = db.clone();
        next.battles.retain(|b| b.id != id);
        self.commit(&mut db, next).await
    }
}
