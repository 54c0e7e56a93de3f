use crate::core::{ArenaBackend, CatalogSource};
use crate::domain::model::{
    BattleRecord, BattleReport, CatalogPage, Creature, NewRosterEntry, RosterEntry,
};
use crate::domain::services::battle::{score, StatRules};
use crate::domain::services::catalog::{filter_by_name, RANDOM_ID_RANGE};
use crate::domain::services::roster::{check_admission, find_entry};
use crate::utils::error::{ArenaError, Result};
use chrono::Utc;
use rand::Rng;

pub const ENEMY_TEAM_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Catalog(u32),
    Random,
}

#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub challenger: Creature,
    pub opponent: Creature,
    pub report: BattleReport,
    pub record: BattleRecord,
}

#[derive(Debug, Clone)]
pub struct RosterMember {
    pub entry: RosterEntry,
    pub creature: Creature,
}

/// Composes the catalog and the backend into the user-facing operations.
pub struct Arena<C: CatalogSource, B: ArenaBackend> {
    catalog: C,
    backend: B,
}

impl<C: CatalogSource, B: ArenaBackend> Arena<C, B> {
    pub fn new(catalog: C, backend: B) -> Self {
        Self { catalog, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One catalog page, narrowed to names containing `search`.
    pub async fn browse(&self, page: usize, search: Option<&str>) -> Result<CatalogPage> {
        let mut listing = self.catalog.fetch_page(page).await?;
        if let Some(term) = search {
            listing.creatures = filter_by_name(listing.creatures, term);
        }
        Ok(listing)
    }

    pub async fn creature(&self, id: u32) -> Result<Creature> {
        self.catalog.fetch_creature(id).await
    }

    pub async fn add_to_roster(&self, pokemon_id: u32) -> Result<RosterEntry> {
        let (roster, creature) = tokio::try_join!(
            self.backend.list_roster(),
            self.catalog.fetch_creature(pokemon_id)
        )?;

        if let Err(e) = check_admission(&roster, creature.id, &creature.name) {
            tracing::warn!("Rejected {} for roster: {}", creature.name, e);
            return Err(e);
        }

        let entry = NewRosterEntry::from_creature(&creature, Utc::now());
        let stored = self.backend.add_roster_entry(&entry).await?;
        tracing::info!("Added {} to roster as entry {}", stored.name, stored.id);
        Ok(stored)
    }

    pub async fn remove_from_roster(&self, entry_id: u64) -> Result<()> {
        self.backend.remove_roster_entry(entry_id).await?;
        tracing::info!("Removed roster entry {}", entry_id);
        Ok(())
    }

    pub async fn roster(&self) -> Result<Vec<RosterEntry>> {
        self.backend.list_roster().await
    }

    /// Roster entries paired with their current catalog data.
    pub async fn roster_details(&self) -> Result<Vec<RosterMember>> {
        let roster = self.backend.list_roster().await?;
        let ids: Vec<u32> = roster.iter().map(|e| e.pokemon_id).collect();
        let creatures = self.catalog.fetch_many(&ids).await?;

        Ok(roster
            .into_iter()
            .zip(creatures)
            .map(|(entry, creature)| RosterMember { entry, creature })
            .collect())
    }

    /// `size` independent draws from the first generation; repeats are allowed.
    pub async fn enemy_team<R: Rng>(&self, rng: &mut R, size: usize) -> Result<Vec<Creature>> {
        let ids: Vec<u32> = (0..size).map(|_| rng.gen_range(RANDOM_ID_RANGE)).collect();
        tracing::debug!("Enemy team ids: {:?}", ids);
        self.catalog.fetch_many(&ids).await
    }

    /// Scores a roster entry against an opponent and records the result.
    pub async fn battle<R: Rng>(
        &self,
        entry_id: u64,
        opponent: Opponent,
        rules: StatRules,
        rng: &mut R,
    ) -> Result<BattleOutcome> {
        let opponent_id = match opponent {
            Opponent::Catalog(id) => id,
            Opponent::Random => rng.gen_range(RANDOM_ID_RANGE),
        };

        let roster = self.backend.list_roster().await?;
        if roster.is_empty() {
            return Err(ArenaError::ValidationError {
                message: "You need at least 1 creature in your roster to battle".to_string(),
            });
        }
        let entry = find_entry(&roster, entry_id)
            .ok_or_else(|| ArenaError::not_found("Roster entry", entry_id))?;

        let mut fighters = self
            .catalog
            .fetch_many(&[entry.pokemon_id, opponent_id])
            .await?
            .into_iter();
        let (challenger, opponent) = match (fighters.next(), fighters.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(ArenaError::ValidationError {
                    message: "Catalog returned fewer creatures than requested".to_string(),
                })
            }
        };

        let report = score(&challenger, &opponent, rules);
        let new_record = report.to_record(&challenger.name, &opponent.name, Utc::now());
        let record = self.backend.record_battle(&new_record).await?;

        tracing::info!(
            "Battle {}: {} vs {} -> {}",
            record.id,
            challenger.name,
            opponent.name,
            report.winner
        );

        Ok(BattleOutcome {
            challenger,
            opponent,
            report,
            record,
        })
    }

    /// Battle history, newest first.
    pub async fn history(&self, limit: Option<usize>) -> Result<Vec<BattleRecord>> {
        let mut battles = self.backend.list_battles().await?;
        battles.reverse();
        if let Some(limit) = limit {
            battles.truncate(limit);
        }
        Ok(battles)
    }

    /// Deletes every battle one at a time, stopping at the first failure.
    pub async fn clear_history(&self) -> Result<usize> {
        let battles = self.backend.list_battles().await?;
        let total = battles.len();

        for (deleted, battle) in battles.iter().enumerate() {
            if let Err(e) = self.backend.delete_battle(battle.id).await {
                tracing::error!("Error deleting battle {}: {}", battle.id, e);
                return Err(ArenaError::PartialFailure {
                    message: format!(
                        "deleted {} of {} battles, battle {} failed: {}",
                        deleted, total, battle.id, e
                    ),
                });
            }
        }

        tracing::info!("Cleared {} battles", total);
        Ok(total)
    }
}
