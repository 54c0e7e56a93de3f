pub mod arena;

pub use crate::domain::model::{BattleRecord, CatalogPage, Creature, RosterEntry};
pub use crate::domain::ports::{ArenaBackend, CatalogSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use arena::{Arena, BattleOutcome, Opponent, RosterMember, ENEMY_TEAM_SIZE};
