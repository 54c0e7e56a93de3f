pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpArenaBackend, LocalStorage, MemoryStorage, PokeApiClient, StorageBackend};
pub use crate::config::toml_config::ServerConfig;
pub use crate::core::arena::{Arena, Opponent};
pub use crate::domain::services::battle::StatRules;
pub use crate::utils::error::{ArenaError, Result};
