// App layer: runs CLI commands against an Arena and renders plain-text output.

pub mod render;

#[cfg(feature = "cli")]
use crate::config::cli::{CatalogCommand, Command, HistoryCommand, RosterCommand};
#[cfg(feature = "cli")]
use crate::core::{Arena, ArenaBackend, CatalogSource};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use rand::rngs::StdRng;
#[cfg(feature = "cli")]
use rand::SeedableRng;

#[cfg(feature = "cli")]
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Runs one command and returns what should be printed.
#[cfg(feature = "cli")]
pub async fn execute<C: CatalogSource, B: ArenaBackend>(
    arena: &Arena<C, B>,
    command: &Command,
) -> Result<String> {
    match command {
        Command::Catalog { command } => match command {
            CatalogCommand::List { page, search } => {
                let listing = arena.browse(*page, search.as_deref()).await?;
                Ok(render::page(&listing, search.as_deref()))
            }
            CatalogCommand::Show { id } => {
                let creature = arena.creature(*id).await?;
                Ok(render::creature(&creature))
            }
        },
        Command::Roster { command } => match command {
            RosterCommand::List { details: false } => Ok(render::roster(&arena.roster().await?)),
            RosterCommand::List { details: true } => {
                Ok(render::members(&arena.roster_details().await?))
            }
            RosterCommand::Add { pokemon_id } => {
                let entry = arena.add_to_roster(*pokemon_id).await?;
                Ok(format!(
                    "{} added to your roster! (entry {})",
                    render::capitalize(&entry.name),
                    entry.id
                ))
            }
            RosterCommand::Remove { entry_id } => {
                arena.remove_from_roster(*entry_id).await?;
                Ok(format!("Removed roster entry {}", entry_id))
            }
        },
        Command::Enemy { size, seed } => {
            let mut rng = rng_from(*seed);
            let team = arena.enemy_team(&mut rng, *size).await?;
            Ok(render::team(&team))
        }
        Command::Battle {
            entry_id,
            opponent,
            random,
            quick,
            seed,
        } => {
            let opponent = Command::opponent(*opponent, *random)?;
            let mut rng = rng_from(*seed);
            let outcome = arena
                .battle(*entry_id, opponent, Command::rules(*quick), &mut rng)
                .await?;
            Ok(render::battle(&outcome))
        }
        Command::History { command } => match command {
            HistoryCommand::List { limit } => Ok(render::history(&arena.history(*limit).await?)),
            HistoryCommand::Clear => {
                let cleared = arena.clear_history().await?;
                Ok(format!("Battle history cleared ({} records deleted)", cleared))
            }
        },
    }
}
