use crate::core::{Opponent, ENEMY_TEAM_SIZE};
use crate::domain::services::battle::StatRules;
use crate::utils::error::{ArenaError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Browse the creature catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Manage your roster (at most 6 creatures)
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Draw a random enemy team from the first generation
    Enemy {
        #[arg(long, default_value_t = ENEMY_TEAM_SIZE)]
        size: usize,

        /// Seed for a reproducible team
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Battle a roster entry against a catalog creature
    Battle {
        /// Roster entry id (see `roster list`)
        entry_id: u64,

        /// Catalog id of the opponent
        #[arg(long, conflicts_with = "random", required_unless_present = "random")]
        opponent: Option<u32>,

        /// Pick a random first-generation opponent
        #[arg(long)]
        random: bool,

        /// Compare hp, attack and speed only
        #[arg(long)]
        quick: bool,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Inspect or clear the battle history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommand {
    /// List one page of the catalog
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Only show names containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a creature's details
    Show { id: u32 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RosterCommand {
    List {
        /// Fetch current catalog data for every entry
        #[arg(long)]
        details: bool,
    },
    Add {
        pokemon_id: u32,
    },
    Remove {
        entry_id: u64,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    Clear,
}

impl Command {
    pub fn opponent(opponent: Option<u32>, random: bool) -> Result<Opponent> {
        match (opponent, random) {
            (_, true) => Ok(Opponent::Random),
            (Some(id), false) => Ok(Opponent::Catalog(id)),
            (None, false) => Err(ArenaError::ValidationError {
                message: "either --opponent or --random is required".to_string(),
            }),
        }
    }

    pub fn rules(quick: bool) -> StatRules {
        if quick {
            StatRules::Quick
        } else {
            StatRules::Standard
        }
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Catalog {
                command: CatalogCommand::List { page, .. },
            } => validate_positive_number("page", *page, 1),
            Command::Catalog {
                command: CatalogCommand::Show { id },
            }
            | Command::Roster {
                command: RosterCommand::Add { pokemon_id: id },
            } => validate_positive_number("id", *id as usize, 1),
            Command::Enemy { size, .. } => validate_range("size", *size, 1, 12),
            Command::Battle {
                opponent, random, ..
            } => Command::opponent(*opponent, *random).map(|_| ()),
            Command::History {
                command: HistoryCommand::List { limit: Some(limit) },
            } => validate_positive_number("limit", *limit, 1),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    fn parse(args: &[&str]) -> Command {
        let mut full = vec!["poke-arena"];
        full.extend_from_slice(args);
        CliConfig::try_parse_from(full).unwrap().command
    }

    #[test]
    fn test_battle_needs_an_opponent() {
        let mut args = vec!["poke-arena", "battle", "1"];
        assert!(CliConfig::try_parse_from(args.clone()).is_err());

        args.extend(["--opponent", "4", "--random"]);
        assert!(CliConfig::try_parse_from(args).is_err());
    }

    #[test]
    fn test_battle_arguments() {
        match parse(&["battle", "2", "--opponent", "4", "--quick"]) {
            Command::Battle {
                entry_id,
                opponent,
                random,
                quick,
                ..
            } => {
                assert_eq!(entry_id, 2);
                assert_eq!(Command::opponent(opponent, random).unwrap(), Opponent::Catalog(4));
                assert_eq!(Command::rules(quick), StatRules::Quick);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validation() {
        assert!(parse(&["catalog", "list", "--page", "0"]).validate().is_err());
        assert!(parse(&["catalog", "show", "0"]).validate().is_err());
        assert!(parse(&["enemy", "--size", "20"]).validate().is_err());
        assert!(parse(&["enemy"]).validate().is_ok());
        assert!(parse(&["history", "list", "--limit", "10"]).validate().is_ok());
        assert!(parse(&["history", "clear"]).validate().is_ok());
    }
}
