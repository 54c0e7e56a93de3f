#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::services::catalog::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, MAX_PAGES_LIMIT};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "poke-arena")]
#[command(about = "Browse the creature catalog, manage a roster and run stat battles")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = crate::adapters::catalog::POKEAPI_BASE_URL)]
    pub catalog_url: String,

    #[arg(
        long,
        global = true,
        env = "ARENA_BACKEND_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    pub backend_url: String,

    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    #[arg(long, global = true, default_value = "5")]
    pub concurrent_requests: usize,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn max_pages(&self) -> usize {
        self.max_pages
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("catalog_url", &self.catalog_url)?;
        validate_url("backend_url", &self.backend_url)?;
        validate_range("page_size", self.page_size, 1, 100)?;
        validate_range("max_pages", self.max_pages, 1, MAX_PAGES_LIMIT)?;
        validate_range("concurrent_requests", self.concurrent_requests, 1, 50)?;
        self.command.validate()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use cli::{CatalogCommand, Command};

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["poke-arena", "catalog", "list"]).unwrap();
        assert_eq!(config.catalog_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_pages, 60);
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.command,
            Command::Catalog {
                command: CatalogCommand::List { page: 1, search: None }
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "poke-arena",
            "roster",
            "list",
            "--backend-url",
            "http://backend:8080",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(config.backend_url(), "http://backend:8080");
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::try_parse_from([
            "poke-arena",
            "--catalog-url",
            "ftp://nowhere",
            "catalog",
            "list",
        ])
        .unwrap();
        assert!(config.validate().is_err());

        let config =
            CliConfig::try_parse_from(["poke-arena", "--page-size", "0", "catalog", "list"])
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_pages_is_bounded() {
        let parse = |max_pages: &str| {
            CliConfig::try_parse_from(["poke-arena", "--max-pages", max_pages, "catalog", "list"])
                .unwrap()
        };
        assert!(parse("1000").validate().is_ok());
        assert!(parse("1001").validate().is_err());
        assert!(parse("18446744073709551615").validate().is_err());
        assert!(parse("0").validate().is_err());
    }
}
