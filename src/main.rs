use clap::Parser;
use poke_arena::utils::error::ErrorSeverity;
use poke_arena::utils::{logger, validation::Validate};
use poke_arena::{app, Arena, CliConfig, HttpArenaBackend, PokeApiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let catalog = PokeApiClient::from_config(&config)?;
    let backend = HttpArenaBackend::from_config(&config)?;
    let arena = Arena::new(catalog, backend);

    match app::execute(&arena, &config.command).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 4,      // 規則拒絕
                ErrorSeverity::Medium => 2,   // 網路錯誤，可重試
                ErrorSeverity::High => 1,     // 資料錯誤
                ErrorSeverity::Critical => 3, // 系統錯誤
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
