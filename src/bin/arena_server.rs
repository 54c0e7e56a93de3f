use clap::Parser;
use poke_arena::server::{self, AppState, JsonStore};
use poke_arena::utils::{logger, validation::Validate};
use poke_arena::ServerConfig;

#[derive(Parser)]
#[command(name = "arena-server")]
#[command(about = "Roster and battle-history backend for poke-arena")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "arena-server.toml")]
    config: String,

    /// Override the listen address from config
    #[arg(long)]
    bind: Option<String>,

    /// Override the data directory from config
    #[arg(long)]
    data_dir: Option<String>,

    /// Keep data in memory only
    #[arg(long)]
    in_memory: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match ServerConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }
    if args.in_memory {
        config.storage.in_memory = true;
    }

    logger::init_server_logger(config.logging.json, args.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let addr = config.bind_addr()?;
    let store = JsonStore::open(config.storage_backend(), config.storage.file_name.clone()).await?;
    let app = server::router(AppState::new(store), config.server.cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::serve(listener, app).await?;

    Ok(())
}
