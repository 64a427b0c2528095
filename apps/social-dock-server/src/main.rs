mod config;
mod logging;
mod signals;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use axum::Router;
use clap::{Parser, Subcommand};
use sea_orm::Database;
use social_dock::{SocialDockModule, Storage};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Social Dock Server - settings and rendering for the floating social-icon widget
#[derive(Parser)]
#[command(name = "social-dock-server")]
#[command(about = "Social Dock Server - settings and rendering for the floating social-icon widget")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose, cli.mock);

    logging::init(&config.logging);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    if !std::path::Path::new(&config.social_dock.icons_dir).is_dir() {
        tracing::warn!(
            icons_dir = %config.social_dock.icons_dir,
            "Icon directory not found; widgets will render without glyphs"
        );
    }
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn resolve_storage(config: &AppConfig) -> Result<Storage> {
    let Some(database) = config.database.as_ref() else {
        tracing::warn!("No database section found; settings are kept in memory");
        return Ok(Storage::InMemory);
    };

    tracing::info!("Connecting to database");
    let db = Database::connect(database.dsn.as_str())
        .await
        .context("failed to connect to database")?;
    SocialDockModule::migrate(&db).await?;
    Ok(Storage::Database(db))
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Social Dock Server starting");

    let storage = resolve_storage(&config).await?;
    let module = SocialDockModule::default();
    module.init(&config.social_dock, storage);
    let router = module.register_rest(Router::new())?;

    let addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    let cancel = CancellationToken::new();
    let cancel_for_signals = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::warn!(error = %e, "shutdown: signal handling failed");
        }
        cancel_for_signals.cancel();
    });

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!("Social Dock Server stopped");
    Ok(())
}
