use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galerie_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "galerie")]
#[command(author, version, about = "Terminálová galerie malíře Antonína Kroči")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the exhibition list with live statuses
    Exhibitions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.ui.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Exhibitions) => commands::exhibitions::run(),
    }
}
