//! One-shot watchlist enrichment job.
//!
//! Reads `NOTION_API_SECRET` and `NOTION_DATABASE` from the environment
//! (optionally via a local `.env` file), queries one page of watchlist
//! records, and fills in metadata from the matching media catalog.

use clap::Parser;

use watchlist_sync_core::config::Config;
use watchlist_sync_core::lookup::ProviderRegistry;
use watchlist_sync_core::sync;
use watchlist_sync_core::workspace::NotionWorkspace;

/// Enrich watchlist records with metadata from external media catalogs.
/// All configuration comes from the environment; the job takes no flags.
#[derive(Parser)]
#[command(name = "watchlist-sync")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    let workspace = NotionWorkspace::new(config.api_token, config.database_id);
    let registry = ProviderRegistry::with_default_providers();
    sync::run(&workspace, &registry)?;
    tracing::info!("watchlist sync complete");
    Ok(())
}
