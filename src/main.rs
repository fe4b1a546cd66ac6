//! Recofeed Server
//!
//! Run with: cargo run --bin recofeed-server
//!
//! # Configuration
//!
//! Config file (`--config`, or the default locations searched by
//! `Config::load_default`) plus environment overrides:
//! - `RECOFEED_HOST`: Host to bind to (default: 0.0.0.0)
//! - `RECOFEED_PORT`: Port to listen on (default: 5000)
//! - `RECOFEED_CATALOG`: CSV catalog (default: built-in demo products)
//! - `RECOFEED_STATIC_DIR`: Built dashboard to serve at `/`
//! - `RECOFEED_MAX_CONNECTIONS`: Channel limit (default: 1000)
//! - `RUST_LOG`: Log filter (overrides `logging.level`)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use recofeed::api::{serve, AppState};
use recofeed::catalog::Catalog;
use recofeed::config::Config;
use recofeed::logging::init_logging;

#[derive(Parser)]
#[command(name = "recofeed-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Real-time product recommendation service")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// CSV catalog with `product,recommendation` rows (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(catalog) = &args.catalog {
        config.catalog.path = Some(catalog.to_string_lossy().to_string());
    }

    init_logging(&config.logging);

    tracing::info!("Starting Recofeed server v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load_or_demo(config.catalog.path()).context("Failed to load catalog")?;
    tracing::info!("Catalog ready with {} products", catalog.len());

    serve(AppState::new(catalog, config.server)).await?;

    tracing::info!("Recofeed server stopped");
    Ok(())
}
