//! Launchboard Server
//!
//! Run with: cargo run --bin launchboard
//!
//! # Configuration
//!
//! Config file (first found): `--config`, `~/.config/launchboard/config.toml`,
//! `/etc/launchboard/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `LAUNCHBOARD_DATASET`: Path to the launch CSV (default: spacex_launch_dash.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8030)
//! - `LAUNCHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use launchboard::api::{serve, AppState};
use launchboard::config::{Config, LoggingConfig};
use launchboard::dataset::load_dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Launch records dashboard server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch CSV path (overrides config)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let dataset = load_dataset(&config.dataset.path)
        .with_context(|| format!("failed to load dataset {:?}", config.dataset.path))?;

    match dataset.payload_bounds() {
        Some(bounds) => tracing::info!(
            records = dataset.len(),
            sites = dataset.sites().len(),
            min_payload = bounds.min,
            max_payload = bounds.max,
            "Dataset loaded"
        ),
        None => tracing::warn!("Dataset is empty; charts will render without data"),
    }

    let state = AppState::from_config(Arc::new(dataset), &config);
    let api_config = state.config.as_ref().clone();

    serve(state, &api_config).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
