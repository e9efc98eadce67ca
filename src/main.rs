//! Beacon: an info and liveness HTTP service.
//!
//! This is the application entry point. It records the process start,
//! initializes tracing, loads configuration from an optional TOML file,
//! builds the Axum router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use beacon::{create_router, http, uptime, AppState};

/// Beacon: an info and liveness HTTP service
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "beacon=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    uptime::mark_process_start();

    let args = Args::parse();

    // Config is loaded before tracing so the log format can come from it
    let config = AppConfig::resolve(args.config.as_deref())?;
    let config_path = args
        .config
        .as_deref()
        .map_or_else(|| DEFAULT_CONFIG_PATH.to_string(), |p| p.display().to_string());

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        path = %config_path,
        host = %config.http.host,
        port = config.http.port,
        owner = %config.service.owner,
        "Loaded configuration"
    );

    let app = create_router(AppState::new(&config));

    http::start_server(app, &config.http).await?;

    Ok(())
}
