//! version-app: a demo version-reporting service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from the environment, sets up the Axum router and starts the
//! HTTP server. A bind failure ends the process.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use version_app::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use version_app::http::start_server;
use version_app::{create_router, AppState};

/// version-app: reports version, host and database status over HTTP
#[derive(Parser, Debug)]
#[command(name = "version-app", version, about)]
struct Args {
    /// Log level filter (e.g., "version_app=debug,sqlx=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    let config = AppConfig::from_env();
    tracing::info!(
        version = %config.version,
        db_host = %config.db.host,
        db_port = %config.db.port,
        db_name = %config.db.name,
        port = %config.http.port,
        "Starting version-app"
    );

    let http_config = config.http.clone();
    let app = create_router(AppState::new(config));

    if let Err(e) = start_server(app, &http_config).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
