//! member-function: member coverage lookup service.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, builds the Axum router and serves it
//! until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use member_function::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use member_function::create_router;
use member_function::http::start_server;

/// member-function: member coverage lookup over HTTP
#[derive(Parser, Debug)]
#[command(name = "member-function", version, about)]
struct Args {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "member_function=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: it selects the log format
    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config.http).await?;

    Ok(())
}
