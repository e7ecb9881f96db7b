//! groupmute - group chat moderation bot
//!
//! Runs the moderation engine against the console transport: inbound events
//! as JSON lines on stdin, replies and retractions as JSON lines on stdout.
//! Logs go to stderr.

use groupmute::config::{self, Config, LogFormat, LoggingConfig};
use groupmute::network::{ConsoleGateway, RosterSource, console};
use groupmute::services::ModerationEngine;
use groupmute::services::roles::MetadataRoleOracle;
use groupmute::telemetry::spans;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{Instrument, error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            // Tracing isn't configured yet; report on stderr directly.
            eprintln!("Failed to load config {config_path}: {e}");
            return Err(e.into());
        }
    };

    init_tracing(&config.logging);

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "Refusing to start with {} configuration error(s). See messages above.",
            errors.len()
        ));
    }

    let bot = config.bot.member_id();
    info!(
        bot = %bot,
        name = %config.bot.name,
        groups = config.groups.len(),
        "Starting groupmute"
    );

    groupmute::metrics::init();
    if let Some(port) = config.metrics.port {
        tokio::spawn(groupmute::http::run_http_server(port));
    }

    let roster = RosterSource::from_config(&config.groups);
    let roles = Arc::new(MetadataRoleOracle::new(roster, bot));
    let gateway = Arc::new(ConsoleGateway::new(tokio::io::stdout()));
    let engine = ModerationEngine::new(roles, gateway);

    let input = BufReader::new(tokio::io::stdin());
    let session = console::run(&engine, input)
        .instrument(spans::transport("console"));

    tokio::select! {
        result = session => {
            let stats = result?;
            info!(
                processed = stats.processed,
                skipped = stats.skipped,
                malformed = stats.malformed,
                groups = engine.store().group_count(),
                muted = engine.store().muted_total().await,
                "Input closed, shutting down"
            );
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
