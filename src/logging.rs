//! Logging setup for folio.
//!
//! Output goes to stdout and, when the log file can be opened, to that file
//! as well. `RUST_LOG` directives are honoured on top of the configured level.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};
use crate::Result;

/// Map a configured level name onto a tracing level. Unknown names mean info.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Install the subscriber writing to stdout and the configured log file.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let path = Path::new(&config.file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let log_file = Arc::new(File::create(path)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter(&config.level))
        .init();

    Ok(())
}

/// Install a stdout-only subscriber, used when the log file is unavailable.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true),
        )
        .with(env_filter(level))
        .init();
}

/// Record where the service listens and which upstreams it reads.
pub fn log_targets(config: &Config) {
    info!(
        host = %config.web.host,
        port = config.web.port,
        "Listening address"
    );
    info!(
        url = %config.feed.url,
        freshness_secs = config.feed.freshness_secs,
        "Article feed"
    );
    if config.stats.enabled {
        info!(
            url = %config.stats.repos_url(),
            freshness_secs = config.stats.freshness_secs,
            "Repository statistics"
        );
    } else {
        info!("Repository statistics disabled");
    }
}
