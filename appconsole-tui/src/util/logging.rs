//! File logging
//!
//! The terminal is owned by the UI, so log output goes to
//! `<data dir>/logs/appconsole.log.<date>`. `RUST_LOG` overrides the default
//! `info` level. Records of the `log` facade used by the library crates are
//! forwarded to the same subscriber.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "appconsole.log";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines get flushed.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}
