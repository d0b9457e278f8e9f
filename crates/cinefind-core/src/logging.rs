//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/cinefind/logs/` because the TUI owns
/// stdout. Log level is controlled by the `CINEFIND_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CINEFIND_LOG=debug cargo run
/// CINEFIND_LOG=cinefind_api=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "cinefind.log");

    let env_filter =
        EnvFilter::try_from_env("CINEFIND_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::debug!("Writing logs to {}", log_dir.display());

    Ok(())
}

/// Filter used when `CINEFIND_LOG` is unset or unparsable
fn default_filter() -> &'static str {
    "cinefind=info,cinefind_app=info,cinefind_api=info,warn"
}

/// Directory holding the daily `cinefind.log` files
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinefind")
        .join("logs")
}
