//! Structured Logger
//!
//! Wraps `tracing` with a console layer, an optional daily-rolling NDJSON
//! file layer, and environment-based level control.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "plugdash.log";

/// Initialize the global structured logger.
///
/// `RUST_LOG` wins over `level`. Console output goes to stderr so command
/// output on stdout stays machine-readable. Fails if the log directory cannot
/// be created; returns `Ok(false)` if a global subscriber was already installed.
pub fn init_logger(level: &str, log_dir: Option<&Path>) -> Result<bool> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Rolling file appender: writes NDJSON to `<dir>/plugdash.log.YYYY-MM-DD`
    let file_layer = match log_dir {
        Some(dir) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(dir)
                .with_context(|| format!("Failed to open log directory: {}", dir.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_dir_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = init_logger("info", Some(&file.path().join("sub"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open log directory"));
    }

    #[test]
    fn writes_json_lines_to_rolling_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_logger("info", Some(dir.path())).unwrap());
        tracing::warn!(catalog = "plugins.json", "catalog written by test");

        let log_file = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
            })
            .expect("no log file created");
        let contents = std::fs::read_to_string(log_file).unwrap();
        let line = contents
            .lines()
            .find(|l| l.contains("catalog written by test"))
            .expect("event not logged");
        let entry: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(entry["fields"]["catalog"], "plugins.json");

        assert!(!init_logger("info", None).unwrap());
    }
}
