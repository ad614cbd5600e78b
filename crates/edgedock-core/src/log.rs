//! Tracing subscriber setup.
//!
//! Console output goes to stderr and follows `RUST_LOG` (default
//! `warn`). When file logging is enabled, events at or above the
//! configured level are also written to
//! `~/.config/edgedock/logs/edgedock.log`, rotated daily.

use std::fs;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "edgedock.log";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum file log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
        }
    }
}

impl LogConfig {
    /// Filter for the file layer. Unknown levels fall back to `info`.
    pub fn file_filter(&self) -> EnvFilter {
        let level = self.level.trim().to_ascii_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(level),
            _ => EnvFilter::new("info"),
        }
    }
}

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(config: &LogConfig) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file_layer = if config.enabled {
        match logs_dir() {
            Some(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
                Some(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_filter(config.file_filter()),
                )
            }
            None => {
                eprintln!("Warning: could not create log directory, file logging disabled");
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Returns `~/.config/edgedock/logs/`, creating it if needed.
fn logs_dir() -> Option<std::path::PathBuf> {
    let dir = crate::config::config_dir()?.join("logs");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
