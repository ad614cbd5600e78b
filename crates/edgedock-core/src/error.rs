use std::io;

use thiserror::Error;

/// Convenient result type for fallible edgedock operations.
pub type WindowResult<T> = Result<T, Error>;

/// Unified error type for edgedock.
///
/// Dock operations themselves never fail; these errors come from the
/// edges of the system: config files, the PID file, IPC, and OS setup.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading or writing a file or pipe.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A TOML document could not be parsed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON message could not be encoded or decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An OS call failed during setup.
    #[error("OS error: {0}")]
    Os(String),

    /// No top-level window matched the configured title.
    #[error("no window found with a title containing {0:?}")]
    WindowNotFound(String),

    /// The OS reported no displays.
    #[error("no displays connected")]
    NoDisplays,

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
