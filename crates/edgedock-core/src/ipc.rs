use serde::{Deserialize, Serialize};

use crate::Action;
use crate::controller::DockState;
use crate::edge::PositionStatus;

/// The named pipe path used for IPC between CLI and daemon.
pub const PIPE_NAME: &str = r"\\.\pipe\edgedock";

/// A command sent from the CLI to the daemon.
///
/// These are serialized as one JSON line and sent over the named pipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop.
    Stop,
    /// Request the dock state and the window's current classification.
    Status,
    /// Run a dock action (show, hide, toggle, ...).
    Action { action: Action },
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Dock snapshot, only for `Status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock: Option<DockReport>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// What `edgedock status` prints about the managed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockReport {
    /// Title of the managed window, if one is attached.
    pub window: Option<String>,
    pub hidden: bool,
    pub animating: bool,
    pub pinned: bool,
    pub last_edge: Option<String>,
    pub position: Option<PositionStatus>,
}

impl DockReport {
    pub fn new(
        window: Option<String>,
        state: DockState,
        pinned: bool,
        position: Option<PositionStatus>,
    ) -> Self {
        Self {
            window,
            hidden: state.is_window_hidden,
            animating: state.is_animating,
            pinned,
            last_edge: state.last_edge_direction.map(|d| d.as_str().to_string()),
            position,
        }
    }
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
            dock: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
            dock: None,
        }
    }

    pub fn ok_with_report(report: DockReport) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
            dock: Some(report),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            dock: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}
