use std::sync::mpsc;

use edgedock_core::ipc::{Command, Response};
use edgedock_core::{Action, WindowEvent};

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A window event from the event loop.
    Event(WindowEvent),
    /// A user action from the hotkey.
    Action(Action),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
