pub mod action;
pub mod animator;
pub mod config;
pub mod controller;
pub mod display;
pub mod edge;
pub mod error;
pub mod event;
pub mod ipc;
pub mod log;
pub mod pid;
pub mod poller;
pub mod rect;
pub mod sim;
pub mod timer;
pub mod window;

pub use action::Action;
pub use config::Config;
pub use controller::{DockController, DockSettings, DockState};
pub use edge::{EdgeDirection, PositionStatus};
pub use error::{Error, WindowResult};
pub use event::WindowEvent;
pub use ipc::{Command, DockReport, PIPE_NAME, Response};
pub use rect::{Point, Rect};
pub use window::{Desktop, DockWindow};
