//! One module per subcommand.
//!
//! Commands that talk to the OS or the daemon only exist on Windows;
//! elsewhere they are replaced by stubs from `unsupported`.

pub mod init;

#[cfg(windows)]
pub mod action;
#[cfg(windows)]
pub mod daemon;
#[cfg(windows)]
pub mod start;
#[cfg(windows)]
pub mod status;
#[cfg(windows)]
pub mod stop;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{action, daemon, start, status, stop};

pub mod debug {
    pub mod classify;
    pub mod simulate;

    #[cfg(windows)]
    pub mod find;
    #[cfg(not(windows))]
    pub use super::unsupported::find;
}
