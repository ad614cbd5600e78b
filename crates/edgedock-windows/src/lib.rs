//! Win32 backend for edgedock: the managed window, the desktop, the
//! event hook, the global hotkey, the IPC pipe and the daemon.
#![cfg(windows)]

/// Daemon main loop.
pub mod daemon;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Win32 window enumeration.
pub mod enumerate;

/// WinEvent translation for the managed window.
pub mod event;

/// Win32 event loop thread (WinEvent hook and hotkey message pump).
pub mod event_loop;

/// Global hotkey registration.
pub mod hotkey;

/// IPC via Named Pipes.
pub mod ipc;

/// Key name to virtual key code mapping.
pub mod keys;

/// Display enumeration and the live desktop.
pub mod monitor;

mod os_error;

/// Process utilities (alive check, termination).
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::find_window;
pub use monitor::Win32Desktop;
pub use window::Window;
