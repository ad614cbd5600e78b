use edgedock_core::WindowResult;
use edgedock_core::pid;

use crate::dpi;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_loop_handlers.rs"]
mod daemon_loop_handlers;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the edgedock daemon.
///
/// Background threads run the Win32 event loop (which also owns the
/// global hotkey) and the IPC listener. The main thread owns the dock
/// controller and drives its timers.
pub fn run() -> WindowResult<()> {
    dpi::enable_dpi_awareness();
    pid::write_pid_file()?;

    let result = daemon_loop::daemon_loop();
    if let Err(e) = &result {
        tracing::error!("daemon exited with error: {e}");
    }

    let _ = pid::remove_pid_file();

    result
}
