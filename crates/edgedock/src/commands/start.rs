use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

use edgedock_core::{config, pid};
use edgedock_windows::{ipc, process};

/// Process creation flags for a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200) keeps Ctrl+C in the CLI terminal
/// away from the daemon. `CREATE_NO_WINDOW` (0x08000000) gives it no
/// console, so no console handles are inherited.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    if ipc::is_daemon_running() {
        println!("edgedock is already running.");
        return;
    }

    // Clean up a stale PID file from a previous unclean shutdown.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("edgedock process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the edgedock executable: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand.
    let child = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    match child {
        Ok(mut child) => {
            let pid = child.id();
            let _ = child.try_wait();
            let title = config::load().window.title;
            println!("edgedock started (PID: {pid}), docking windows titled {title:?}.");
        }
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    }
}
