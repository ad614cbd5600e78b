use edgedock_core::{Action, Command};
use edgedock_windows::ipc;

/// Sends an action to the running daemon via IPC.
pub fn execute(action: Action) {
    if !ipc::is_daemon_running() {
        eprintln!("edgedock is not running.");
        std::process::exit(1);
    }

    match ipc::send_command(&Command::Action { action }) {
        Ok(response) if response.is_ok() => {
            if let Some(msg) = response.message {
                println!("{msg}");
            }
        }
        Ok(response) => {
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into()),
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to send action: {e}");
            std::process::exit(1);
        }
    }
}
