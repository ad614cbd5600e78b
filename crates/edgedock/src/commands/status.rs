use edgedock_core::ipc::DockReport;
use edgedock_core::{Command, pid};
use edgedock_windows::{ipc, process};

pub fn execute() {
    if ipc::is_daemon_running() {
        match ipc::send_command(&Command::Status) {
            Ok(response) => match response.dock {
                Some(report) => print_report(&report),
                None => println!("edgedock is running."),
            },
            Err(e) => println!("edgedock is running (status unavailable: {e})."),
        }
        return;
    }

    // Pipe isn't responding; check for a stale PID file.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("edgedock process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = pid::remove_pid_file();
            println!("edgedock is not running (cleaned up stale PID file).");
        }
    } else {
        println!("edgedock is not running.");
    }
}

fn print_report(report: &DockReport) {
    println!("edgedock is running.");
    match &report.window {
        Some(title) => println!("  window     {title}"),
        None => {
            println!("  window     (waiting for window)");
            return;
        }
    }
    println!("  hidden     {}", report.hidden);
    println!("  animating  {}", report.animating);
    println!("  pinned     {}", report.pinned);
    println!(
        "  edge       {}",
        report.last_edge.as_deref().unwrap_or("none")
    );
    if let Some(position) = &report.position {
        let b = position.hidden_bounds;
        println!(
            "  position   near_edge={} out_of_bounds={} hidden_at=({}, {})",
            position.is_near_edge, position.is_out_of_bounds, b.x, b.y
        );
    }
}
