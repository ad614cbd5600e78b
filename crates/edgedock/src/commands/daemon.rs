pub fn execute() {
    if let Err(e) = edgedock_windows::daemon::run() {
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
