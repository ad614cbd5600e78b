use std::fs;
use std::path::PathBuf;

use crate::WindowResult;

/// Returns the per-user data directory, e.g. `%LOCALAPPDATA%\edgedock`.
///
/// Creates the directory if it doesn't exist.
fn data_dir() -> WindowResult<PathBuf> {
    let base = dirs::data_local_dir().ok_or("could not determine local data directory")?;
    let dir = base.join("edgedock");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the path to the PID file.
pub fn pid_path() -> WindowResult<PathBuf> {
    Ok(data_dir()?.join("edgedock.pid"))
}

/// Writes the current process's PID to the PID file.
///
/// Lets the CLI find a daemon whose pipe stopped answering.
pub fn write_pid_file() -> WindowResult<()> {
    fs::write(pid_path()?, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> WindowResult<Option<u32>> {
    let path = pid_path()?;
    if !path.exists() {
        return Ok(None);
    }
    parse_pid(&fs::read_to_string(&path)?).map(Some)
}

/// Removes the PID file. Called when the daemon shuts down cleanly.
pub fn remove_pid_file() -> WindowResult<()> {
    let path = pid_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

fn parse_pid(contents: &str) -> WindowResult<u32> {
    contents
        .trim()
        .parse()
        .map_err(|e| format!("invalid PID file contents: {e}").into())
}
