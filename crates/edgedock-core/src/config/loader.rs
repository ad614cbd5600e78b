use std::io;
use std::path::PathBuf;

use super::Config;
use crate::WindowResult;

/// Returns the config directory: `~/.config/edgedock/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("edgedock"))
}

/// Returns the config file path: `~/.config/edgedock/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Values are clamped via [`Config::validate`] before returning.
pub fn try_load() -> WindowResult<Config> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path)?;
    parse(&content)
}

/// Parses and validates a config document.
pub fn parse(content: &str) -> WindowResult<Config> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are logged.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(crate::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            tracing::warn!("config: {e}, using defaults");
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}
