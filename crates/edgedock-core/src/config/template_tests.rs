use super::*;
use crate::Config;

#[test]
fn config_template_parses_as_valid_config() {
    // Arrange
    let toml_str = generate_config();

    // Act
    let result: Result<Config, _> = toml::from_str(&toml_str);

    // Assert
    assert!(
        result.is_ok(),
        "config template is not valid TOML: {result:?}"
    );
}

#[test]
fn config_template_matches_default_values() {
    // Arrange
    let toml_str = generate_config();

    // Act
    let mut config: Config = toml::from_str(&toml_str).unwrap();
    config.validate();

    // Assert
    let mut defaults = Config::default();
    defaults.validate();
    assert_eq!(config, defaults);
}

#[test]
fn config_template_leaves_hotkey_unset() {
    let config: Config = toml::from_str(&generate_config()).unwrap();

    assert_eq!(config.hotkey, None);
    assert_eq!(config.dock.status_bar_height, None);
}

#[test]
fn commented_hotkey_example_is_a_valid_accelerator() {
    // Arrange
    let line = generate_config()
        .lines()
        .find(|l| l.starts_with("# hotkey = "))
        .map(|l| l.trim_start_matches("# ").to_string())
        .unwrap();

    // Act
    let config: Config = toml::from_str(&line).unwrap();

    // Assert
    assert!(config.keybinding().unwrap().is_some());
}
