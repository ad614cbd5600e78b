use serde::{Deserialize, Serialize};

/// An action that can be triggered by a hotkey or CLI command.
///
/// Actions represent user-initiated operations on the docked window.
/// They are distinct from window events (which come from the OS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Reveal the window, sliding it in if it is docked.
    Show,
    /// Hide the window, sliding it out if it is near an edge.
    Hide,
    /// Show when hidden, hide otherwise.
    Toggle,
    /// Toggle the window's always-on-top pin.
    TogglePin,
    /// Move the window to its default spot at the top-right.
    ResetPosition,
    /// Set window opacity (clamped to 0.1..=1.0).
    SetOpacity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_actions_serialize_as_bare_names() {
        assert_eq!(serde_json::to_string(&Action::Toggle).unwrap(), r#""Toggle""#);
    }

    #[test]
    fn opacity_carries_its_value() {
        // Act
        let action: Action = serde_json::from_str(r#"{"SetOpacity":0.5}"#).unwrap();

        // Assert
        assert_eq!(action, Action::SetOpacity(0.5));
    }
}
