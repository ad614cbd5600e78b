use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Action, WindowResult};

/// A global hotkey: a key combination mapped to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinding {
    /// The action to trigger.
    pub action: Action,
    /// Key name (e.g. "D", "Space", "F1").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "shift"]).
    pub modifiers: Vec<Modifier>,
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

impl Modifier {
    /// Parses one accelerator token, accepting the common aliases.
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "alt" | "option" => Some(Self::Alt),
            "shift" => Some(Self::Shift),
            "ctrl" | "control" | "commandorcontrol" | "cmdorctrl" => Some(Self::Ctrl),
            "win" | "super" | "meta" | "cmd" | "command" => Some(Self::Win),
            _ => None,
        }
    }
}

impl Keybinding {
    /// Parses an accelerator such as `"CmdOrCtrl+Shift+D"`.
    ///
    /// Every token but the last must be a modifier; the last token is
    /// the key. The binding always triggers [`Action::Toggle`].
    pub fn parse_accelerator(accelerator: &str) -> WindowResult<Self> {
        let tokens: Vec<&str> = accelerator.split('+').map(str::trim).collect();
        let Some((key, mods)) = tokens.split_last() else {
            return Err(format!("empty hotkey: {accelerator:?}").into());
        };
        if key.is_empty() || Modifier::parse(key).is_some() {
            return Err(format!("hotkey has no key: {accelerator:?}").into());
        }

        let mut modifiers = Vec::with_capacity(mods.len());
        for token in mods {
            let modifier = Modifier::parse(token)
                .ok_or_else(|| format!("unknown modifier {token:?} in hotkey {accelerator:?}"))?;
            if !modifiers.contains(&modifier) {
                modifiers.push(modifier);
            }
        }

        Ok(Self {
            action: Action::Toggle,
            key: key.to_string(),
            modifiers,
        })
    }
}

impl fmt::Display for Keybinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            let name = match m {
                Modifier::Alt => "Alt",
                Modifier::Shift => "Shift",
                Modifier::Ctrl => "Ctrl",
                Modifier::Win => "Win",
            };
            write!(f, "{name}+")?;
        }
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_electron_style_accelerator() {
        // Act
        let binding = Keybinding::parse_accelerator("CmdOrCtrl+Shift+D").unwrap();

        // Assert
        assert_eq!(binding.action, Action::Toggle);
        assert_eq!(binding.key, "D");
        assert_eq!(binding.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
    }

    #[test]
    fn accepts_modifier_aliases() {
        let binding = Keybinding::parse_accelerator("CommandOrControl+Option+Super+F1").unwrap();

        assert_eq!(
            binding.modifiers,
            vec![Modifier::Ctrl, Modifier::Alt, Modifier::Win]
        );
        assert_eq!(binding.key, "F1");
    }

    #[test]
    fn tolerates_spaces_and_duplicates() {
        let binding = Keybinding::parse_accelerator("ctrl + Control + Space").unwrap();

        assert_eq!(binding.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(binding.key, "Space");
    }

    #[test]
    fn rejects_modifier_only_accelerator() {
        assert!(Keybinding::parse_accelerator("Ctrl+Shift").is_err());
        assert!(Keybinding::parse_accelerator("Ctrl+").is_err());
    }

    #[test]
    fn rejects_unknown_modifier() {
        assert!(Keybinding::parse_accelerator("Hyper+D").is_err());
    }

    #[test]
    fn displays_normalized_form() {
        let binding = Keybinding::parse_accelerator("cmdorctrl+alt+d").unwrap();

        assert_eq!(binding.to_string(), "Ctrl+Alt+d");
    }
}
