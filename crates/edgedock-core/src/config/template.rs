/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `edgedock init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# edgedock configuration
# Location: ~/.config/edgedock/config.toml

# Global shortcut that shows or hides the window.
# Modifiers: Ctrl (CmdOrCtrl), Alt (Option), Shift, Win (Super).
# hotkey = "CmdOrCtrl+Shift+D"

[dock]
# Distance in pixels within which a window counts as docked to an edge.
near_edge_threshold = 10
# Pixels of a hidden window left on screen. Hover them to reveal it.
pull_tab = 5
# Distance in pixels within which the cursor counts as at a screen edge.
cursor_edge_threshold = 5
# Height of the bottom taskbar. Detected automatically when unset.
# status_bar_height = 40
# Distance from the top-right corner for "edgedock action reset-position".
margin = 30

[animation]
# Number of position updates per slide.
steps = 10
# Total slide duration in milliseconds.
duration_ms = 200

[timing]
# How often the cursor is sampled, in milliseconds.
poll_interval_ms = 100
# How long the cursor must stay away before a docked window hides.
leave_delay_ms = 500
# How long after losing focus a docked window hides.
blur_hide_delay_ms = 500
# Quiet period after a drag before the new position is evaluated.
move_debounce_ms = 200

[window]
# Manage the first window whose title contains this text.
title = "To-Do"
# Window opacity, from 0.1 to 1.0.
opacity = 1.0
# Keep the window above all others.
pinned = false

[logging]
# Enable file logging to ~/.config/edgedock/logs/edgedock.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
"##
    .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
