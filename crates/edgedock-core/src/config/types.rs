//! Section types for the edgedock configuration file.
use serde::{Deserialize, Serialize};

/// Edge detection and placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Distance in pixels within which a window counts as near an edge.
    pub near_edge_threshold: i32,
    /// Pixels of a hidden window left on screen to hover over.
    pub pull_tab: i32,
    /// Distance in pixels within which the cursor counts as at a screen edge.
    pub cursor_edge_threshold: i32,
    /// Height of the bottom taskbar. Derived from the work area when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar_height: Option<i32>,
    /// Distance from the top-right corner used when resetting the position.
    pub margin: i32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            near_edge_threshold: 10,
            pull_tab: 5,
            cursor_edge_threshold: 5,
            status_bar_height: None,
            margin: 30,
        }
    }
}

/// Slide animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of position updates per slide.
    pub steps: u32,
    /// Total slide duration in milliseconds.
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            duration_ms: 200,
        }
    }
}

/// Delays, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub poll_interval_ms: u64,
    /// How long the cursor must stay away before a docked window hides.
    pub leave_delay_ms: u64,
    /// How long after losing focus a near-edge window hides.
    pub blur_hide_delay_ms: u64,
    /// Quiet period after the last move before the position is evaluated.
    pub move_debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            leave_delay_ms: 500,
            blur_hide_delay_ms: 500,
            move_debounce_ms: 200,
        }
    }
}

/// Which window to manage and how it looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Case-insensitive substring of the managed window's title.
    pub title: String,
    /// Window opacity (0.1 to 1.0).
    pub opacity: f64,
    /// Keep the window always on top.
    pub pinned: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "To-Do".into(),
            opacity: 1.0,
            pinned: false,
        }
    }
}
