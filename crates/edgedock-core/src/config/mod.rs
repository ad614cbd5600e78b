pub mod keybinding;
mod loader;
pub mod template;
mod types;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::WindowResult;
use crate::animator::AnimationParams;
use crate::controller::{DockSettings, MIN_OPACITY};
use crate::edge::EdgeParams;
use crate::log::LogConfig;
use crate::poller::PollParams;

pub use keybinding::{Keybinding, Modifier};
pub use loader::{config_dir, config_path, load, parse, try_load};
pub use types::{AnimationConfig, DockConfig, TimingConfig, WindowConfig};

/// Top-level configuration for edgedock.
///
/// Loaded from `~/.config/edgedock/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global show/hide accelerator, e.g. `"CmdOrCtrl+Shift+D"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    pub dock: DockConfig,
    pub animation: AnimationConfig,
    pub timing: TimingConfig,
    pub window: WindowConfig,
    pub logging: LogConfig,
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Zero steps, zero intervals and negative distances would make the
    /// dock either spin or never trigger.
    pub fn validate(&mut self) {
        let dock = &mut self.dock;
        dock.near_edge_threshold = dock.near_edge_threshold.clamp(0, 200);
        dock.pull_tab = dock.pull_tab.clamp(1, 100);
        dock.cursor_edge_threshold = dock.cursor_edge_threshold.clamp(0, 100);
        dock.status_bar_height = dock.status_bar_height.map(|h| h.clamp(0, 500));
        dock.margin = dock.margin.clamp(0, 1000);

        self.animation.steps = self.animation.steps.clamp(1, 120);
        self.animation.duration_ms = self.animation.duration_ms.clamp(0, 5000);

        let timing = &mut self.timing;
        timing.poll_interval_ms = timing.poll_interval_ms.clamp(10, 5000);
        timing.leave_delay_ms = timing.leave_delay_ms.min(60_000);
        timing.blur_hide_delay_ms = timing.blur_hide_delay_ms.min(60_000);
        timing.move_debounce_ms = timing.move_debounce_ms.clamp(10, 5000);

        let opacity = self.window.opacity;
        self.window.opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(MIN_OPACITY, 1.0)
        };

        if self.hotkey.as_deref().is_some_and(|h| h.trim().is_empty()) {
            self.hotkey = None;
        }
    }

    /// Parses the configured hotkey, if any.
    pub fn keybinding(&self) -> WindowResult<Option<Keybinding>> {
        self.hotkey
            .as_deref()
            .map(Keybinding::parse_accelerator)
            .transpose()
    }

    /// Builds the controller tunables from this configuration.
    pub fn dock_settings(&self) -> DockSettings {
        let ms = Duration::from_millis;
        DockSettings {
            edge: EdgeParams {
                near_edge_threshold: self.dock.near_edge_threshold,
                pull_tab: self.dock.pull_tab,
            },
            animation: AnimationParams {
                steps: self.animation.steps,
                duration: ms(self.animation.duration_ms),
            },
            poll: PollParams {
                interval: ms(self.timing.poll_interval_ms),
                leave_delay: ms(self.timing.leave_delay_ms),
                cursor_edge_threshold: self.dock.cursor_edge_threshold,
            },
            blur_hide_delay: ms(self.timing.blur_hide_delay_ms),
            move_debounce: ms(self.timing.move_debounce_ms),
            status_bar_height: self.dock.status_bar_height,
            margin: self.dock.margin,
            opacity: self.window.opacity,
            pinned: self.window.pinned,
        }
    }
}
