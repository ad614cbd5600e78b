//! The edge-docking controller.
//!
//! [`DockController`] owns one managed window and decides when it
//! slides off its edge and when it comes back. It never sleeps or spawns
//! threads: the host feeds it window events and calls [`tick`] whenever
//! [`next_deadline`] passes.
//!
//! [`tick`]: DockController::tick
//! [`next_deadline`]: DockController::next_deadline

use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::action::Action;
use crate::animator::{AnimationOutcome, AnimationParams, Animator};
use crate::display::{CombinedBounds, combined_bounds};
use crate::edge::{EdgeDirection, EdgeParams, PositionStatus, classify, shown_position};
use crate::event::WindowEvent;
use crate::poller::{CursorPoller, PollDecision, PollParams, PollSample};
use crate::timer::Timer;
use crate::{Desktop, DockWindow, Point, Rect};

/// Opacity never drops below this, so the window can still be found.
pub const MIN_OPACITY: f64 = 0.1;

/// Runtime state of the managed window.
///
/// Reset to the default whenever a window is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DockState {
    pub is_window_hidden: bool,
    pub is_animating: bool,
    /// Edge of the last dock or move, `None` once moved away.
    pub last_edge_direction: Option<EdgeDirection>,
}

/// Every tunable the controller reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockSettings {
    pub edge: EdgeParams,
    pub animation: AnimationParams,
    pub poll: PollParams,
    pub blur_hide_delay: Duration,
    pub move_debounce: Duration,
    /// Overrides the height the desktop reports.
    pub status_bar_height: Option<i32>,
    /// Distance from the work-area corner used by `reset_position`.
    pub margin: i32,
    pub opacity: f64,
    pub pinned: bool,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            edge: EdgeParams::default(),
            animation: AnimationParams::default(),
            poll: PollParams::default(),
            blur_hide_delay: Duration::from_millis(500),
            move_debounce: Duration::from_millis(200),
            status_bar_height: None,
            margin: 30,
            opacity: 1.0,
            pinned: false,
        }
    }
}

/// Geometry of the managed window at one instant.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    bounds: Rect,
    combined: Option<CombinedBounds>,
    status_bar_height: i32,
    status: PositionStatus,
}

pub struct DockController<W: DockWindow, D: Desktop> {
    settings: DockSettings,
    desktop: D,
    window: Option<W>,
    is_window_hidden: bool,
    last_edge_direction: Option<EdgeDirection>,
    pinned: bool,
    animator: Animator,
    poller: CursorPoller,
    blur_hide: Timer,
    move_debounce: Timer,
    subscribers: Vec<mpsc::Sender<PositionStatus>>,
}

impl<W: DockWindow, D: Desktop> DockController<W, D> {
    pub fn new(desktop: D, settings: DockSettings) -> Self {
        Self {
            desktop,
            window: None,
            is_window_hidden: false,
            last_edge_direction: None,
            pinned: settings.pinned,
            animator: Animator::new(settings.animation),
            poller: CursorPoller::new(settings.poll),
            blur_hide: Timer::new(),
            move_debounce: Timer::new(),
            subscribers: Vec::new(),
            settings,
        }
    }

    // -- window lifecycle --

    /// Starts managing `window`, replacing any previous one.
    ///
    /// A window that is already OS-hidden (left parked by an earlier
    /// session) starts out hidden, docked against the edge it sits on.
    pub fn attach(&mut self, mut window: W) {
        self.reset();
        window.set_opacity(self.settings.opacity.clamp(MIN_OPACITY, 1.0));
        if self.pinned {
            window.set_always_on_top(true);
        }
        let b = window.bounds();
        tracing::info!("managing window at {},{} {}x{}", b.x, b.y, b.width, b.height);
        let hidden = !window.is_visible();
        self.window = Some(window);

        if hidden {
            self.is_window_hidden = true;
            self.last_edge_direction = self.status().and_then(|s| s.direction);
            tracing::info!(edge = ?self.last_edge_direction, "window attached while hidden");
        }
    }

    /// Stops managing the window and returns it, if any.
    pub fn detach(&mut self) -> Option<W> {
        self.reset();
        let window = self.window.take();
        if window.is_some() {
            tracing::info!("window released");
        }
        window
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }

    pub fn settings(&self) -> &DockSettings {
        &self.settings
    }

    pub fn state(&self) -> DockState {
        DockState {
            is_window_hidden: self.is_window_hidden,
            is_animating: self.animator.is_animating(),
            last_edge_direction: self.last_edge_direction,
        }
    }

    /// Classifies the window where it currently is.
    pub fn status(&self) -> Option<PositionStatus> {
        self.snapshot().map(|s| s.status)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Receives a `PositionStatus` every time a move settles.
    pub fn subscribe(&mut self) -> mpsc::Receiver<PositionStatus> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    // -- show / hide --

    /// Hides the window, sliding it off its edge when docked.
    pub fn hide_window(&mut self, now: Instant) {
        if self.animator.is_animating() {
            tracing::debug!("hide ignored, animation in flight");
            return;
        }
        if self.is_window_hidden {
            return;
        }
        let Some(snap) = self.snapshot() else {
            return;
        };

        match snap.status.direction {
            Some(direction) => self.slide_out(&snap, direction, now),
            None => {
                if let Some(window) = self.live_window() {
                    window.hide();
                }
                self.is_window_hidden = true;
                tracing::debug!("window hidden in place");
            }
        }
    }

    /// Shows the window, sliding it back in when it was docked.
    pub fn show_window(&mut self, now: Instant) {
        if self.animator.is_animating() {
            tracing::debug!("show ignored, animation in flight");
            return;
        }
        let Some(snap) = self.snapshot() else {
            return;
        };

        if !self.is_window_hidden {
            if let Some(window) = self.live_window() {
                window.show();
            }
            return;
        }

        let target = match (snap.status.direction, snap.combined) {
            (Some(direction), Some(combined)) => Some((
                direction,
                shown_position(snap.bounds, direction, &combined, snap.status_bar_height),
            )),
            _ => None,
        };

        match target {
            Some((direction, to)) => {
                let Some(window) = self.live_window() else {
                    return;
                };
                window.set_always_on_top(true);
                window.show();
                self.animator
                    .start(snap.bounds.origin(), to, direction, false, now);
                self.last_edge_direction = Some(direction);
            }
            None => {
                let pinned = self.pinned;
                let Some(window) = self.live_window() else {
                    return;
                };
                window.show();
                if !pinned {
                    window.set_always_on_top(false);
                }
                self.is_window_hidden = false;
                tracing::debug!("window shown in place");
            }
        }
    }

    /// Hotkey semantics: shows a hidden window, hides a visible one.
    pub fn toggle(&mut self, now: Instant) {
        if self.is_window_hidden {
            self.show_window(now);
        } else {
            self.hide_window(now);
        }
    }

    // -- supplementary actions --

    /// Places the window at the top-right of the work area.
    pub fn reset_position(&mut self) {
        if self.animator.is_animating() {
            return;
        }
        let work_area = self.desktop.work_area();
        let margin = self.settings.margin;
        let Some(window) = self.live_window() else {
            return;
        };
        let bounds = window.bounds();
        let x = work_area.right() - bounds.width - margin;
        let y = work_area.y + margin;
        window.set_position(x, y);
        window.show();
        self.is_window_hidden = false;
        self.last_edge_direction = None;
        tracing::debug!(x, y, "position reset");

        if let Some(status) = self.status() {
            self.broadcast(status);
        }
    }

    /// Flips always-on-top. A pinned window stays on top after reveal.
    pub fn toggle_pin(&mut self) {
        let pinned = !self.pinned;
        let Some(window) = self.live_window() else {
            return;
        };
        window.set_always_on_top(pinned);
        self.pinned = pinned;
        tracing::debug!(pinned, "pin toggled");
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(MIN_OPACITY, 1.0)
        };
        if let Some(window) = self.live_window() {
            window.set_opacity(opacity);
            self.settings.opacity = opacity;
        }
    }

    pub fn apply(&mut self, action: &Action, now: Instant) {
        tracing::debug!(?action, "applying action");
        match action {
            Action::Show => self.show_window(now),
            Action::Hide => self.hide_window(now),
            Action::Toggle => self.toggle(now),
            Action::TogglePin => self.toggle_pin(),
            Action::ResetPosition => self.reset_position(),
            Action::SetOpacity(opacity) => self.set_opacity(*opacity),
        }
    }

    // -- events and time --

    pub fn handle_event(&mut self, event: WindowEvent, now: Instant) {
        match event {
            WindowEvent::Focused => self.blur_hide.cancel(),
            WindowEvent::Blurred => {
                if self.is_window_hidden || self.animator.is_animating() {
                    return;
                }
                if self.status().is_some_and(|s| s.is_near_edge) {
                    self.blur_hide.arm(now, self.settings.blur_hide_delay);
                }
            }
            WindowEvent::Moved => {
                // Our own animation steps show up as moves too.
                if self.animator.is_animating() || self.window.is_none() {
                    return;
                }
                self.move_debounce.arm(now, self.settings.move_debounce);
            }
            WindowEvent::Closed => {
                self.detach();
            }
        }
    }

    /// Runs everything that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(window) = self.window.as_mut()
            && let Some(outcome) = self.animator.tick(now, window)
        {
            self.finish_animation(outcome);
        }

        if self.blur_hide.fire(now) {
            tracing::debug!("blur delay elapsed");
            self.hide_window(now);
        }

        if self.move_debounce.fire(now) {
            self.settle_move(now);
        }

        if self.poller.leave_fired(now) {
            self.leave_elapsed(now);
        }

        if self.poller.due(now) {
            self.poll(now);
        }
    }

    /// The earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.window.is_none() {
            return None;
        }
        [
            self.animator.next_deadline(),
            self.blur_hide.deadline(),
            self.move_debounce.deadline(),
            self.poller.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // -- internals --

    fn reset(&mut self) {
        self.is_window_hidden = false;
        self.last_edge_direction = None;
        self.animator.cancel();
        self.poller.reset();
        self.blur_hide.cancel();
        self.move_debounce.cancel();
    }

    fn live_window(&mut self) -> Option<&mut W> {
        self.window.as_mut().filter(|w| !w.is_destroyed())
    }

    fn status_bar_height(&self) -> i32 {
        self.settings
            .status_bar_height
            .unwrap_or_else(|| self.desktop.status_bar_height())
    }

    fn snapshot(&self) -> Option<Snapshot> {
        let window = self.window.as_ref().filter(|w| !w.is_destroyed())?;
        let bounds = window.bounds();
        let status_bar_height = self.status_bar_height();
        let combined = combined_bounds(&self.desktop.displays());

        let status = match &combined {
            Some(c) => classify(bounds, c, status_bar_height, &self.settings.edge),
            None => {
                tracing::warn!("no displays reported, treating window as free-floating");
                PositionStatus {
                    is_near_edge: false,
                    is_out_of_bounds: false,
                    direction: None,
                    hidden_bounds: bounds,
                }
            }
        };

        Some(Snapshot {
            bounds,
            combined,
            status_bar_height,
            status,
        })
    }

    fn sample(&self) -> Option<PollSample> {
        let snap = self.snapshot()?;
        Some(PollSample {
            cursor: self.desktop.cursor_position(),
            work_area: self.desktop.work_area(),
            window: snap.bounds,
            status: snap.status,
        })
    }

    fn slide_out(&mut self, snap: &Snapshot, direction: EdgeDirection, now: Instant) {
        self.blur_hide.cancel();
        self.poller.cancel_leave();
        let to: Point = snap.status.hidden_bounds.origin();
        if self
            .animator
            .start(snap.bounds.origin(), to, direction, true, now)
        {
            self.last_edge_direction = Some(direction);
        }
    }

    fn finish_animation(&mut self, outcome: AnimationOutcome) {
        self.is_window_hidden = outcome.hidden;
        if !outcome.hidden
            && !self.pinned
            && let Some(window) = self.live_window()
        {
            window.set_always_on_top(false);
        }
        tracing::debug!(
            direction = %outcome.direction,
            hidden = outcome.hidden,
            "animation finished"
        );
    }

    fn settle_move(&mut self, now: Instant) {
        let Some(snap) = self.snapshot() else {
            return;
        };
        self.last_edge_direction = snap.status.direction;

        if snap.status.is_out_of_bounds
            && !self.is_window_hidden
            && !self.animator.is_animating()
            && let Some(direction) = snap.status.direction
        {
            tracing::debug!(%direction, "window dropped past edge, parking");
            self.slide_out(&snap, direction, now);
        }

        self.broadcast(snap.status);
    }

    fn leave_elapsed(&mut self, now: Instant) {
        if self.is_window_hidden || self.animator.is_animating() {
            return;
        }
        let Some(sample) = self.sample() else {
            return;
        };
        if self.poller.cursor_still_away(&sample) {
            tracing::debug!("cursor left docked window");
            self.hide_window(now);
        }
    }

    fn poll(&mut self, now: Instant) {
        let Some(sample) = self.sample() else {
            return;
        };
        match self.poller.decide(&sample, &self.state()) {
            PollDecision::Reveal => {
                tracing::debug!("cursor on pull-tab, revealing");
                self.poller.cancel_leave();
                self.show_window(now);
            }
            PollDecision::ArmLeave => self.poller.arm_leave(now),
            PollDecision::CancelLeave => self.poller.cancel_leave(),
            PollDecision::Idle => {}
        }
    }

    fn broadcast(&mut self, status: PositionStatus) {
        self.subscribers.retain(|tx| tx.send(status).is_ok());
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
