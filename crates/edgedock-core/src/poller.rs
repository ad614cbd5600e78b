//! Cursor polling for hover-to-reveal and leave-to-hide.
//!
//! The poller samples the cursor on a fixed interval. A hidden window
//! still owns a hit-region at its parked position, so hovering the
//! pull-tab brings it back even though the OS window is hidden.

use std::time::{Duration, Instant};

use crate::controller::DockState;
use crate::edge::{PositionStatus, cursor_at_edge};
use crate::timer::Timer;
use crate::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollParams {
    /// Minimum time between two samples.
    pub interval: Duration,
    /// Grace period before a shown window hides after the cursor left.
    pub leave_delay: Duration,
    /// Distance in pixels within which the cursor counts as at an edge.
    pub cursor_edge_threshold: i32,
}

impl Default for PollParams {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            leave_delay: Duration::from_millis(500),
            cursor_edge_threshold: 5,
        }
    }
}

/// One cursor sample plus the window geometry it is judged against.
#[derive(Debug, Clone, Copy)]
pub struct PollSample {
    pub cursor: Point,
    pub work_area: Rect,
    pub window: Rect,
    pub status: PositionStatus,
}

/// What the controller should do after a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// The cursor hovers a docked window's hidden hit-region.
    Reveal,
    /// The cursor left a docked, shown window.
    ArmLeave,
    /// The cursor is back inside the shown window.
    CancelLeave,
    Idle,
}

#[derive(Debug)]
pub struct CursorPoller {
    params: PollParams,
    last_poll: Option<Instant>,
    leave: Timer,
}

impl CursorPoller {
    pub fn new(params: PollParams) -> Self {
        Self {
            params,
            last_poll: None,
            leave: Timer::new(),
        }
    }

    /// Returns `true` if a sample is due, recording `now` as taken.
    ///
    /// Ticks closer together than the interval are coalesced.
    pub fn due(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_poll
            && now.saturating_duration_since(last) < self.params.interval
        {
            return false;
        }
        self.last_poll = Some(now);
        true
    }

    /// Decides the reaction to a sample.
    pub fn decide(&self, sample: &PollSample, state: &DockState) -> PollDecision {
        if state.is_animating {
            return PollDecision::Idle;
        }

        let cursor = sample.cursor;

        if state.is_window_hidden {
            let docked = sample.status.direction.is_some();
            if docked && sample.status.hidden_bounds.contains(cursor) {
                return PollDecision::Reveal;
            }
            return PollDecision::Idle;
        }

        if sample.window.contains(cursor) {
            return PollDecision::CancelLeave;
        }

        if !self.is_at_edge(sample) && state.last_edge_direction.is_some() {
            return PollDecision::ArmLeave;
        }

        PollDecision::Idle
    }

    /// Whether a fired leave-timer should still hide the window.
    ///
    /// The cursor is re-checked at fire time: it must be outside the
    /// window and away from every screen edge.
    pub fn cursor_still_away(&self, sample: &PollSample) -> bool {
        !sample.window.contains(sample.cursor) && !self.is_at_edge(sample)
    }

    /// Arms the leave-timer unless one is already pending.
    pub fn arm_leave(&mut self, now: Instant) {
        if !self.leave.is_armed() {
            self.leave.arm(now, self.params.leave_delay);
        }
    }

    pub fn cancel_leave(&mut self) {
        self.leave.cancel();
    }

    /// Returns `true` once when the leave-timer expires.
    pub fn leave_fired(&mut self, now: Instant) -> bool {
        self.leave.fire(now)
    }

    /// Earliest of the next sample and the pending leave-timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        let next_poll = self.last_poll.map(|t| t + self.params.interval);
        [next_poll, self.leave.deadline()].into_iter().flatten().min()
    }

    /// Forgets the sampling history and any pending leave-timer.
    pub fn reset(&mut self) {
        self.last_poll = None;
        self.leave.cancel();
    }

    fn is_at_edge(&self, sample: &PollSample) -> bool {
        cursor_at_edge(
            sample.cursor,
            sample.work_area,
            self.params.cursor_edge_threshold,
        )
        .is_some()
    }
}
