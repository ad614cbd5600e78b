//! Slide animation for docking and undocking.
//!
//! The animator is a state machine advanced by [`Animator::tick`]. A
//! real timer or a test clock decides when ticks happen; the animator
//! only compares `now` against the run's start time. At most one run
//! is in flight, and a start request during a run is dropped.

use std::time::{Duration, Instant};

use crate::edge::EdgeDirection;
use crate::{DockWindow, Point};

/// Step count and total duration of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationParams {
    pub steps: u32,
    pub duration: Duration,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            steps: 10,
            duration: Duration::from_millis(200),
        }
    }
}

impl AnimationParams {
    /// Time between two consecutive steps.
    pub fn step_interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }
}

/// Reported once when a run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOutcome {
    /// `true` if the window was slid out and OS-hidden.
    pub hidden: bool,
    pub direction: EdgeDirection,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    from: Point,
    to: Point,
    direction: EdgeDirection,
    hide: bool,
    started: Instant,
    step: u32,
}

#[derive(Debug)]
pub struct Animator {
    params: AnimationParams,
    run: Option<Run>,
}

impl Animator {
    pub fn new(params: AnimationParams) -> Self {
        Self { params, run: None }
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Begins sliding from `from` to `to`.
    ///
    /// Returns `false` without side effects if a run is already in
    /// flight; requests are never queued.
    pub fn start(
        &mut self,
        from: Point,
        to: Point,
        direction: EdgeDirection,
        hide: bool,
        now: Instant,
    ) -> bool {
        if self.run.is_some() {
            tracing::debug!(%direction, hide, "animation in flight, request dropped");
            return false;
        }
        tracing::debug!(
            %direction,
            hide,
            "animating ({},{}) -> ({},{})",
            from.x,
            from.y,
            to.x,
            to.y
        );
        self.run = Some(Run {
            from,
            to,
            direction,
            hide,
            started: now,
            step: 0,
        });
        true
    }

    /// Drops the current run without touching the window.
    pub fn cancel(&mut self) {
        self.run = None;
    }

    /// When the next step is due, if a run is in flight.
    pub fn next_deadline(&self) -> Option<Instant> {
        let run = self.run.as_ref()?;
        Some(run.started + self.params.step_interval() * (run.step + 1))
    }

    /// Applies every step due at `now`.
    ///
    /// Late ticks jump straight to the step that is due. On the final
    /// step the window snaps to the exact target, is OS-hidden when
    /// sliding out, and the guard is released.
    pub fn tick<W: DockWindow + ?Sized>(
        &mut self,
        now: Instant,
        window: &mut W,
    ) -> Option<AnimationOutcome> {
        let mut run = self.run?;

        if window.is_destroyed() {
            self.run = None;
            return None;
        }

        let steps = self.params.steps.max(1);
        let due = self.due_step(run.started, now).min(steps);
        if due <= run.step {
            return None;
        }
        run.step = due;

        if due < steps {
            let p = interpolate(run.from, run.to, due, steps);
            window.set_position(p.x, p.y);
            self.run = Some(run);
            return None;
        }

        window.set_position(run.to.x, run.to.y);
        if run.hide {
            window.hide();
        }
        self.run = None;

        Some(AnimationOutcome {
            hidden: run.hide,
            direction: run.direction,
        })
    }

    fn due_step(&self, started: Instant, now: Instant) -> u32 {
        let interval = self.params.step_interval().as_nanos();
        if interval == 0 {
            return u32::MAX;
        }
        let elapsed = now.saturating_duration_since(started).as_nanos();
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }
}

/// Position at `step` of `steps` on the straight line `from -> to`.
fn interpolate(from: Point, to: Point, step: u32, steps: u32) -> Point {
    let t = f64::from(step) / f64::from(steps);
    let lerp = |a: i32, b: i32| a + (f64::from(b - a) * t).round() as i32;
    Point::new(lerp(from.x, to.x), lerp(from.y, to.y))
}
