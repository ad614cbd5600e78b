use crate::{Point, Rect};

/// The managed window, as seen by the dock controller.
///
/// Each platform crate (e.g. `edgedock-windows`) provides its own
/// implementation. OS calls are treated as always succeeding: a
/// backend logs failures instead of returning them, so a failed call
/// shows up as a visual glitch rather than aborting a transition.
pub trait DockWindow {
    /// Returns the window's outer bounds.
    fn bounds(&self) -> Rect;

    /// Moves the window without resizing it.
    fn set_position(&mut self, x: i32, y: i32);

    /// Makes the window visible.
    fn show(&mut self);

    /// Hides the window without destroying it.
    fn hide(&mut self);

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;

    /// Returns whether the OS window no longer exists.
    fn is_destroyed(&self) -> bool;

    fn set_always_on_top(&mut self, on_top: bool);

    fn is_always_on_top(&self) -> bool;

    /// Sets window opacity in the range `0.0..=1.0`.
    fn set_opacity(&mut self, opacity: f64);
}

/// Desktop-wide queries: cursor and display geometry.
pub trait Desktop {
    /// Global cursor position in virtual-desktop coordinates.
    fn cursor_position(&self) -> Point;

    /// Bounds of every connected display, primary first.
    fn displays(&self) -> Vec<Rect>;

    /// Work area of the primary display (excludes the taskbar).
    fn work_area(&self) -> Rect;

    /// Height reserved at the bottom of the primary display by the
    /// taskbar or dock.
    fn status_bar_height(&self) -> i32 {
        let Some(primary) = self.displays().first().copied() else {
            return 0;
        };
        (primary.bottom() - self.work_area().bottom()).max(0)
    }
}
