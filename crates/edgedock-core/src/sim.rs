//! In-memory window and desktop.
//!
//! Used by the unit tests and by `edgedock debug simulate` to drive
//! the dock controller without an OS window behind it.

use crate::{Desktop, DockWindow, Point, Rect};

/// A window that records every move applied to it.
#[derive(Debug, Clone)]
pub struct SimWindow {
    bounds: Rect,
    visible: bool,
    destroyed: bool,
    on_top: bool,
    opacity: f64,
    moves: Vec<Point>,
}

impl SimWindow {
    /// Creates a visible window at `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
            destroyed: false,
            on_top: false,
            opacity: 1.0,
            moves: Vec::new(),
        }
    }

    /// Every position passed to `set_position`, oldest first.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Simulates the user dragging the window to `origin`.
    pub fn drag_to(&mut self, origin: Point) {
        self.bounds = self.bounds.with_origin(origin);
    }

    /// Simulates the OS destroying the window.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

impl DockWindow for SimWindow {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.bounds = self.bounds.with_origin(Point::new(x, y));
        self.moves.push(Point::new(x, y));
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.on_top = on_top;
    }

    fn is_always_on_top(&self) -> bool {
        self.on_top
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

/// A desktop with a fixed display layout and a movable cursor.
#[derive(Debug, Clone)]
pub struct SimDesktop {
    cursor: Point,
    displays: Vec<Rect>,
    work_area: Rect,
}

impl SimDesktop {
    /// A desktop whose work area is `displays[0]` minus a bottom
    /// status bar of `status_bar_height` pixels.
    pub fn new(displays: Vec<Rect>, status_bar_height: i32) -> Self {
        let primary = displays.first().copied().unwrap_or_default();
        let work_area = Rect::new(
            primary.x,
            primary.y,
            primary.width,
            primary.height - status_bar_height,
        );
        Self {
            cursor: Point::new(primary.x + primary.width / 2, primary.y + primary.height / 2),
            displays,
            work_area,
        }
    }

    /// A single 1920x1080 display with a 35 px taskbar.
    pub fn full_hd() -> Self {
        Self::new(vec![Rect::new(0, 0, 1920, 1080)], 35)
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    /// Replaces the display list, as on a hot-plug.
    pub fn set_displays(&mut self, displays: Vec<Rect>) {
        self.displays = displays;
    }
}

impl Desktop for SimDesktop {
    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn displays(&self) -> Vec<Rect> {
        self.displays.clone()
    }

    fn work_area(&self) -> Rect {
        self.work_area
    }
}
