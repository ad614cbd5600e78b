//! Edge classification for docked windows.
//!
//! A window is classified against the combined display bounds by an
//! ordered rule table. The table order is the tie-break contract:
//! out-of-bounds rules come before near-edge rules, and within each
//! group the x axis (left, right) is tested before the y axis
//! (top, bottom). The first matching rule wins.

use serde::{Deserialize, Serialize};

use crate::display::CombinedBounds;
use crate::{Point, Rect};

/// The screen edge a window is docked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EdgeDirection {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl EdgeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a window's bounds.
///
/// Computed fresh on every query and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionStatus {
    pub is_near_edge: bool,
    pub is_out_of_bounds: bool,
    pub direction: Option<EdgeDirection>,
    /// Where the window parks when hidden against `direction`. Equal
    /// to the classified bounds when the window is free-floating.
    pub hidden_bounds: Rect,
}

impl PositionStatus {
    /// Whether the window touches or crosses an edge.
    pub fn is_docked(&self) -> bool {
        self.is_near_edge || self.is_out_of_bounds
    }
}

/// Tunable distances for edge classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeParams {
    /// Distance in pixels within which a window counts as near an edge.
    pub near_edge_threshold: i32,
    /// Pixels of a hidden window left on screen as a pull-tab.
    pub pull_tab: i32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            near_edge_threshold: 10,
            pull_tab: 5,
        }
    }
}

/// Inputs every classification rule sees.
struct Placement<'a> {
    window: Rect,
    bounds: &'a CombinedBounds,
    status_bar_height: i32,
    threshold: i32,
}

impl Placement<'_> {
    /// Usable bottom edge, above the status bar.
    fn floor(&self) -> i32 {
        self.bounds.bottom - self.status_bar_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    OutOfBounds,
    NearEdge,
}

struct Rule {
    kind: RuleKind,
    direction: EdgeDirection,
    matches: fn(&Placement<'_>) -> bool,
}

/// Classification rules, evaluated top to bottom.
const RULES: [Rule; 8] = [
    Rule {
        kind: RuleKind::OutOfBounds,
        direction: EdgeDirection::Left,
        matches: out_left,
    },
    Rule {
        kind: RuleKind::OutOfBounds,
        direction: EdgeDirection::Right,
        matches: out_right,
    },
    Rule {
        kind: RuleKind::OutOfBounds,
        direction: EdgeDirection::Top,
        matches: out_top,
    },
    Rule {
        kind: RuleKind::OutOfBounds,
        direction: EdgeDirection::Bottom,
        matches: out_bottom,
    },
    Rule {
        kind: RuleKind::NearEdge,
        direction: EdgeDirection::Left,
        matches: near_left,
    },
    Rule {
        kind: RuleKind::NearEdge,
        direction: EdgeDirection::Right,
        matches: near_right,
    },
    Rule {
        kind: RuleKind::NearEdge,
        direction: EdgeDirection::Top,
        matches: near_top,
    },
    Rule {
        kind: RuleKind::NearEdge,
        direction: EdgeDirection::Bottom,
        matches: near_bottom,
    },
];

fn out_left(p: &Placement<'_>) -> bool {
    p.window.x < p.bounds.left
}

fn out_right(p: &Placement<'_>) -> bool {
    p.window.right() > p.bounds.right
}

fn out_top(p: &Placement<'_>) -> bool {
    p.window.y < p.bounds.top
}

fn out_bottom(p: &Placement<'_>) -> bool {
    p.window.bottom() > p.floor()
}

fn near_left(p: &Placement<'_>) -> bool {
    p.window.x <= p.bounds.left + p.threshold
}

fn near_right(p: &Placement<'_>) -> bool {
    p.window.right() >= p.bounds.right - p.threshold
}

fn near_top(p: &Placement<'_>) -> bool {
    p.window.y <= p.bounds.top + p.threshold
}

fn near_bottom(p: &Placement<'_>) -> bool {
    p.window.bottom() >= p.floor() - p.threshold
}

/// Classifies `window` against the combined display bounds.
pub fn classify(
    window: Rect,
    bounds: &CombinedBounds,
    status_bar_height: i32,
    params: &EdgeParams,
) -> PositionStatus {
    let placement = Placement {
        window,
        bounds,
        status_bar_height,
        threshold: params.near_edge_threshold,
    };

    match RULES.iter().find(|rule| (rule.matches)(&placement)) {
        Some(rule) => PositionStatus {
            is_near_edge: rule.kind == RuleKind::NearEdge,
            is_out_of_bounds: rule.kind == RuleKind::OutOfBounds,
            direction: Some(rule.direction),
            hidden_bounds: window.with_origin(hidden_position(
                window,
                rule.direction,
                bounds,
                status_bar_height,
                params.pull_tab,
            )),
        },
        None => PositionStatus {
            is_near_edge: false,
            is_out_of_bounds: false,
            direction: None,
            hidden_bounds: window,
        },
    }
}

/// Parked origin for a window hidden against `direction`.
///
/// The window sits just past the edge with `pull_tab` pixels still on
/// screen. The coordinate along the edge is left unchanged.
pub fn hidden_position(
    window: Rect,
    direction: EdgeDirection,
    bounds: &CombinedBounds,
    status_bar_height: i32,
    pull_tab: i32,
) -> Point {
    match direction {
        EdgeDirection::Left => Point::new(bounds.left - window.width + pull_tab, window.y),
        EdgeDirection::Right => Point::new(bounds.right - pull_tab, window.y),
        EdgeDirection::Top => Point::new(window.x, bounds.top - window.height + pull_tab),
        EdgeDirection::Bottom => {
            Point::new(window.x, bounds.bottom - status_bar_height - pull_tab)
        }
    }
}

/// Fully visible origin, flush against `direction`.
pub fn shown_position(
    window: Rect,
    direction: EdgeDirection,
    bounds: &CombinedBounds,
    status_bar_height: i32,
) -> Point {
    match direction {
        EdgeDirection::Left => Point::new(bounds.left, window.y),
        EdgeDirection::Right => Point::new(bounds.right - window.width, window.y),
        EdgeDirection::Top => Point::new(window.x, bounds.top),
        EdgeDirection::Bottom => Point::new(
            window.x,
            bounds.bottom - status_bar_height - window.height,
        ),
    }
}

/// Returns the work-area edge the cursor is pressed against, if any.
///
/// Edges are tested left, right, top, bottom; a cursor in a corner
/// reports the horizontal edge.
pub fn cursor_at_edge(cursor: Point, work_area: Rect, threshold: i32) -> Option<EdgeDirection> {
    if cursor.x <= work_area.x + threshold {
        Some(EdgeDirection::Left)
    } else if cursor.x >= work_area.right() - threshold {
        Some(EdgeDirection::Right)
    } else if cursor.y <= work_area.y + threshold {
        Some(EdgeDirection::Top)
    } else if cursor.y >= work_area.bottom() - threshold {
        Some(EdgeDirection::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "edge_tests.rs"]
mod tests;
