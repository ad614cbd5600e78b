//! Union geometry of all connected displays.
//!
//! Displays can be hot-plugged at any time, so the combined box is
//! recomputed from the live display list on every query.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// The bounding box spanning every connected display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

/// Folds display bounds into their union bounding box.
///
/// Returns `None` for an empty list. A display with a zero or negative
/// size contributes only its origin, so degenerate geometry never
/// produces an inverted box.
pub fn combined_bounds(displays: &[Rect]) -> Option<CombinedBounds> {
    let first = displays.first()?;
    let init = extent(first);

    let (left, top, right, bottom) = displays[1..].iter().map(extent).fold(
        init,
        |(l, t, r, b), (dl, dt, dr, db)| (l.min(dl), t.min(dt), r.max(dr), b.max(db)),
    );

    Some(CombinedBounds {
        left,
        top,
        right,
        bottom,
        width: right - left,
        height: bottom - top,
    })
}

/// Left, top, right, bottom of a display, with negative sizes clamped.
fn extent(r: &Rect) -> (i32, i32, i32, i32) {
    let right = r.x.saturating_add(r.width.max(0));
    let bottom = r.y.saturating_add(r.height.max(0));
    (r.x, r.y, right, bottom)
}
