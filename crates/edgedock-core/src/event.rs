/// A platform-agnostic event on the managed window.
///
/// Platform crates translate raw OS events into these variants and
/// feed them to [`DockController::handle_event`](crate::DockController::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window received keyboard focus.
    Focused,

    /// The window lost keyboard focus.
    Blurred,

    /// The window moved (fires repeatedly while dragging).
    Moved,

    /// The window was closed or destroyed.
    Closed,
}
