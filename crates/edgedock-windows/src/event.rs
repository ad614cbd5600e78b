use edgedock_core::WindowEvent;
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_DESTROY, EVENT_OBJECT_LOCATIONCHANGE, EVENT_SYSTEM_FOREGROUND,
};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or caret.
const OBJID_WINDOW: i32 = 0;

/// Turns system-wide WinEvents into events for one managed window.
///
/// Foreground changes are reported for every window, so the filter
/// remembers whether the managed window had focus and emits `Blurred`
/// only on the transition away from it.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    target: usize,
    focused: bool,
}

impl EventFilter {
    pub fn new(target: usize, focused: bool) -> Self {
        Self { target, focused }
    }

    /// Translates one raw event. `hwnd` is the handle as an integer.
    pub fn translate(&mut self, event: u32, hwnd: usize, id_object: i32) -> Option<WindowEvent> {
        if id_object != OBJID_WINDOW {
            return None;
        }

        if event == EVENT_SYSTEM_FOREGROUND {
            let focused = hwnd == self.target;
            if focused == self.focused {
                return None;
            }
            self.focused = focused;
            return Some(if focused {
                WindowEvent::Focused
            } else {
                WindowEvent::Blurred
            });
        }

        if hwnd != self.target {
            return None;
        }

        match event {
            e if e == EVENT_OBJECT_LOCATIONCHANGE => Some(WindowEvent::Moved),
            e if e == EVENT_OBJECT_DESTROY => Some(WindowEvent::Closed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: usize = 0x1234;
    const OTHER: usize = 0x9999;

    #[test]
    fn foreground_transitions_emit_focus_and_blur_once() {
        // Arrange
        let mut filter = EventFilter::new(TARGET, false);

        // Act / Assert
        assert_eq!(
            filter.translate(EVENT_SYSTEM_FOREGROUND, TARGET, 0),
            Some(WindowEvent::Focused)
        );
        assert_eq!(filter.translate(EVENT_SYSTEM_FOREGROUND, TARGET, 0), None);
        assert_eq!(
            filter.translate(EVENT_SYSTEM_FOREGROUND, OTHER, 0),
            Some(WindowEvent::Blurred)
        );
        assert_eq!(filter.translate(EVENT_SYSTEM_FOREGROUND, OTHER + 1, 0), None);
    }

    #[test]
    fn location_and_destroy_only_for_target() {
        let mut filter = EventFilter::new(TARGET, true);

        assert_eq!(
            filter.translate(EVENT_OBJECT_LOCATIONCHANGE, TARGET, 0),
            Some(WindowEvent::Moved)
        );
        assert_eq!(filter.translate(EVENT_OBJECT_LOCATIONCHANGE, OTHER, 0), None);
        assert_eq!(
            filter.translate(EVENT_OBJECT_DESTROY, TARGET, 0),
            Some(WindowEvent::Closed)
        );
    }

    #[test]
    fn child_object_events_are_ignored() {
        // OBJID_CARET = -8
        let mut filter = EventFilter::new(TARGET, true);

        assert_eq!(filter.translate(EVENT_OBJECT_LOCATIONCHANGE, TARGET, -8), None);
    }
}
