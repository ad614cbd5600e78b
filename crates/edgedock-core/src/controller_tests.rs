use std::time::{Duration, Instant};

use super::*;
use crate::sim::{SimDesktop, SimWindow};

const MS: Duration = Duration::from_millis(1);

type Dock = DockController<SimWindow, SimDesktop>;

fn dock_with(window: Rect) -> Dock {
    let mut dock = DockController::new(SimDesktop::full_hd(), DockSettings::default());
    dock.attach(SimWindow::new(window));
    dock
}

/// Ticks every animation step until the run completes.
fn finish(dock: &mut Dock, mut now: Instant) -> Instant {
    for _ in 0..100 {
        if !dock.state().is_animating {
            break;
        }
        now += 20 * MS;
        dock.tick(now);
    }
    now
}

fn win(dock: &Dock) -> &SimWindow {
    dock.window().unwrap()
}

fn win_mut(dock: &mut Dock) -> &mut SimWindow {
    dock.window.as_mut().unwrap()
}

// -- hide --

#[test]
fn hide_near_left_edge_slides_out_and_parks() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(5, 100, 320, 290));

    // Act
    dock.hide_window(t0);
    assert!(dock.state().is_animating);
    finish(&mut dock, t0);

    // Assert
    assert_eq!(win(&dock).bounds().origin(), Point::new(-315, 100));
    assert!(!win(&dock).is_visible());
    assert_eq!(win(&dock).moves().len(), 10);
    assert_eq!(
        dock.state(),
        DockState {
            is_window_hidden: true,
            is_animating: false,
            last_edge_direction: Some(EdgeDirection::Left),
        }
    );
}

#[test]
fn hide_free_floating_window_is_instant() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));

    // Act
    dock.hide_window(t0);

    // Assert
    assert!(!dock.state().is_animating);
    assert!(dock.state().is_window_hidden);
    assert!(!win(&dock).is_visible());
    assert!(win(&dock).moves().is_empty());
}

#[test]
fn second_request_during_animation_is_dropped() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);

    // Act
    dock.tick(t0 + 40 * MS);
    dock.show_window(t0 + 50 * MS);
    dock.hide_window(t0 + 60 * MS);
    finish(&mut dock, t0 + 60 * MS);

    // Assert
    assert_eq!(win(&dock).bounds().x, -315);
    assert!(!win(&dock).moves().iter().any(|p| p.x > 0));
    assert!(dock.state().is_window_hidden);
}

#[test]
fn bottom_edge_parks_above_status_bar() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(600, 760, 320, 290));

    dock.hide_window(t0);
    finish(&mut dock, t0);

    assert_eq!(win(&dock).bounds().origin(), Point::new(600, 1080 - 35 - 5));
}

// -- show --

#[test]
fn hide_then_show_restores_flush_position() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);
    let t1 = finish(&mut dock, t0);

    // Act
    dock.show_window(t1);
    finish(&mut dock, t1);

    // Assert
    assert_eq!(win(&dock).bounds().origin(), Point::new(0, 100));
    assert!(win(&dock).is_visible());
    assert!(!dock.state().is_window_hidden);
}

#[test]
fn show_free_floating_window_is_instant_and_not_on_top() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));
    dock.hide_window(t0);

    // Act
    dock.show_window(t0 + 10 * MS);

    // Assert
    assert!(win(&dock).is_visible());
    assert!(!win(&dock).is_always_on_top());
    assert!(!dock.state().is_window_hidden);
    assert!(!dock.state().is_animating);
}

#[test]
fn show_when_visible_only_shows() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));

    dock.show_window(t0);

    assert!(!dock.state().is_animating);
    assert!(win(&dock).moves().is_empty());
}

// -- hover reveal --

#[test]
fn hovering_pull_tab_reveals_on_top_then_drops_on_top() {
    // Arrange: parked at the left edge
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);
    let t1 = finish(&mut dock, t0);

    // Act: cursor on the 5 px sliver
    dock.desktop_mut().set_cursor(Point::new(2, 200));
    dock.tick(t1 + 100 * MS);

    // Assert: mid-transition
    assert!(dock.state().is_animating);
    assert!(win(&dock).is_visible());
    assert!(win(&dock).is_always_on_top());

    // Act
    finish(&mut dock, t1 + 100 * MS);

    // Assert: settled
    assert_eq!(win(&dock).bounds().origin(), Point::new(0, 100));
    assert!(!win(&dock).is_always_on_top());
    assert!(!dock.state().is_window_hidden);
}

#[test]
fn cursor_away_from_pull_tab_keeps_window_parked() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);
    let t1 = finish(&mut dock, t0);

    dock.desktop_mut().set_cursor(Point::new(2, 900));
    dock.tick(t1 + 100 * MS);

    assert!(!dock.state().is_animating);
    assert!(dock.state().is_window_hidden);
}

#[test]
fn window_hidden_from_centre_is_not_revealed_by_hover() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));
    dock.hide_window(t0);

    // Act
    dock.desktop_mut().set_cursor(Point::new(900, 500));
    dock.tick(t0 + 100 * MS);

    // Assert
    assert!(dock.state().is_window_hidden);
    assert!(!win(&dock).is_visible());
}

#[test]
fn pinned_window_stays_on_top_after_reveal() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.toggle_pin();
    dock.hide_window(t0);
    let t1 = finish(&mut dock, t0);

    // Act
    dock.show_window(t1);
    finish(&mut dock, t1);

    // Assert
    assert!(dock.is_pinned());
    assert!(win(&dock).is_always_on_top());
}

// -- leave timer --

/// Docks the window against the left edge through a settled move.
fn docked_after_move(t0: Instant) -> Dock {
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.handle_event(WindowEvent::Moved, t0);
    dock.tick(t0 + 200 * MS);
    assert_eq!(dock.state().last_edge_direction, Some(EdgeDirection::Left));
    dock
}

#[test]
fn cursor_leaving_docked_window_hides_after_delay() {
    // Arrange: cursor in the middle of the screen, leave armed at +200
    let t0 = Instant::now();
    let mut dock = docked_after_move(t0);

    // Act
    dock.tick(t0 + 650 * MS);
    assert!(!dock.state().is_animating);
    dock.tick(t0 + 700 * MS);

    // Assert
    assert!(dock.state().is_animating);
    finish(&mut dock, t0 + 700 * MS);
    assert!(dock.state().is_window_hidden);
}

#[test]
fn cursor_returning_before_delay_cancels_hide() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = docked_after_move(t0);

    // Act
    dock.desktop_mut().set_cursor(Point::new(100, 200));
    dock.tick(t0 + 400 * MS);
    dock.tick(t0 + 700 * MS);

    // Assert
    assert!(!dock.state().is_animating);
    assert!(!dock.state().is_window_hidden);
}

#[test]
fn cursor_at_screen_edge_when_timer_fires_keeps_window() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = docked_after_move(t0);

    // Act: cursor pushed to the right edge between polls
    dock.desktop_mut().set_cursor(Point::new(1919, 500));
    dock.tick(t0 + 700 * MS);

    // Assert
    assert!(!dock.state().is_animating);
    assert!(win(&dock).is_visible());
}

// -- blur / focus --

#[test]
fn blur_near_edge_hides_after_delay() {
    // Arrange: cursor inside so the leave timer stays idle
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.desktop_mut().set_cursor(Point::new(100, 200));

    // Act
    dock.handle_event(WindowEvent::Blurred, t0);
    dock.tick(t0 + 499 * MS);
    assert!(!dock.state().is_animating);
    dock.tick(t0 + 500 * MS);

    // Assert
    assert!(dock.state().is_animating);
}

#[test]
fn focus_cancels_pending_blur_hide() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.desktop_mut().set_cursor(Point::new(100, 200));
    dock.handle_event(WindowEvent::Blurred, t0);

    // Act
    dock.handle_event(WindowEvent::Focused, t0 + 100 * MS);
    dock.tick(t0 + 600 * MS);

    // Assert
    assert!(!dock.state().is_animating);
    assert!(win(&dock).is_visible());
}

#[test]
fn blur_of_free_floating_window_does_nothing() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));

    dock.handle_event(WindowEvent::Blurred, t0);
    dock.tick(t0 + 600 * MS);

    assert!(win(&dock).is_visible());
    assert!(!dock.state().is_window_hidden);
}

// -- moves --

#[test]
fn move_broadcast_waits_for_debounce() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));
    let rx = dock.subscribe();
    win_mut(&mut dock).drag_to(Point::new(5, 100));

    // Act: a second move within 200 ms restarts the debounce
    dock.handle_event(WindowEvent::Moved, t0);
    dock.handle_event(WindowEvent::Moved, t0 + 150 * MS);
    dock.tick(t0 + 200 * MS);

    // Assert
    assert!(rx.try_recv().is_err());

    dock.tick(t0 + 350 * MS);
    let status = rx.try_recv().unwrap();
    assert!(status.is_near_edge);
    assert_eq!(status.direction, Some(EdgeDirection::Left));
    assert_eq!(dock.state().last_edge_direction, Some(EdgeDirection::Left));
}

#[test]
fn window_dropped_past_edge_is_parked() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));
    let rx = dock.subscribe();
    win_mut(&mut dock).drag_to(Point::new(-50, 100));

    // Act
    dock.handle_event(WindowEvent::Moved, t0);
    dock.tick(t0 + 200 * MS);
    finish(&mut dock, t0 + 200 * MS);

    // Assert
    let status = rx.try_recv().unwrap();
    assert!(status.is_out_of_bounds);
    assert_eq!(status.hidden_bounds.origin(), Point::new(-315, 100));
    assert_eq!(win(&dock).bounds().origin(), Point::new(-315, 100));
    assert!(dock.state().is_window_hidden);
}

#[test]
fn moving_to_centre_clears_last_edge() {
    let t0 = Instant::now();
    let mut dock = docked_after_move(t0);

    win_mut(&mut dock).drag_to(Point::new(800, 400));
    dock.handle_event(WindowEvent::Moved, t0 + 250 * MS);
    dock.tick(t0 + 450 * MS);

    assert_eq!(dock.state().last_edge_direction, None);
}

#[test]
fn moves_during_animation_are_ignored() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    let rx = dock.subscribe();
    dock.hide_window(t0);

    dock.handle_event(WindowEvent::Moved, t0 + 20 * MS);
    finish(&mut dock, t0 + 20 * MS);
    dock.tick(t0 + 1000 * MS);

    assert!(rx.try_recv().is_err());
}

#[test]
fn dropped_subscribers_are_pruned() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));
    drop(dock.subscribe());
    let rx = dock.subscribe();

    dock.handle_event(WindowEvent::Moved, t0);
    dock.tick(t0 + 200 * MS);

    assert_eq!(dock.subscribers.len(), 1);
    assert!(rx.try_recv().is_ok());
}

// -- lifecycle and guards --

#[test]
fn attaching_a_window_left_parked_restores_hidden_state() {
    // Arrange: hidden against the left edge by an earlier session
    let t0 = Instant::now();
    let mut parked = SimWindow::new(Rect::new(-315, 100, 320, 290));
    parked.hide();
    let mut dock = DockController::new(SimDesktop::full_hd(), DockSettings::default());

    // Act
    dock.attach(parked);

    // Assert
    assert_eq!(
        dock.state(),
        DockState {
            is_window_hidden: true,
            is_animating: false,
            last_edge_direction: Some(EdgeDirection::Left),
        }
    );

    // Act: hover the pull-tab
    dock.desktop_mut().set_cursor(Point::new(2, 200));
    dock.tick(t0 + 100 * MS);
    finish(&mut dock, t0 + 100 * MS);

    // Assert
    assert!(win(&dock).is_visible());
    assert_eq!(win(&dock).bounds().origin(), Point::new(0, 100));
    assert!(!dock.state().is_window_hidden);
}

#[test]
fn attaching_a_hidden_free_floating_window_shows_it_on_toggle() {
    let t0 = Instant::now();
    let mut window = SimWindow::new(Rect::new(800, 400, 320, 290));
    window.hide();
    let mut dock = DockController::new(SimDesktop::full_hd(), DockSettings::default());
    dock.attach(window);

    dock.toggle(t0);

    assert!(win(&dock).is_visible());
    assert!(!dock.state().is_window_hidden);
    assert_eq!(dock.state().last_edge_direction, None);
}

#[test]
fn closed_event_detaches_and_resets() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);

    // Act
    dock.handle_event(WindowEvent::Closed, t0 + 20 * MS);

    // Assert
    assert!(dock.window().is_none());
    assert_eq!(dock.state(), DockState::default());
    assert_eq!(dock.next_deadline(), None);
}

#[test]
fn destroyed_window_makes_operations_no_ops() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    win_mut(&mut dock).destroy();

    // Act
    dock.hide_window(t0);
    dock.tick(t0 + 100 * MS);
    dock.apply(&Action::ResetPosition, t0 + 100 * MS);

    // Assert
    assert_eq!(dock.state(), DockState::default());
    assert_eq!(dock.status(), None);
    assert!(win(&dock).moves().is_empty());
}

#[test]
fn window_destroyed_mid_animation_stops_run() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.hide_window(t0);
    dock.tick(t0 + 40 * MS);

    win_mut(&mut dock).destroy();
    dock.tick(t0 + 60 * MS);

    assert!(!dock.state().is_animating);
    assert_eq!(win(&dock).moves().len(), 1);
}

#[test]
fn unattached_controller_ignores_everything() {
    let t0 = Instant::now();
    let mut dock: Dock = DockController::new(SimDesktop::full_hd(), DockSettings::default());

    dock.apply(&Action::Toggle, t0);
    dock.handle_event(WindowEvent::Moved, t0);
    dock.tick(t0 + 500 * MS);

    assert_eq!(dock.state(), DockState::default());
    assert_eq!(dock.status(), None);
    assert_eq!(dock.next_deadline(), None);
}

#[test]
fn no_displays_treats_window_as_free_floating() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.desktop_mut().set_displays(Vec::new());

    // Act
    dock.hide_window(t0);

    // Assert
    assert_eq!(dock.status().and_then(|s| s.direction), None);
    assert!(dock.state().is_window_hidden);
    assert!(!dock.state().is_animating);
}

#[test]
fn status_bar_height_setting_overrides_desktop() {
    // Arrange
    let settings = DockSettings {
        status_bar_height: Some(0),
        ..DockSettings::default()
    };
    let mut dock = DockController::new(SimDesktop::full_hd(), settings);
    dock.attach(SimWindow::new(Rect::new(600, 760, 320, 290)));

    // Act
    let status = dock.status().unwrap();

    // Assert: with the 35 px taskbar this would be out of bounds
    assert!(!status.is_docked());
}

// -- actions --

#[test]
fn toggle_hides_then_shows() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));

    dock.apply(&Action::Toggle, t0);
    let t1 = finish(&mut dock, t0);
    assert!(dock.state().is_window_hidden);

    dock.apply(&Action::Toggle, t1);
    finish(&mut dock, t1);
    assert!(!dock.state().is_window_hidden);
    assert_eq!(win(&dock).bounds().origin(), Point::new(0, 100));
}

#[test]
fn reset_position_places_window_top_right() {
    // Arrange
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(-50, 100, 320, 290));
    dock.hide_window(t0);
    let t1 = finish(&mut dock, t0);

    // Act
    dock.apply(&Action::ResetPosition, t1);

    // Assert
    assert_eq!(win(&dock).bounds().origin(), Point::new(1920 - 320 - 30, 30));
    assert!(win(&dock).is_visible());
    assert_eq!(dock.state(), DockState::default());
}

#[test]
fn opacity_is_clamped() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(800, 400, 320, 290));

    dock.apply(&Action::SetOpacity(0.0), t0);
    assert_eq!(win(&dock).opacity(), MIN_OPACITY);

    dock.apply(&Action::SetOpacity(3.0), t0);
    assert_eq!(win(&dock).opacity(), 1.0);
}

#[test]
fn attach_applies_configured_opacity_and_pin() {
    let settings = DockSettings {
        opacity: 0.8,
        pinned: true,
        ..DockSettings::default()
    };
    let mut dock = DockController::new(SimDesktop::full_hd(), settings);

    dock.attach(SimWindow::new(Rect::new(800, 400, 320, 290)));

    assert_eq!(win(&dock).opacity(), 0.8);
    assert!(win(&dock).is_always_on_top());
}

#[test]
fn next_deadline_follows_animation_steps() {
    let t0 = Instant::now();
    let mut dock = dock_with(Rect::new(0, 100, 320, 290));
    dock.desktop_mut().set_cursor(Point::new(100, 200));
    dock.tick(t0);

    dock.hide_window(t0);

    assert_eq!(dock.next_deadline(), Some(t0 + 20 * MS));
}
