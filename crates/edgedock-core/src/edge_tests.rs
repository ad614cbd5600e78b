use proptest::prelude::*;

use super::*;
use crate::display::combined_bounds;

fn desktop() -> CombinedBounds {
    combined_bounds(&[Rect::new(0, 0, 1920, 1080)]).unwrap()
}

fn classify_default(window: Rect, status_bar_height: i32) -> PositionStatus {
    classify(window, &desktop(), status_bar_height, &EdgeParams::default())
}

// -- out of bounds --

#[test]
fn window_dragged_past_left_edge_is_out_of_bounds() {
    // Arrange
    let window = Rect::new(-50, 100, 320, 290);

    // Act
    let status = classify_default(window, 35);

    // Assert
    assert!(status.is_out_of_bounds);
    assert!(!status.is_near_edge);
    assert_eq!(status.direction, Some(EdgeDirection::Left));
    assert_eq!(status.hidden_bounds, Rect::new(-315, 100, 320, 290));
}

#[test]
fn one_pixel_past_left_is_out_of_bounds() {
    let status = classify_default(Rect::new(-1, 400, 320, 290), 0);

    assert!(status.is_out_of_bounds);
    assert_eq!(status.direction, Some(EdgeDirection::Left));
}

#[test]
fn past_right_edge_parks_with_pull_tab_visible() {
    // Act
    let status = classify_default(Rect::new(1700, 400, 320, 290), 0);

    // Assert
    assert!(status.is_out_of_bounds);
    assert_eq!(status.direction, Some(EdgeDirection::Right));
    assert_eq!(status.hidden_bounds.x, 1915);
    assert_eq!(status.hidden_bounds.y, 400);
}

#[test]
fn window_near_coordinate_limit_classifies_past_right_edge() {
    // Act
    let status = classify_default(Rect::new(2_147_483_000, 0, 1000, 10), 0);

    // Assert
    assert!(status.is_out_of_bounds);
    assert_eq!(status.direction, Some(EdgeDirection::Right));
    assert_eq!(status.hidden_bounds.x, 1915);
}

#[test]
fn past_top_edge_parks_above_screen() {
    // Act
    let status = classify_default(Rect::new(600, -20, 320, 290), 0);

    // Assert
    assert_eq!(status.direction, Some(EdgeDirection::Top));
    assert_eq!(status.hidden_bounds.y, -285);
    assert_eq!(status.hidden_bounds.x, 600);
}

#[test]
fn bottom_edge_accounts_for_status_bar() {
    // Arrange: bottom at 1050, status bar starts at 1045
    let window = Rect::new(600, 760, 320, 290);

    // Act
    let status = classify_default(window, 35);

    // Assert
    assert!(status.is_out_of_bounds);
    assert_eq!(status.direction, Some(EdgeDirection::Bottom));
    assert_eq!(status.hidden_bounds.y, 1080 - 35 - 5);
}

#[test]
fn x_axis_wins_over_y_axis_when_both_are_out() {
    let status = classify_default(Rect::new(-10, -10, 320, 290), 0);

    assert_eq!(status.direction, Some(EdgeDirection::Left));
}

#[test]
fn out_of_bounds_on_y_beats_near_edge_on_x() {
    // Arrange: near the left edge but above the top edge
    let window = Rect::new(4, -30, 320, 290);

    // Act
    let status = classify_default(window, 0);

    // Assert
    assert!(status.is_out_of_bounds);
    assert!(!status.is_near_edge);
    assert_eq!(status.direction, Some(EdgeDirection::Top));
}

// -- near edge --

#[test]
fn within_threshold_of_left_is_near_edge() {
    // Act
    let status = classify_default(Rect::new(5, 300, 320, 290), 0);

    // Assert
    assert!(status.is_near_edge);
    assert!(!status.is_out_of_bounds);
    assert_eq!(status.direction, Some(EdgeDirection::Left));
    assert_eq!(status.hidden_bounds.x, -315);
}

#[test]
fn flush_with_right_edge_is_near_edge() {
    let status = classify_default(Rect::new(1600, 300, 320, 290), 0);

    assert!(status.is_near_edge);
    assert_eq!(status.direction, Some(EdgeDirection::Right));
}

#[test]
fn exactly_at_threshold_is_still_near() {
    let status = classify_default(Rect::new(10, 300, 320, 290), 0);

    assert!(status.is_near_edge);
}

#[test]
fn custom_threshold_widens_the_band() {
    // Arrange
    let params = EdgeParams {
        near_edge_threshold: 40,
        pull_tab: 8,
    };

    // Act
    let status = classify(Rect::new(30, 300, 320, 290), &desktop(), 0, &params);

    // Assert
    assert!(status.is_near_edge);
    assert_eq!(status.hidden_bounds.x, -312);
}

// -- free floating --

#[test]
fn centered_window_is_free_floating() {
    // Arrange
    let window = Rect::new(800, 400, 320, 290);

    // Act
    let status = classify_default(window, 35);

    // Assert
    assert!(!status.is_near_edge);
    assert!(!status.is_out_of_bounds);
    assert_eq!(status.direction, None);
    assert_eq!(status.hidden_bounds, window);
}

#[test]
fn parked_window_classifies_to_its_own_position() {
    // Arrange: a window already parked at the left edge
    let parked = Rect::new(-315, 100, 320, 290);

    // Act
    let status = classify_default(parked, 35);

    // Assert
    assert_eq!(status.hidden_bounds, parked);
}

// -- shown position --

#[test]
fn shown_position_is_flush_with_each_edge() {
    let bounds = desktop();
    let w = Rect::new(-315, 100, 320, 290);

    assert_eq!(
        shown_position(w, EdgeDirection::Left, &bounds, 35),
        Point::new(0, 100)
    );
    assert_eq!(
        shown_position(w, EdgeDirection::Right, &bounds, 35),
        Point::new(1600, 100)
    );
    assert_eq!(
        shown_position(w, EdgeDirection::Top, &bounds, 35),
        Point::new(-315, 0)
    );
    assert_eq!(
        shown_position(w, EdgeDirection::Bottom, &bounds, 35),
        Point::new(-315, 1080 - 35 - 290)
    );
}

// -- cursor at edge --

#[test]
fn cursor_near_left_edge_reports_left() {
    let work_area = Rect::new(0, 0, 1920, 1080);

    assert_eq!(
        cursor_at_edge(Point::new(2, 500), work_area, 5),
        Some(EdgeDirection::Left)
    );
}

#[test]
fn cursor_at_each_edge() {
    let work_area = Rect::new(0, 0, 1920, 1080);

    assert_eq!(
        cursor_at_edge(Point::new(1918, 500), work_area, 5),
        Some(EdgeDirection::Right)
    );
    assert_eq!(
        cursor_at_edge(Point::new(900, 3), work_area, 5),
        Some(EdgeDirection::Top)
    );
    assert_eq!(
        cursor_at_edge(Point::new(900, 1077), work_area, 5),
        Some(EdgeDirection::Bottom)
    );
}

#[test]
fn cursor_in_middle_is_not_at_edge() {
    let work_area = Rect::new(0, 0, 1920, 1080);

    assert_eq!(cursor_at_edge(Point::new(900, 500), work_area, 5), None);
}

#[test]
fn cursor_in_corner_reports_horizontal_edge() {
    let work_area = Rect::new(0, 0, 1920, 1080);

    assert_eq!(
        cursor_at_edge(Point::new(1, 1), work_area, 5),
        Some(EdgeDirection::Left)
    );
}

// -- properties --

proptest! {
    #[test]
    fn interior_windows_are_free_floating(
        x in 11i32..1000,
        y in 11i32..500,
        w in 50i32..500,
        h in 50i32..400,
    ) {
        let bounds = desktop();
        prop_assume!(x + w < bounds.right - 10);
        prop_assume!(y + h < bounds.bottom - 10);

        let status = classify(Rect::new(x, y, w, h), &bounds, 0, &EdgeParams::default());

        prop_assert!(!status.is_near_edge);
        prop_assert!(!status.is_out_of_bounds);
        prop_assert_eq!(status.direction, None);
    }

    #[test]
    fn near_edge_and_out_of_bounds_are_exclusive(
        x in -2500i32..2500,
        y in -1500i32..1500,
        w in 1i32..800,
        h in 1i32..800,
        bar in 0i32..60,
    ) {
        let status = classify(Rect::new(x, y, w, h), &desktop(), bar, &EdgeParams::default());

        prop_assert!(!(status.is_near_edge && status.is_out_of_bounds));
        prop_assert_eq!(status.direction.is_some(), status.is_docked());
    }
}
