// Host-side tests for pure input functions.
mod common;

use common::input::*;
use glam::Vec2;

#[test]
fn pointer_ndc_maps_corners_and_center() {
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn pointer_ndc_zero_sized_viewport_is_origin() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, -1.0), Vec2::ZERO);
}

#[test]
fn wheel_notches_normalizes_delta_modes() {
    assert!(common::approx(wheel_notches(100.0, 0), 1.0));
    assert!(common::approx(wheel_notches(-3.0, 1), -0.48));
    assert!(common::approx(wheel_notches(1.0, 2), 4.0));
}

#[test]
fn drag_tracks_only_the_capturing_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(DragMode::Rotate, 1, Vec2::new(10.0, 10.0));
    assert_eq!(drag.advance(2, Vec2::new(50.0, 50.0)), None);
    assert_eq!(drag.advance(1, Vec2::new(15.0, 7.0)), Some(Vec2::new(5.0, -3.0)));
    assert_eq!(drag.advance(1, Vec2::new(15.0, 8.0)), Some(Vec2::new(0.0, 1.0)));

    drag.end(2);
    assert!(drag.active);
    drag.end(1);
    assert!(!drag.active);
    assert_eq!(drag.advance(1, Vec2::new(20.0, 20.0)), None);
}

#[test]
fn drag_mode_follows_mouse_button() {
    assert_eq!(DragMode::from_button(0), Some(DragMode::Rotate));
    assert_eq!(DragMode::from_button(2), Some(DragMode::Pan));
    assert_eq!(DragMode::from_button(1), None);

    let mut drag = DragState::default();
    drag.begin(DragMode::Pan, 4, Vec2::ZERO);
    assert_eq!(drag.mode, DragMode::Pan);
    drag.begin(DragMode::Rotate, 5, Vec2::ZERO);
    assert_eq!(drag.mode, DragMode::Rotate);
}
