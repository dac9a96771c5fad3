mod common;

use common::core::constants::{BASE_SPIN, PARALLAX_INTENSITY};
use common::core::easing::*;
use common::core::motion::PointerState;
use glam::Vec2;

#[test]
fn ease_in_out_quad_shape() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!(common::approx(ease_in_out_quad(0.25), 0.125));
    assert!(common::approx(ease_in_out_quad(0.75), 0.875));
    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_in_out_quad(i as f32 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
}

#[test]
fn progress_is_clamped() {
    assert_eq!(progress(-10.0, 2000.0), 0.0);
    assert_eq!(progress(1000.0, 2000.0), 0.5);
    assert_eq!(progress(5000.0, 2000.0), 1.0);
    assert_eq!(progress(0.0, 0.0), 1.0);
    assert_eq!(lerp(1.0, 5.5, 0.5), 3.25);
}

#[test]
fn smoothed_pointer_converges_and_settles() {
    let mut ps = PointerState::default();
    ps.set_target(Vec2::new(1.0, 0.0));
    let mut settled_at = None;
    for step in 1..=100 {
        ps.step();
        if !ps.moving {
            settled_at = Some(step);
            break;
        }
    }
    let n = settled_at.expect("pointer never settled");
    assert!((60..=70).contains(&n), "settled after {} steps", n);
    assert!((ps.smoothed.x - 1.0).abs() < 0.001);
}

#[test]
fn settled_pointer_relaxes_toward_origin() {
    let mut ps = PointerState {
        raw: Vec2::new(0.5, 0.5),
        smoothed: Vec2::new(0.5, 0.5),
        moving: false,
    };
    for _ in 0..200 {
        ps.step();
    }
    assert!(ps.smoothed.length() < 1e-3);
}

#[test]
fn spin_and_parallax_follow_pointer() {
    let mut ps = PointerState::default();
    assert_eq!(ps.spin_speed(), BASE_SPIN);
    assert_eq!(ps.particle_drift(), 0.0);

    ps.smoothed = Vec2::new(1.0, -1.0);
    assert!(ps.spin_speed() > BASE_SPIN);
    assert!(ps.particle_drift() > 0.0);

    let mut cam = Vec2::ZERO;
    for _ in 0..500 {
        cam += ps.parallax_step(cam);
    }
    let goal = ps.smoothed * PARALLAX_INTENSITY;
    assert!((cam - goal).length() < 1e-3);
}
