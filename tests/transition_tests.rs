mod common;

use common::core::config::{
    OnComplete, ABOUT_ME_ID, GALLERY_CONTAINER_ID, TRIGGER_TARGETS,
};
use common::core::scene::Transform;
use common::core::style::{last_value, Display, StyleValue};
use common::core::transition::*;
use glam::Vec3;

fn machine() -> TransitionMachine {
    TransitionMachine::new(TRIGGER_TARGETS.to_vec())
}

fn opacity(styles: &[common::core::style::StyleCommand], id: &str) -> Option<f32> {
    match last_value(styles, id, "opacity") {
        Some(StyleValue::Opacity(v)) => Some(v),
        _ => None,
    }
}

#[test]
fn activation_hides_every_panel_but_the_target() {
    let mut m = machine();
    let styles = m.activate(1, 0.0).expect("activation from menu");
    assert_eq!(m.phase(), Phase::TransitioningIn { target: 1, started_ms: 0.0 });
    for (i, t) in TRIGGER_TARGETS.iter().enumerate() {
        let expected = if i == 1 { Display::Flex } else { Display::None };
        assert_eq!(
            last_value(&styles, t.content_panel_id, "display"),
            Some(StyleValue::Display(expected))
        );
        assert_eq!(
            last_value(&styles, t.id, "pointer-events"),
            Some(StyleValue::PointerEvents(false))
        );
    }
    assert_eq!(opacity(&styles, ABOUT_ME_ID), Some(0.0));
    assert_eq!(
        last_value(&styles, GALLERY_CONTAINER_ID, "display"),
        Some(StyleValue::Display(Display::None))
    );
}

#[test]
fn forward_transition_follows_eased_progress() {
    let mut m = machine();
    m.activate(0, 1000.0);

    let f = m.tick(1000.0).expect("running");
    assert_eq!((f.progress, f.eased, f.scale), (0.0, 0.0, 1.0));
    assert_eq!(f.body_position, Vec3::ZERO);
    assert_eq!(f.glow_position, Vec3::ZERO);
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[0].id), Some(1.0));

    let f = m.tick(2000.0).expect("running");
    assert_eq!((f.progress, f.eased), (0.5, 0.5));
    assert!(common::approx(f.scale, 3.25));
    assert!(common::approx_vec3(f.body_position, Vec3::new(3.5, -2.25, 0.0)));
    assert!(common::approx_vec3(f.glow_position, Vec3::new(1.75, -2.25, 0.0)));
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[0].content_panel_id), Some(0.5));
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[2].content_panel_id), Some(0.5));
    // triggers snap out once progress passes the cutoff
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[3].id), Some(0.0));
    assert!(f.event.is_none());
}

#[test]
fn triggers_fade_with_ease_before_cutoff() {
    let mut m = machine();
    m.activate(2, 0.0);
    let f = m.tick(100.0).expect("running");
    let expected = 1.0 - f.eased;
    assert!(common::approx(opacity(&f.styles, TRIGGER_TARGETS[0].id).unwrap_or(-1.0), expected));
}

#[test]
fn completion_fires_exactly_once() {
    let mut m = machine();
    m.activate(0, 0.0);
    let f = m.tick(2500.0).expect("running");
    assert_eq!(f.progress, 1.0);
    assert_eq!(f.scale, 5.5);
    assert!(common::approx_vec3(f.body_position, Vec3::new(7.0, -4.5, 0.0)));
    assert!(common::approx_vec3(f.glow_position, Vec3::new(3.5, -4.5, 0.0)));
    assert_eq!(
        f.event,
        Some(TransitionEvent::EnteredPanel {
            target: 0,
            on_complete: OnComplete::OpenGallery
        })
    );
    assert_eq!(
        last_value(&f.styles, GALLERY_CONTAINER_ID, "display"),
        Some(StyleValue::Display(Display::Block))
    );
    assert_eq!(m.phase(), Phase::Panel { target: 0 });
    assert!(m.tick(2600.0).is_none());
    assert!(m.tick(9000.0).is_none());
}

#[test]
fn reveal_text_target_shows_about_me() {
    let mut m = machine();
    m.activate(1, 0.0);
    let f = m.tick(2000.0).expect("running");
    assert_eq!(opacity(&f.styles, ABOUT_ME_ID), Some(1.0));
    assert_eq!(
        last_value(&f.styles, ABOUT_ME_ID, "pointer-events"),
        Some(StyleValue::PointerEvents(true))
    );
    assert_eq!(last_value(&f.styles, GALLERY_CONTAINER_ID, "display"), None);
}

#[test]
fn activation_is_ignored_unless_in_menu() {
    let mut m = machine();
    assert!(m.activate(0, 0.0).is_some());
    assert!(m.activate(1, 500.0).is_none());
    assert_eq!(m.started_at(), Some(0.0));
    assert_eq!(m.active_target(), Some(0));

    m.tick(2000.0);
    assert!(m.activate(2, 2100.0).is_none());
    assert_eq!(m.phase(), Phase::Panel { target: 0 });

    let mut fresh = machine();
    assert!(fresh.activate(9, 0.0).is_none());
    assert_eq!(fresh.phase(), Phase::Menu);
}

#[test]
fn return_only_from_shown_panel() {
    let mut m = machine();
    assert!(m.return_to_menu(0.0, Transform::default()).is_none());
    m.activate(3, 0.0);
    assert!(m.return_to_menu(100.0, Transform::default()).is_none());
    assert!(m.is_running());
}

#[test]
fn reverse_interpolates_from_captured_transform() {
    let mut m = machine();
    m.activate(0, 0.0);
    m.tick(2000.0);
    let start = Transform {
        position: Vec3::new(7.0, -4.5, 0.0),
        scale: 5.5,
        rotation_y: 0.3,
    };
    let styles = m.return_to_menu(3000.0, start).expect("return from panel");
    for t in &TRIGGER_TARGETS {
        assert_eq!(
            last_value(&styles, t.content_panel_id, "pointer-events"),
            Some(StyleValue::PointerEvents(false))
        );
    }
    assert_eq!(m.active_target(), None);

    let f = m.tick(4000.0).expect("running");
    assert!(common::approx(f.scale, 3.25));
    assert!(common::approx_vec3(f.body_position, Vec3::new(3.5, -2.25, 0.0)));
    assert!(common::approx_vec3(f.glow_position, Vec3::new(1.75, -2.25, 0.0)));
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[0].content_panel_id), Some(0.5));
    assert_eq!(opacity(&f.styles, TRIGGER_TARGETS[0].id), Some(0.0));

    let f = m.tick(5000.0).expect("running");
    assert_eq!(f.event, Some(TransitionEvent::ReturnedToMenu));
    assert_eq!(f.scale, 1.0);
    assert!(common::approx_vec3(f.body_position, Vec3::ZERO));
    for t in &TRIGGER_TARGETS {
        assert_eq!(opacity(&f.styles, t.id), Some(1.0));
        assert_eq!(
            last_value(&f.styles, t.id, "pointer-events"),
            Some(StyleValue::PointerEvents(true))
        );
        assert_eq!(
            last_value(&f.styles, t.content_panel_id, "display"),
            Some(StyleValue::Display(Display::None))
        );
    }
    assert_eq!(m.phase(), Phase::Menu);
    assert!(m.activate(1, 5100.0).is_some());
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let mut m = TransitionMachine::with_duration(TRIGGER_TARGETS.to_vec(), 0.0);
    m.activate(2, 10.0);
    let f = m.tick(10.0).expect("running");
    assert_eq!(f.progress, 1.0);
    assert!(matches!(
        f.event,
        Some(TransitionEvent::EnteredPanel {
            target: 2,
            on_complete: OnComplete::None
        })
    ));
}
