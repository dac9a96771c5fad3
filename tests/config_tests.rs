mod common;

use common::core::config::*;
use common::core::error::ConfigError;
use std::collections::HashSet;

#[test]
fn required_ids_cover_every_control_and_panel() {
    let ids = required_element_ids();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(ids.len(), 1 + 2 * TRIGGER_TARGETS.len() + 3);
    for t in &TRIGGER_TARGETS {
        assert!(ids.contains(&t.id));
        assert!(ids.contains(&t.content_panel_id));
    }
    for id in [CANVAS_ID, ABOUT_ME_ID, GALLERY_CONTAINER_ID, GALLERY_WRAP_ID] {
        assert!(ids.contains(&id));
    }
}

#[test]
fn check_required_reports_every_missing_id() {
    let ids = required_element_ids();
    let absent = ["btn-top-right", "gallery-wrap"];
    let err = check_required(ids.iter().copied(), |id| !absent.contains(&id))
        .expect_err("two ids are missing");
    assert_eq!(
        err,
        ConfigError::MissingElements(vec!["btn-top-right".into(), "gallery-wrap".into()])
    );
    assert_eq!(
        err.to_string(),
        "missing required page elements: btn-top-right, gallery-wrap"
    );

    assert!(check_required(ids.iter().copied(), |_| true).is_ok());
}

#[test]
fn targets_mirror_across_the_sphere() {
    let [tl, tr, bl, br] = TRIGGER_TARGETS;
    assert_eq!(tl.destination.x, -tr.destination.x);
    assert_eq!(bl.destination.x, -br.destination.x);
    assert_eq!(tl.destination.y, -bl.destination.y);
    assert!(TRIGGER_TARGETS.iter().all(|t| t.end_scale == 5.5));
    assert_eq!(tl.on_complete, OnComplete::OpenGallery);
    assert_eq!(tr.on_complete, OnComplete::RevealText);
}

#[test]
fn image_paths_are_unique_portfolio_images() {
    let unique: HashSet<_> = IMAGE_PATHS.iter().collect();
    assert_eq!(unique.len(), 17);
    assert!(IMAGE_PATHS
        .iter()
        .all(|p| p.starts_with("./assets/PortfolioImages/portfolio_im")));
}
