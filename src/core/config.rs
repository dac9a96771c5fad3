use super::error::ConfigError;
use glam::Vec2;

/// What happens once a forward transition into a target finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnComplete {
    None,
    OpenGallery,
    RevealText,
}

/// One trigger zone: the control that starts the transition, the panel it
/// reveals, and where the sphere ends up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerTarget {
    pub id: &'static str,
    pub content_panel_id: &'static str,
    pub destination: Vec2,
    pub end_scale: f32,
    pub on_complete: OnComplete,
}

pub const CANVAS_ID: &str = "app-canvas";
pub const ABOUT_ME_ID: &str = "about-me-text";
pub const GALLERY_CONTAINER_ID: &str = "gallery-container";
pub const GALLERY_WRAP_ID: &str = "gallery-wrap";
pub const BACK_BUTTON_SELECTOR: &str = ".back-button";

pub const TRIGGER_TARGETS: [TriggerTarget; 4] = [
    TriggerTarget {
        id: "btn-top-left",
        content_panel_id: "animated-text-top-left",
        destination: Vec2::new(7.0, -4.5),
        end_scale: 5.5,
        on_complete: OnComplete::OpenGallery,
    },
    TriggerTarget {
        id: "btn-top-right",
        content_panel_id: "animated-text-top-right",
        destination: Vec2::new(-7.0, -4.5),
        end_scale: 5.5,
        on_complete: OnComplete::RevealText,
    },
    TriggerTarget {
        id: "btn-bottom-left",
        content_panel_id: "animated-text-bottom-left",
        destination: Vec2::new(7.0, 4.5),
        end_scale: 5.5,
        on_complete: OnComplete::None,
    },
    TriggerTarget {
        id: "btn-bottom-right",
        content_panel_id: "animated-text-bottom-right",
        destination: Vec2::new(-7.0, 4.5),
        end_scale: 5.5,
        on_complete: OnComplete::None,
    },
];

pub const IMAGE_PATHS: [&str; 17] = [
    "./assets/PortfolioImages/portfolio_im1.jpg",
    "./assets/PortfolioImages/portfolio_im2.jpg",
    "./assets/PortfolioImages/portfolio_im3.jpg",
    "./assets/PortfolioImages/portfolio_im4.jpg",
    "./assets/PortfolioImages/portfolio_im5.jpeg",
    "./assets/PortfolioImages/portfolio_im6.jpeg",
    "./assets/PortfolioImages/portfolio_im7.jpeg",
    "./assets/PortfolioImages/portfolio_im8_1.jpg",
    "./assets/PortfolioImages/portfolio_im8.png",
    "./assets/PortfolioImages/portfolio_im9.png",
    "./assets/PortfolioImages/portfolio_im10.png",
    "./assets/PortfolioImages/portfolio_im11.png",
    "./assets/PortfolioImages/portfolio_im12.png",
    "./assets/PortfolioImages/portfolio_im13.png",
    "./assets/PortfolioImages/portfolio_im14.png",
    "./assets/PortfolioImages/portfolio_im15.png",
    "./assets/PortfolioImages/portfolio_im16.png",
];

/// Every element id the page must provide before anything is wired.
pub fn required_element_ids() -> Vec<&'static str> {
    let mut ids = vec![CANVAS_ID];
    for t in &TRIGGER_TARGETS {
        ids.push(t.id);
        ids.push(t.content_panel_id);
    }
    ids.extend_from_slice(&[ABOUT_ME_ID, GALLERY_CONTAINER_ID, GALLERY_WRAP_ID]);
    ids
}

/// Checks all `ids` at once so a broken page reports every missing element.
pub fn check_required<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    exists: impl Fn(&str) -> bool,
) -> Result<(), ConfigError> {
    let missing: Vec<String> = ids
        .into_iter()
        .filter(|id| !exists(*id))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingElements(missing))
    }
}
