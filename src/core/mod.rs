pub mod camera;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod motion;
pub mod particles;
pub mod scene;
pub mod state;
pub mod style;
pub mod transition;

pub use camera::*;
pub use config::*;
pub use error::ConfigError;
pub use state::*;
pub use transition::TransitionEvent;

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");
pub static GLOW_WGSL: &str = include_str!("../../shaders/glow.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
