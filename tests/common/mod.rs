// The main crate is wasm-only, so host tests include the pure-Rust modules
// directly. The nesting mirrors `src/` so `super::` paths resolve.
#![allow(dead_code)]

pub mod core {
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod easing {
        include!("../../src/core/easing.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod gallery {
        include!("../../src/core/gallery.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod motion {
        include!("../../src/core/motion.rs");
    }
    pub mod particles {
        include!("../../src/core/particles.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod state {
        include!("../../src/core/state.rs");
    }
    pub mod style {
        include!("../../src/core/style.rs");
    }
    pub mod transition {
        include!("../../src/core/transition.rs");
    }
}

pub mod input {
    include!("../../src/input.rs");
}

pub mod render_constants {
    include!("../../src/constants.rs");
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn approx_vec3(a: glam::Vec3, b: glam::Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}
