// Material, lighting and sprite constants used by the WebGPU renderer.

// Translucent sphere material
pub const SPHERE_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // #111111
pub const SPHERE_ROUGHNESS: f32 = 0.4;
pub const SPHERE_METALNESS: f32 = 0.7;
pub const SPHERE_OPACITY: f32 = 0.2;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [0.533, 0.533, 0.533]; // #888888
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const POINT_LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Glow shell
pub const GLOW_C: f32 = 0.7; // falloff base
pub const GLOW_P: f32 = 5.0; // falloff exponent
pub const GLOW_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const GLOW_MAX_ALPHA: f32 = 0.6;

// Particle sprites
pub const POINT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const POINT_SIZE: f32 = 0.07;
pub const POINT_OPACITY: f32 = 0.9;
pub const POINT_ALPHA_TEST: f32 = 0.05;

pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
