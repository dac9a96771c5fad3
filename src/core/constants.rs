/// Animation and scene tuning constants.
///
/// These constants express intended behavior (damping factors, durations,
/// offsets) and keep magic numbers out of the frame update.
// Sphere and glow shell
pub const SPHERE_RADIUS: f32 = 4.5;
pub const GLOW_RADIUS: f32 = SPHERE_RADIUS * 3.0;
pub const SPHERE_SEGMENTS: u32 = 64;

// Particle cloud source grid (denser than the rendered sphere)
pub const PARTICLE_SOURCE_SEGMENTS: u32 = 128;
pub const PARTICLE_FRACTION: f64 = 0.1;
pub const PARTICLE_MAX_ANGULAR_SPEED: f32 = 0.00075; // radians per frame, per axis
pub const PARTICLE_POINTER_DRIFT: f32 = 0.002; // extra theta per frame at full pointer x

// Pointer smoothing
pub const POINTER_DAMPING: f32 = 0.1; // fraction of remaining distance per frame
pub const POINTER_SETTLE_EPSILON: f32 = 0.001;

// Idle spin and parallax
pub const BASE_SPIN: f32 = 0.0015;
pub const POINTER_SPIN: f32 = 0.008;
pub const PARALLAX_INTENSITY: f32 = 0.5;
pub const PARALLAX_FOLLOW: f32 = 0.05;

// Transitions
pub const TRANSITION_DURATION_MS: f64 = 2000.0;
pub const TRIGGER_FADE_CUTOFF: f32 = 0.2; // forward progress after which triggers are hidden
// Scaled by eased progress in both directions, never applied as a step.
pub const GLOW_SIDE_OFFSET: f32 = -3.5; // glow x offset while a panel is shown

// Camera and orbit controls
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 10.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly factor per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLE_EPSILON: f32 = 1e-6;
