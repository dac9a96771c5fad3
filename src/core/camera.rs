use super::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE, ORBIT_POLE_EPSILON, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::PI;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Damped orbit controls around `camera.target`.
///
/// Input accumulates into pending spherical and pan deltas; every [`update`]
/// applies a `damping` fraction of them and keeps the rest, so motion eases
/// out after the pointer stops.
///
/// [`update`]: OrbitCamera::update
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub camera: Camera,
    pub enabled: bool,
    damping: f32,
    // (azimuth, polar)
    pending: Vec2,
    // world-space target shift
    pending_pan: Vec3,
    dolly: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl OrbitCamera {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            enabled: true,
            damping: ORBIT_DAMPING,
            pending: Vec2::ZERO,
            pending_pan: Vec3::ZERO,
            dolly: 1.0,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }

    /// Pointer drag of `delta_px` over a viewport `viewport_height` pixels tall.
    pub fn rotate(&mut self, delta_px: Vec2, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let k = 2.0 * PI * ORBIT_ROTATE_SPEED / viewport_height;
        self.pending.x -= delta_px.x * k;
        self.pending.y -= delta_px.y * k;
    }

    /// Screen-space pan: the target moves with the pointer at the target's
    /// depth, dragging the eye along.
    pub fn pan(&mut self, delta_px: Vec2, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let offset = self.camera.eye - self.camera.target;
        let target_distance = offset.length() * (self.camera.fovy_radians * 0.5).tan();
        let k = 2.0 * target_distance / viewport_height;
        let forward = -offset.normalize_or_zero();
        let right = forward.cross(self.camera.up).normalize_or_zero();
        let up = right.cross(forward);
        self.pending_pan += -right * (delta_px.x * k) + up * (delta_px.y * k);
    }

    /// Wheel input in notches: positive moves away from the target.
    pub fn zoom(&mut self, notches: f32) {
        if !self.enabled || !notches.is_finite() {
            return;
        }
        self.dolly *= ORBIT_ZOOM_STEP.powf(-notches);
    }

    /// Re-projects the eye onto the orbit, applying damped pending input.
    pub fn update(&mut self) {
        let offset = self.camera.eye - self.camera.target;
        let mut radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.pending.x * self.damping;
        phi += self.pending.y * self.damping;
        phi = phi.clamp(ORBIT_POLE_EPSILON, PI - ORBIT_POLE_EPSILON);
        radius = (radius * self.dolly).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);

        self.camera.target += self.pending_pan * self.damping;

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        self.camera.eye = self.camera.target
            + Vec3::new(
                radius * sin_phi * sin_theta,
                radius * cos_phi,
                radius * sin_phi * cos_theta,
            );

        self.pending *= 1.0 - self.damping;
        self.pending_pan *= 1.0 - self.damping;
        self.dolly = 1.0;
    }
}
