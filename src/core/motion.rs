use super::constants::{
    BASE_SPIN, PARALLAX_FOLLOW, PARALLAX_INTENSITY, PARTICLE_POINTER_DRIFT, POINTER_DAMPING,
    POINTER_SETTLE_EPSILON, POINTER_SPIN,
};
use glam::Vec2;

/// Raw and smoothed pointer position in normalized device coordinates.
///
/// `raw` is written by pointer events; `smoothed` is advanced once per idle
/// frame by [`PointerState::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub moving: bool,
}

impl PointerState {
    pub fn set_target(&mut self, ndc: Vec2) {
        self.raw = ndc;
        self.moving = true;
    }

    /// Exponential approach toward the raw target while moving, toward the
    /// origin once settled.
    pub fn step(&mut self) {
        if self.moving {
            self.smoothed += (self.raw - self.smoothed) * POINTER_DAMPING;
            let diff = (self.raw - self.smoothed).abs();
            if diff.x < POINTER_SETTLE_EPSILON && diff.y < POINTER_SETTLE_EPSILON {
                self.moving = false;
            }
        } else {
            self.smoothed += (Vec2::ZERO - self.smoothed) * POINTER_DAMPING;
        }
    }

    /// Per-frame sphere spin (subtracted from the y rotation).
    #[inline]
    pub fn spin_speed(&self) -> f32 {
        BASE_SPIN + self.smoothed.x * POINTER_SPIN
    }

    /// Extra theta applied to every particle this frame.
    #[inline]
    pub fn particle_drift(&self) -> f32 {
        self.smoothed.x * PARTICLE_POINTER_DRIFT
    }

    /// Camera x/y offset to add this frame so the camera trails the pointer.
    #[inline]
    pub fn parallax_step(&self, camera_xy: Vec2) -> Vec2 {
        (self.smoothed * PARALLAX_INTENSITY - camera_xy) * PARALLAX_FOLLOW
    }
}
