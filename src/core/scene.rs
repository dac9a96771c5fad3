use glam::{Mat4, Quat, Vec3};

/// Position, uniform scale and yaw of one scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation_y: 0.0,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }
}

/// Transforms of the three animated objects: the translucent sphere, the
/// particle set orbiting it and the glow shell behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneTransforms {
    pub sphere: Transform,
    pub points: Transform,
    pub glow: Transform,
}
