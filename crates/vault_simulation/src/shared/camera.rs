//! First-person camera pose
//!
//! Position пишет LocomotionController (body + eye offset).
//! Yaw/pitch пишет mouse-look слой клиента, кроме одноразовой начальной
//! ориентации на первом tick.

use bevy::prelude::*;

/// Pitch ограничен чуть меньше ±90° (без gimbal flip)
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Поза камеры (rotation order YXZ: сначала yaw, потом pitch, roll = 0)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    /// Поворот вокруг Y (radians), 0 = смотрим в -Z
    pub yaw: f32,
    /// Наклон вокруг X (radians), отрицательный = вниз
    pub pitch: f32,
}

impl CameraPose {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Полный forward (с pitch): направление aim probe
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Forward, спроецированный на XZ
    pub fn horizontal_forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Right = forward × up (на XZ)
    pub fn horizontal_right(&self) -> Vec3 {
        self.horizontal_forward().cross(Vec3::Y)
    }

    /// Mouse-look: добавляет дельты и клампит pitch
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }
}
