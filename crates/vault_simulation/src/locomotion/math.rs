//! Чистые функции движения: velocity + intent → новая velocity
//!
//! Без physics engine: всё тестируется напрямую.
//! Vertical component velocity здесь никогда не меняется (это работа solver'а).

use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::input::InputState;

/// Grounded если ground ray попал не дальше `max_distance` (граница включительно)
pub fn is_grounded(ground_hit: Option<f32>, max_distance: f32) -> bool {
    ground_hit.is_some_and(|distance| distance <= max_distance)
}

/// Горизонтальное направление из зажатых клавиш и horizontal basis камеры
///
/// Противоположные клавиши гасят друг друга → Vec3::ZERO.
pub fn movement_direction(input: &InputState, forward: Vec3, right: Vec3) -> Vec3 {
    let (forward_axis, right_axis) = input.axes();
    let direction = forward * forward_axis + right * right_axis;
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Скорость с учётом sprint и ground/air authority
pub fn movement_speed(config: &LocomotionConfig, sprint: bool, grounded: bool) -> f32 {
    let speed = if sprint {
        config.base_speed * config.sprint_multiplier
    } else {
        config.base_speed
    };
    let authority = if grounded { 1.0 } else { config.air_control };

    speed * authority
}

/// Impulse → Δv = impulse / mass
pub fn apply_impulse(velocity: Vec3, impulse: Vec3, mass: f32) -> Vec3 {
    if mass <= 0.0 {
        return velocity;
    }
    velocity + impulse / mass
}

/// Рескейлит горизонтальную часть до `cap`, Y не трогает
pub fn clamp_horizontal(velocity: Vec3, cap: f32) -> Vec3 {
    let horizontal = Vec2::new(velocity.x, velocity.z);
    if horizontal.length() <= cap {
        return velocity;
    }

    let clamped = horizontal.normalize_or_zero() * cap;
    Vec3::new(clamped.x, velocity.y, clamped.y)
}

/// Изотропное торможение горизонтали (factor 0.1 ≈ стоп за пару кадров)
pub fn damp_horizontal(velocity: Vec3, factor: f32) -> Vec3 {
    Vec3::new(velocity.x * factor, velocity.y, velocity.z * factor)
}

pub fn horizontal_speed(velocity: Vec3) -> f32 {
    Vec2::new(velocity.x, velocity.z).length()
}
