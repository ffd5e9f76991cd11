//! Player body: marker + spawn
//!
//! Создаётся один раз при старте сцены в spawn pose из LocomotionConfig,
//! живёт вместе со сценой.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::LocomotionConfig;

/// Marker component для player-controlled rigid body
///
/// В сцене ровно один. LocomotionController находит body через `With<Player>`,
/// focus probe исключает его коллайдер из aim ray.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Spawn helper для player body
///
/// Создает entity с полным набором компонентов:
/// - Transform (spawn pose)
/// - Player marker
/// - Rapier: dynamic RigidBody + capsule Collider, rotation locked, CCD
/// - Velocity (controller пишет сюда) + ReadMassProperties (для impulse → Δv)
pub fn spawn_player_body(commands: &mut Commands, config: &LocomotionConfig) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Transform::from_translation(config.spawn_position()),
            Player,
            // Rapier physics
            RigidBody::Dynamic,
            Collider::capsule_y(config.capsule_half_height, config.capsule_radius),
            LockedAxes::ROTATION_LOCKED,
            Ccd::enabled(),
            // Торможение делаем сами (idle damping), solver не должен мешать
            Damping {
                linear_damping: 0.0,
                angular_damping: 1.0,
            },
            Velocity::zero(),
            ReadMassProperties::default(),
        ))
        .id()
}
