//! Locomotion module
//!
//! First-person контроллер: input flags → impulse → clamp → Rapier velocity.
//!
//! - `math` - чистые функции (direction, speed, clamp, damping, ground)
//! - `controller` - LocomotionController + PlayerPhysics seam
//! - `rapier_body` - Rapier адаптер и ECS системы

use bevy::prelude::*;

pub mod controller;
pub mod math;
pub mod rapier_body;


pub use controller::{BodyState, LocomotionController, LocomotionReport, PlayerPhysics};
pub use rapier_body::{drive_player_body, spawn_player, RapierPlayerBody};

use crate::ControlSet;

/// Locomotion Plugin
///
/// Startup: spawn player body.
/// Update (ControlSet::Locomotion): drive_player_body: после применения input
/// events, до focus probe (probe читает обновлённую позицию камеры).
///
/// Требует RapierPhysicsPlugin в App.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(Update, drive_player_body.in_set(ControlSet::Locomotion));
    }
}
