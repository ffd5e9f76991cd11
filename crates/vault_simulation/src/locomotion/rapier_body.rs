//! Rapier адаптер для LocomotionController
//!
//! Velocity пишем напрямую в `Velocity` компонент (rapier применит на step).
//! Impulse считаем сами через ReadMassProperties: так результат виден
//! сразу в этом кадре и clamp работает по актуальной скорости.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::controller::{BodyState, LocomotionController, PlayerPhysics};
use crate::error::ControlError;
use crate::input::{PointerCommand, PointerCommandHost};
use crate::player::{spawn_player_body, Player};
use crate::shared::{CameraPose, ModalGate};

/// PlayerPhysics поверх Rapier query pipeline + Velocity компонента
pub struct RapierPlayerBody<'a> {
    entity: Entity,
    position: Vec3,
    mass: f32,
    velocity: Mut<'a, Velocity>,
    context: Option<&'a RapierContext<'a>>,
}

impl PlayerPhysics for RapierPlayerBody<'_> {
    fn body_state(&self) -> Result<BodyState, ControlError> {
        // Mass = 0 до первого physics step (Rapier ещё не посчитал свойства)
        if self.mass <= 0.0 {
            return Err(ControlError::BodyNotReady);
        }

        Ok(BodyState {
            position: self.position,
            velocity: self.velocity.linvel,
            mass: self.mass,
        })
    }

    fn cast_ground_ray(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        let context = self.context?;
        let filter = QueryFilter::exclude_dynamic().exclude_rigid_body(self.entity);

        context
            .cast_ray(origin, Vec3::NEG_Y, max_distance, true, filter)
            .map(|(_, distance)| distance)
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity.linvel = velocity;
    }
}

/// Startup: spawn player body в spawn pose
pub fn spawn_player(mut commands: Commands, controller: Res<LocomotionController>) {
    let entity = spawn_player_body(&mut commands, controller.config());
    crate::logger::log_info(&format!(
        "Player body spawned: {:?} at {}",
        entity,
        controller.config().spawn_position()
    ));
}

/// Per-frame locomotion tick
///
/// # Архитектура
/// - Читает: Transform/Velocity/ReadMassProperties player body, CameraPose, ModalGate
/// - Пишет: Velocity (горизонталь), CameraPose.position, PointerCommand (release при modal)
/// - Нет player entity → no-op
pub fn drive_player_body(
    time: Res<Time>,
    gate: Res<ModalGate>,
    mut controller: ResMut<LocomotionController>,
    mut camera: ResMut<CameraPose>,
    rapier_context: ReadRapierContext,
    mut players: Query<(Entity, &Transform, &mut Velocity, &ReadMassProperties), With<Player>>,
    mut pointer_commands: EventWriter<PointerCommand>,
) {
    // Guard: body ещё не заспавнен
    let Ok((entity, transform, velocity, mass_properties)) = players.single_mut() else {
        return;
    };

    let context = rapier_context.single().ok();
    let mut body = RapierPlayerBody {
        entity,
        position: transform.translation,
        mass: mass_properties.get().mass,
        velocity,
        context: context.as_ref(),
    };
    let mut host = PointerCommandHost::new(&mut pointer_commands);

    controller.tick(time.delta_secs(), *gate, &mut body, &mut camera, &mut host);
}
