use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::transform::TransformSystem;
use vault_simulation::{CameraPose, CaptureState, ControlSet, LocomotionController, ModalGate};

/// Радиан на пиксель mouse delta
const LOOK_SENSITIVITY: f32 = 0.002;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            // Yaw до locomotion: движение идёт по свежему направлению взгляда
            .add_systems(Update, mouse_look.before(ControlSet::Locomotion))
            .add_systems(
                PostUpdate,
                sync_camera_transform.before(TransformSystem::TransformPropagate),
            );
    }
}

#[derive(Component)]
pub struct FirstPersonCamera;

fn spawn_camera(mut commands: Commands, pose: Res<CameraPose>) {
    commands.spawn((Camera3d::default(), pose.transform(), FirstPersonCamera));
}

/// Mouse look (только в Captured и без modal)
fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    controller: Res<LocomotionController>,
    gate: Res<ModalGate>,
    mut pose: ResMut<CameraPose>,
) {
    if controller.capture_state() != CaptureState::Captured || gate.is_active() {
        // Consume motion events even when not looking
        mouse_motion.clear();
        return;
    }

    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if delta != Vec2::ZERO {
        pose.look(-delta.x * LOOK_SENSITIVITY, -delta.y * LOOK_SENSITIVITY);
    }
}

/// CameraPose → Transform камеры
fn sync_camera_transform(
    pose: Res<CameraPose>,
    mut query: Query<&mut Transform, With<FirstPersonCamera>>,
) {
    if !pose.is_changed() {
        return;
    }

    for mut transform in query.iter_mut() {
        *transform = pose.transform();
    }
}
