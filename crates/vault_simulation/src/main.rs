//! Headless прогон Vault Walker
//!
//! Без окна: скриптованный input (click → W → modal) поверх реального Rapier,
//! в stdout логируются позиция игрока и focus.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use vault_simulation::logger;
use vault_simulation::{
    create_headless_app, CameraPose, CaptureChanged, FocusResolver, KeyInput, LocomotionController, ModalGate,
    PointerCommand, SceneTag, VaultConfig, VaultSimulationPlugin, ViewportClicked,
};

/// Host без окна: любой Capture выдаётся сразу, Release подтверждается
fn grant_pointer_commands(mut commands: EventReader<PointerCommand>, mut changes: EventWriter<CaptureChanged>) {
    for command in commands.read() {
        let captured = matches!(command, PointerCommand::Capture);
        changes.write(CaptureChanged { captured });
    }
}

fn spawn_demo_scene(mut commands: Commands) {
    commands.spawn((
        Name::new("Floor"),
        Transform::from_xyz(18.0, -0.2, -15.0),
        RigidBody::Fixed,
        Collider::cuboid(20.0, 0.1, 20.0),
        SceneTag::Decoration,
    ));

    // Exhibit root без коллайдера, коллайдер на дочернем mesh-узле
    commands
        .spawn((
            Name::new("Mjolnir"),
            Transform::from_xyz(14.0, 1.2, -12.5),
            SceneTag::interactable("Mjolnir"),
        ))
        .with_children(|exhibit| {
            exhibit.spawn((Transform::default(), RigidBody::Fixed, Collider::cuboid(0.3, 0.3, 0.3)));
        });
}

fn main() {
    let mut app = create_headless_app();

    let config = match VaultConfig::load(std::path::Path::new("vault.toml")) {
        Ok(config) => config,
        Err(err) => {
            logger::log_error(&format!("Config error, using defaults: {}", err));
            VaultConfig::default()
        }
    };
    app.add_plugins(VaultSimulationPlugin::new(config))
        .add_systems(Startup, spawn_demo_scene)
        .add_systems(Last, grant_pointer_commands);

    logger::log_info("Starting Vault Walker headless run");

    // Даём Rapier посчитать mass properties
    for _ in 0..5 {
        app.update();
    }

    app.world_mut().send_event(ViewportClicked);
    app.update();
    app.world_mut().send_event(KeyInput::down(KeyCode::KeyW));

    for tick in 0..120 {
        app.update();

        if tick % 30 == 0 {
            let camera = *app.world().resource::<CameraPose>();
            let grounded = app.world().resource::<LocomotionController>().is_grounded();
            let focus = app
                .world()
                .resource::<FocusResolver>()
                .focused_name()
                .map(str::to_owned);
            logger::log_info(&format!(
                "Tick {}: camera {} grounded={} focus={:?}",
                tick, camera.position, grounded, focus
            ));
        }
    }

    app.world_mut().send_event(KeyInput::up(KeyCode::KeyW));
    app.world_mut().resource_mut::<ModalGate>().open();
    app.update();
    app.update();

    let controller = app.world().resource::<LocomotionController>();
    logger::log_info(&format!(
        "Modal opened: capture={:?} input clear={}",
        controller.capture_state(),
        controller.input().is_clear()
    ));

    logger::log_info("Headless run complete");
}
