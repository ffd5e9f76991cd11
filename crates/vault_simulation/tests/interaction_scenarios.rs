//! Focus probe integration test (реальный Rapier query pipeline)
//!
//! Камера ставится вручную, player body не спавнится: проверяем только
//! выбор exhibit под прицелом.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use vault_simulation::*;

const EYE: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Headless App: Controls + Interaction, без LocomotionPlugin
fn create_probe_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins((ControlsPlugin, InteractionPlugin));

    // yaw = 0, pitch = 0 → смотрим в -Z
    app.insert_resource(CameraPose {
        position: EYE,
        yaw: 0.0,
        pitch: 0.0,
    });
    app
}

fn spawn_block(app: &mut App, name: &str, z: f32, tag: Option<SceneTag>) -> Entity {
    let mut entity = app.world_mut().spawn((
        Name::new(name.to_string()),
        Transform::from_translation(EYE + Vec3::new(0.0, 0.0, z)),
        RigidBody::Fixed,
        Collider::cuboid(0.25, 0.25, 0.25),
    ));
    if let Some(tag) = tag {
        entity.insert(tag);
    }
    entity.id()
}

/// Пара кадров, чтобы Rapier создал коллайдеры и обновил query pipeline
fn settle(app: &mut App) {
    for _ in 0..3 {
        app.update();
    }
}

fn focused_name(app: &App) -> Option<String> {
    app.world()
        .resource::<FocusResolver>()
        .focused_name()
        .map(str::to_owned)
}

#[test]
fn test_nearest_tagged_exhibit_behind_occluder() {
    let mut app = create_probe_app();
    spawn_block(&mut app, "Glass", -1.0, None);
    let near = spawn_block(&mut app, "Near", -3.0, Some(SceneTag::interactable("Mjolnir")));
    spawn_block(&mut app, "Far", -5.0, Some(SceneTag::interactable("Captain America's Shield")));

    settle(&mut app);

    assert_eq!(focused_name(&app).as_deref(), Some("Mjolnir"));
    let focus = app.world().resource::<FocusResolver>().focus().cloned();
    assert_eq!(focus.map(|target| target.node), Some(near));
}

#[test]
fn test_exhibit_beyond_range_is_not_focused() {
    let mut app = create_probe_app();
    spawn_block(&mut app, "Distant", -12.0, Some(SceneTag::interactable("Iron Man's Mk 1 (Undamaged)")));

    settle(&mut app);

    assert_eq!(focused_name(&app), None);
}

#[test]
fn test_child_collider_focuses_tagged_root() {
    let mut app = create_probe_app();
    let root = app
        .world_mut()
        .spawn((
            Transform::from_translation(EYE + Vec3::new(0.0, 0.0, -4.0)),
            SceneTag::interactable("Spider-Man/Peter Parker's Mask (Earth 616)"),
        ))
        .with_children(|exhibit| {
            exhibit.spawn((Transform::default(), RigidBody::Fixed, Collider::ball(0.3)));
        })
        .id();

    settle(&mut app);

    let focus = app.world().resource::<FocusResolver>().focus().cloned();
    assert_eq!(focus.as_ref().map(|target| target.node), Some(root));
    assert_eq!(
        focus.map(|target| target.name).as_deref(),
        Some("Spider-Man/Peter Parker's Mask (Earth 616)")
    );
}

#[test]
fn test_focus_events_fire_on_change_only() {
    let mut app = create_probe_app();
    spawn_block(&mut app, "Hammer", -3.0, Some(SceneTag::interactable("Mjolnir")));

    let mut acquired = 0;
    for _ in 0..6 {
        app.update();
        acquired += app
            .world()
            .resource::<Events<FocusChanged>>()
            .iter_current_update_events()
            .filter(|event| matches!(event.0, FocusChange::Acquired(_)))
            .count();
    }

    assert_eq!(acquired, 1, "Acquired должен прийти ровно один раз");
}

#[test]
fn test_modal_gate_clears_focus() {
    let mut app = create_probe_app();
    spawn_block(&mut app, "Hammer", -3.0, Some(SceneTag::interactable("Mjolnir")));
    settle(&mut app);
    assert!(focused_name(&app).is_some());

    app.world_mut().resource_mut::<ModalGate>().open();
    app.update();

    assert_eq!(focused_name(&app), None);
    let cleared: Vec<_> = app
        .world()
        .resource::<Events<FocusChanged>>()
        .iter_current_update_events()
        .cloned()
        .collect();
    assert_eq!(cleared, vec![FocusChanged(FocusChange::Cleared)]);
}
