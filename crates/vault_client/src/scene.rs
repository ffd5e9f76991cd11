//! Gallery scene: пол, пьедесталы, экспонаты из примитивов
//!
//! Каждый exhibit = root с SceneTag::Interactable (без коллайдера) +
//! дочерние mesh-узлы со своими коллайдерами. Focus probe поднимается от
//! коллайдера к root по ChildOf.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use vault_simulation::logger;
use vault_simulation::SceneTag;

/// Пьедестал: центр + полный размер (ширина, высота, глубина)
struct PedestalLayout {
    position: Vec3,
    size: Vec3,
}

const PEDESTALS: [PedestalLayout; 4] = [
    PedestalLayout {
        position: Vec3::new(14.0, 0.5, -12.5),
        size: Vec3::new(1.0, 1.0, 2.0),
    },
    PedestalLayout {
        position: Vec3::new(14.0, 0.5, -17.5),
        size: Vec3::ONE,
    },
    PedestalLayout {
        position: Vec3::new(22.0, 0.5, -17.5),
        size: Vec3::ONE,
    },
    PedestalLayout {
        position: Vec3::new(22.0, 0.5, -12.5),
        size: Vec3::ONE,
    },
];

pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_gallery);
    }
}

fn spawn_gallery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Floor: тонкий cuboid, верх на y = -0.1
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Cuboid::new(200.0, 0.2, 200.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.22, 0.22, 0.25))),
        Transform::from_xyz(0.0, -0.2, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(100.0, 0.1, 100.0),
        SceneTag::Decoration,
    ));

    let stone = materials.add(Color::srgb(0.55, 0.55, 0.58));
    for (index, pedestal) in PEDESTALS.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Pedestal {}", index + 1)),
            Mesh3d(meshes.add(Cuboid::from_size(pedestal.size))),
            MeshMaterial3d(stone.clone()),
            Transform::from_translation(pedestal.position),
            RigidBody::Fixed,
            Collider::cuboid(pedestal.size.x / 2.0, pedestal.size.y / 2.0, pedestal.size.z / 2.0),
            SceneTag::Decoration,
        ));
    }

    spawn_iron_man(&mut commands, &mut meshes, &mut materials);
    spawn_shield(&mut commands, &mut meshes, &mut materials);
    spawn_mjolnir(&mut commands, &mut meshes, &mut materials);
    spawn_mask(&mut commands, &mut meshes, &mut materials);

    // Общий свет зала
    commands.spawn((
        DirectionalLight {
            illuminance: 3000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_3)),
    ));
    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            range: 15.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(18.0, 3.0, -15.0),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        affects_lightmapped_meshes: false,
    });

    logger::log_info(&format!("Gallery spawned: {} pedestals, 4 exhibits", PEDESTALS.len()));
}

/// Root exhibit entity (тег + transform, без геометрии)
fn exhibit_root(commands: &mut Commands, name: &str, transform: Transform) -> Entity {
    commands
        .spawn((Name::new(name.to_string()), transform, SceneTag::interactable(name)))
        .id()
}

fn spawn_iron_man(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let root = exhibit_root(
        commands,
        "Iron Man's Mk 1 (Undamaged)",
        Transform::from_xyz(14.0, 1.6, -12.5),
    );
    let armor = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.45, 0.42),
        metallic: 0.9,
        perceptual_roughness: 0.4,
        ..default()
    });

    commands.entity(root).with_children(|suit| {
        // Торс
        suit.spawn((
            Mesh3d(meshes.add(Capsule3d::new(0.25, 0.5))),
            MeshMaterial3d(armor.clone()),
            Transform::default(),
            Collider::capsule_y(0.25, 0.25),
        ));
        // Шлем
        suit.spawn((
            Mesh3d(meshes.add(Cuboid::new(0.3, 0.3, 0.3))),
            MeshMaterial3d(armor),
            Transform::from_xyz(0.0, 0.65, 0.0),
            Collider::cuboid(0.15, 0.15, 0.15),
        ));
    });
}

fn spawn_shield(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    // Диск стоит на ребре, лицом к проходу
    let root = exhibit_root(
        commands,
        "Captain America's Shield (Undamaged by Thanos)",
        Transform::from_xyz(14.0, 1.5, -17.5).with_rotation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_3) * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        ),
    );
    let paint = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.2, 0.6),
        metallic: 0.7,
        perceptual_roughness: 0.3,
        ..default()
    });

    commands.entity(root).with_children(|shield| {
        shield.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.45, 0.05))),
            MeshMaterial3d(paint),
            Transform::default(),
            Collider::cylinder(0.025, 0.45),
        ));
    });
}

fn spawn_mjolnir(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let root = exhibit_root(
        commands,
        "Mjolnir",
        Transform::from_xyz(22.0, 1.3, -17.5).with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
    );
    let steel = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.6, 0.62),
        metallic: 1.0,
        perceptual_roughness: 0.25,
        ..default()
    });
    let leather = materials.add(Color::srgb(0.3, 0.18, 0.1));

    commands.entity(root).with_children(|hammer| {
        // Handle
        hammer.spawn((
            Mesh3d(meshes.add(Cylinder::new(0.04, 0.4))),
            MeshMaterial3d(leather),
            Transform::default(),
            Collider::cylinder(0.2, 0.04),
        ));
        // Head
        hammer.spawn((
            Mesh3d(meshes.add(Cuboid::new(0.4, 0.22, 0.22))),
            MeshMaterial3d(steel),
            Transform::from_xyz(0.0, 0.3, 0.0),
            Collider::cuboid(0.2, 0.11, 0.11),
        ));
    });
}

fn spawn_mask(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let root = exhibit_root(
        commands,
        "Spider-Man/Peter Parker's Mask (Earth 616)",
        Transform::from_xyz(22.0, 1.25, -12.5),
    );
    let fabric = materials.add(Color::srgb(0.75, 0.08, 0.08));

    commands.entity(root).with_children(|mask| {
        mask.spawn((
            Mesh3d(meshes.add(Sphere::new(0.2))),
            MeshMaterial3d(fabric),
            Transform::default(),
            Collider::ball(0.2),
        ));
    });
}
