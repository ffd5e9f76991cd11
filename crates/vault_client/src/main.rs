use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use vault_simulation::logger;
use vault_simulation::{VaultConfig, VaultSimulationPlugin};

mod camera;
mod conversation;
mod highlight;
mod input_bridge;
mod scene;

use camera::CameraPlugin;
use conversation::ConversationPlugin;
use highlight::HighlightPlugin;
use input_bridge::InputBridgePlugin;
use scene::GalleryPlugin;

/// Tuning файл рядом с бинарём (опционален)
const CONFIG_PATH: &str = "vault.toml";

fn main() {
    logger::init_logger();

    let config = match VaultConfig::load(std::path::Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            logger::log_error(&format!("{} ignored, using defaults: {}", CONFIG_PATH, err));
            VaultConfig::default()
        }
    };

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vault Walker".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Simulation (controls, locomotion, focus probe)
        .add_plugins(VaultSimulationPlugin::new(config))
        // Window ↔ simulation
        .add_plugins((InputBridgePlugin, CameraPlugin, ConversationPlugin))
        // Presentation
        .add_plugins((GalleryPlugin, HighlightPlugin))
        .run();
}
