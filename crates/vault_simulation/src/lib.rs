//! Vault Walker Simulation Core
//!
//! First-person controls для галереи экспонатов на Bevy 0.16 + Rapier 3D.
//!
//! Подсистемы:
//! - input: key flags, pointer capture FSM, modal gate enforcement
//! - locomotion: impulse-based движение rigid body + ground check
//! - interaction: focus probe (какой exhibit под прицелом)
//!
//! Окно, рендер и UI живут в клиенте (`vault_client`). Здесь только
//! логика, которая прогоняется headless в тестах.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

// Публичные модули
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod locomotion;
pub mod logger;
pub mod player;
pub mod shared;

#[cfg(test)]
mod test_support;

// Re-export для удобства
pub use config::{InteractionConfig, LocomotionConfig, VaultConfig};
pub use error::{ConfigError, ControlError};
pub use input::{
    CaptureChanged, CaptureState, InputState, KeyInput, MoveKey, PointerCapture, PointerCommand, PointerHost,
    PointerLocked, PointerUnlocked, ViewportClicked,
};
pub use interaction::{FocusChange, FocusChanged, FocusResolver, FocusTarget, InteractionPlugin, SceneTag};
pub use locomotion::{LocomotionController, LocomotionPlugin, LocomotionReport, PlayerPhysics};
pub use logger::init_logger;
pub use player::Player;
pub use shared::{CameraPose, ModalGate};

/// Порядок controls систем внутри Update
///
/// Input → Locomotion → Interaction: events применяются до tick,
/// focus probe видит уже обновлённую позицию камеры.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlSet {
    Input,
    Locomotion,
    Interaction,
}

/// Input events + pointer capture + modal gate (без Rapier)
///
/// # Порядок выполнения (ControlSet::Input)
/// 1. `apply_key_input` - KeyInput → InputState
/// 2. `apply_viewport_clicks` - ViewportClicked → PointerCommand::Capture
/// 3. `apply_capture_changes` - CaptureChanged → FSM → PointerLocked/PointerUnlocked
/// 4. `enforce_modal_gate` - modal открыт → release + clear
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<KeyInput>()
            .add_event::<ViewportClicked>()
            .add_event::<CaptureChanged>()
            .add_event::<PointerCommand>()
            .add_event::<PointerLocked>()
            .add_event::<PointerUnlocked>()
            .init_resource::<ModalGate>()
            .init_resource::<CameraPose>()
            .init_resource::<LocomotionController>()
            .configure_sets(
                Update,
                (ControlSet::Input, ControlSet::Locomotion, ControlSet::Interaction).chain(),
            )
            .add_systems(
                Update,
                (
                    input::apply_key_input,
                    input::apply_viewport_clicks,
                    input::apply_capture_changes,
                    input::enforce_modal_gate,
                )
                    .chain()
                    .in_set(ControlSet::Input),
            );
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Требует RapierPhysicsPlugin в App (locomotion и focus probe читают
/// Rapier context).
#[derive(Default)]
pub struct VaultSimulationPlugin {
    pub config: VaultConfig,
}

impl VaultSimulationPlugin {
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }
}

impl Plugin for VaultSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LocomotionController::new(self.config.locomotion.clone()))
            .insert_resource(FocusResolver::new(self.config.interaction.clone()))
            .add_plugins((ControlsPlugin, LocomotionPlugin, InteractionPlugin));
    }
}

/// Шаг headless симуляции (и для Time, и для Rapier)
pub const HEADLESS_TIMESTEP: f32 = 1.0 / 60.0;

/// Создаёт minimal Bevy App для headless симуляции
///
/// Фиксированный шаг времени: одинаковый input script → одинаковая траектория.
/// VaultSimulationPlugin добавляется отдельно.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        HEADLESS_TIMESTEP,
    )))
    .insert_resource(TimestepMode::Fixed {
        dt: HEADLESS_TIMESTEP,
        substeps: 1,
    });

    app
}
