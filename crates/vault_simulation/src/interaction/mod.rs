//! Interaction module (focus probe)
//!
//! - `scene` - SceneTag + SceneQuery seam
//! - `resolver` - выбор ближайшего interactable + change detection
//! - `rapier_scene` - Rapier/hierarchy адаптер и ECS система

use bevy::prelude::*;

pub mod rapier_scene;
pub mod resolver;
pub mod scene;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod resolver_tests;

pub use rapier_scene::{resolve_focus, FocusChanged, FocusResolver, RapierScene, SceneNodes};
pub use resolver::{find_closest_interactable, FocusChange, FocusTarget, InteractionResolver};
pub use scene::{RayHit, SceneQuery, SceneTag};

use crate::ControlSet;

/// Interaction Plugin
///
/// Update (ControlSet::Interaction): resolve_focus после locomotion.
/// Требует RapierPhysicsPlugin в App.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusResolver>()
            .add_event::<FocusChanged>()
            .add_systems(Update, resolve_focus.in_set(ControlSet::Interaction));
    }
}
