//! Conversation toggle (владелец ModalGate)
//!
//! P открывает/закрывает разговор про exhibit под прицелом, Escape закрывает.
//! Сам диалог вне клиента, здесь только gate и контекст.

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use vault_simulation::logger;
use vault_simulation::{FocusResolver, ModalGate};

/// Exhibit, о котором идёт разговор (None = modal закрыт или focus не было)
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversationContext {
    pub exhibit: Option<String>,
}

pub struct ConversationPlugin;

impl Plugin for ConversationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConversationContext>()
            // До ControlSet::Input: gate применяется в этом же кадре
            .add_systems(PreUpdate, toggle_conversation.after(InputSystem));
    }
}

fn toggle_conversation(
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    resolver: Res<FocusResolver>,
    mut gate: ResMut<ModalGate>,
    mut context: ResMut<ConversationContext>,
) {
    let focused = windows.single().is_ok_and(|window| window.focused);

    let opened = if keys.just_pressed(KeyCode::KeyP) && focused {
        gate.toggle()
    } else if keys.just_pressed(KeyCode::Escape) && gate.is_active() {
        gate.close();
        false
    } else {
        return;
    };

    if opened {
        // Focus прошлого кадра, resolver очистит его уже под modal
        context.exhibit = resolver.focused_name().map(str::to_owned);
        logger::log_info(&format!("💬 Conversation opened: {:?}", context.exhibit));
    } else {
        context.exhibit = None;
        logger::log_info("💬 Conversation closed");
    }
}
