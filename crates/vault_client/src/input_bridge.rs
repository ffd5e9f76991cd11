//! Window ↔ controls bridge
//!
//! Переводит winit input в события симуляции и исполняет PointerCommand на
//! primary window (cursor grab). Сама симуляция про окно не знает.
//!
//! # Порядок выполнения
//! - PreUpdate (после InputSystem): keyboard/mouse → KeyInput, ViewportClicked;
//!   Escape и потеря фокуса → release + CaptureChanged(false)
//! - PostUpdate: PointerCommand → cursor grab → CaptureChanged

use bevy::input::keyboard::KeyboardInput;
use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow, WindowFocused};
use vault_simulation::logger;
use vault_simulation::{CaptureChanged, KeyInput, PointerCommand, ViewportClicked};

pub struct InputBridgePlugin;

impl Plugin for InputBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (forward_keyboard, forward_clicks, release_on_escape_or_blur)
                .chain()
                .after(InputSystem),
        )
        .add_systems(PostUpdate, apply_pointer_commands);
    }
}

fn is_grabbed(window: &Window) -> bool {
    window.cursor_options.grab_mode != CursorGrabMode::None
}

fn set_grab(window: &mut Window, grabbed: bool) {
    if grabbed {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Все key events как есть: маппинг на movement флаги делает controller
fn forward_keyboard(mut keyboard: EventReader<KeyboardInput>, mut key_events: EventWriter<KeyInput>) {
    for event in keyboard.read() {
        key_events.write(KeyInput {
            code: event.key_code,
            pressed: event.state.is_pressed(),
        });
    }
}

fn forward_clicks(mouse: Res<ButtonInput<MouseButton>>, mut clicks: EventWriter<ViewportClicked>) {
    if mouse.just_pressed(MouseButton::Left) {
        clicks.write(ViewportClicked);
    }
}

/// Host-инициированная потеря capture (Escape, alt-tab)
fn release_on_escape_or_blur(
    keys: Res<ButtonInput<KeyCode>>,
    mut focus_events: EventReader<WindowFocused>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut changes: EventWriter<CaptureChanged>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    let blurred = focus_events.read().any(|event| !event.focused);
    if !(blurred || keys.just_pressed(KeyCode::Escape)) || !is_grabbed(&window) {
        return;
    }

    set_grab(&mut window, false);
    changes.write(CaptureChanged { captured: false });
}

/// PointerCommand → cursor grab
///
/// Capture без фокуса окна = отказ: grant не отправляем, controller
/// остаётся Released до следующего click.
fn apply_pointer_commands(
    mut commands: EventReader<PointerCommand>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut changes: EventWriter<CaptureChanged>,
) {
    let Ok(mut window) = windows.single_mut() else {
        commands.clear();
        return;
    };

    for command in commands.read() {
        match command {
            PointerCommand::Capture => {
                if !window.focused {
                    logger::log_warning("Pointer capture denied: window not focused");
                    continue;
                }
                set_grab(&mut window, true);
                changes.write(CaptureChanged { captured: true });
            }
            PointerCommand::Release => {
                set_grab(&mut window, false);
                changes.write(CaptureChanged { captured: false });
            }
        }
    }
}
