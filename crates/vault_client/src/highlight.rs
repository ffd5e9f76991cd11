//! Presentation поверх focus/capture событий
//!
//! - Spotlight над exhibit под прицелом
//! - Prompt "Press [P] to ask about the ..."
//! - Hint "Click to look around" пока курсор не захвачен
//! - Overlay "Chat active" пока открыт modal
//!
//! Focus и capture реагируют только на события (FocusChanged,
//! PointerLocked/Unlocked), состояние resolver'а не опрашивается.

use bevy::prelude::*;
use vault_simulation::{
    CaptureState, FocusChange, FocusChanged, LocomotionController, ModalGate, PointerLocked, PointerUnlocked,
};

/// Высота spotlight над полом
const SPOTLIGHT_HEIGHT: f32 = 5.0;

const MODAL_HINT: &str = "Chat active: Movement is paused.\nPress 'P' to close the chat and resume exploring.";

#[derive(Component)]
pub struct FocusSpotlight;

#[derive(Component)]
pub struct FocusPrompt;

#[derive(Component)]
pub struct CaptureHint;

#[derive(Component)]
pub struct ModalHint;

pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay)
            .add_systems(
                Update,
                (update_focus_presentation, update_capture_hint, update_modal_hint).chain(),
            );
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("Focus Spotlight"),
        SpotLight {
            intensity: 400_000.0,
            range: 10.0,
            outer_angle: std::f32::consts::FRAC_PI_6,
            inner_angle: std::f32::consts::FRAC_PI_6 * 0.5,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, SPOTLIGHT_HEIGHT, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        Visibility::Hidden,
        FocusSpotlight,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Percent(40.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        Visibility::Hidden,
        FocusPrompt,
    ));

    // Курсор стартует свободным: hint виден сразу
    commands.spawn((
        Text::new("Click to look around"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(48.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        Visibility::Visible,
        CaptureHint,
    ));

    commands.spawn((
        Text::new(MODAL_HINT),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(45.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
        Visibility::Hidden,
        ModalHint,
    ));
}

fn prompt_text(name: &str) -> String {
    format!("Press [P] to ask about the {}", name)
}

/// Позиция spotlight: над exhibit на фиксированной высоте
fn spotlight_transform(target: Vec3) -> Transform {
    Transform::from_xyz(target.x, SPOTLIGHT_HEIGHT, target.z).looking_at(target, Vec3::Z)
}

fn update_focus_presentation(
    mut focus_events: EventReader<FocusChanged>,
    mut spotlight: Query<(&mut Transform, &mut Visibility), With<FocusSpotlight>>,
    mut prompt: Query<(&mut Text, &mut Visibility), (With<FocusPrompt>, Without<FocusSpotlight>)>,
) {
    let (Ok((mut light_transform, mut light_visibility)), Ok((mut text, mut prompt_visibility))) =
        (spotlight.single_mut(), prompt.single_mut())
    else {
        focus_events.clear();
        return;
    };

    for FocusChanged(change) in focus_events.read() {
        match change {
            FocusChange::Acquired(target) => {
                *light_transform = spotlight_transform(target.position);
                *light_visibility = Visibility::Visible;
                text.0 = prompt_text(&target.name);
                *prompt_visibility = Visibility::Visible;
            }
            FocusChange::Moved { position, .. } => {
                *light_transform = spotlight_transform(*position);
            }
            FocusChange::Cleared => {
                *light_visibility = Visibility::Hidden;
                *prompt_visibility = Visibility::Hidden;
            }
        }
    }
}

fn update_capture_hint(
    mut locked: EventReader<PointerLocked>,
    mut unlocked: EventReader<PointerUnlocked>,
    mut hint: Query<&mut Visibility, With<CaptureHint>>,
) {
    // Оба в одном кадре: курсор в итоге свободен
    let show = match (locked.read().count() > 0, unlocked.read().count() > 0) {
        (_, true) => true,
        (true, false) => false,
        (false, false) => return,
    };

    for mut visibility in hint.iter_mut() {
        *visibility = if show { Visibility::Visible } else { Visibility::Hidden };
    }
}

/// Modal overlay вместо capture hint, пока открыт разговор
///
/// Gate отпускает курсор без PointerUnlocked, поэтому после закрытия hint
/// возвращаем здесь (capture сам не восстанавливается).
fn update_modal_hint(
    gate: Res<ModalGate>,
    controller: Res<LocomotionController>,
    mut modal_hint: Query<&mut Visibility, (With<ModalHint>, Without<CaptureHint>)>,
    mut capture_hint: Query<&mut Visibility, (With<CaptureHint>, Without<ModalHint>)>,
) {
    if !gate.is_changed() {
        return;
    }

    let active = gate.is_active();
    for mut visibility in modal_hint.iter_mut() {
        *visibility = if active { Visibility::Visible } else { Visibility::Hidden };
    }

    let released = controller.capture_state() == CaptureState::Released;
    for mut visibility in capture_hint.iter_mut() {
        *visibility = if !active && released {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
