//! Controls systems (ECS)
//!
//! Дренируют input events в LocomotionController ДО locomotion tick,
//! поэтому в пределах кадра events и tick не пересекаются (один поток, без lock).
//!
//! # Архитектура
//!
//! ```text
//! Host (окно / headless скрипт)
//!     ↓ KeyInput, ViewportClicked, CaptureChanged
//! apply_* systems (ControlSet::Input)
//!     ↓ PointerCommand              ↓ PointerLocked / PointerUnlocked
//! Host применяет к курсору          Presentation (hint overlay)
//! ```

use bevy::prelude::*;

use super::capture::{CaptureNotice, PointerHost};
use super::events::*;
use crate::error::ControlError;
use crate::locomotion::LocomotionController;
use crate::logger;
use crate::shared::ModalGate;

/// PointerHost поверх ECS: запросы уходят host'у как PointerCommand events
///
/// Сам запрос не может провалиться здесь: отказ host'а выражается тем,
/// что CaptureChanged { captured: true } так и не приходит.
pub struct PointerCommandHost<'a, 'w> {
    commands: &'a mut EventWriter<'w, PointerCommand>,
}

impl<'a, 'w> PointerCommandHost<'a, 'w> {
    pub fn new(commands: &'a mut EventWriter<'w, PointerCommand>) -> Self {
        Self { commands }
    }
}

impl PointerHost for PointerCommandHost<'_, '_> {
    fn request_capture(&mut self) -> Result<(), ControlError> {
        self.commands.write(PointerCommand::Capture);
        Ok(())
    }

    fn release_capture(&mut self) {
        self.commands.write(PointerCommand::Release);
    }
}

/// Key down/up → InputState
pub fn apply_key_input(
    mut key_events: EventReader<KeyInput>,
    gate: Res<ModalGate>,
    mut controller: ResMut<LocomotionController>,
) {
    for event in key_events.read() {
        controller.handle_key_event(event.code, event.pressed, *gate);
    }
}

/// Click → запрос pointer capture
pub fn apply_viewport_clicks(
    mut clicks: EventReader<ViewportClicked>,
    gate: Res<ModalGate>,
    mut controller: ResMut<LocomotionController>,
    mut pointer_commands: EventWriter<PointerCommand>,
) {
    let mut host = PointerCommandHost::new(&mut pointer_commands);

    for _ in clicks.read() {
        if controller.handle_click(*gate, &mut host) {
            logger::log("Pointer capture requested");
        }
    }
}

/// Host сообщил capture state → FSM + notices
pub fn apply_capture_changes(
    mut changes: EventReader<CaptureChanged>,
    gate: Res<ModalGate>,
    mut controller: ResMut<LocomotionController>,
    mut pointer_commands: EventWriter<PointerCommand>,
    mut locked: EventWriter<PointerLocked>,
    mut unlocked: EventWriter<PointerUnlocked>,
) {
    let mut host = PointerCommandHost::new(&mut pointer_commands);

    for change in changes.read() {
        match controller.on_capture_changed(change.captured, *gate, &mut host) {
            Some(CaptureNotice::Locked) => {
                logger::log_info("🔒 Pointer captured");
                locked.write(PointerLocked);
            }
            Some(CaptureNotice::Unlocked) => {
                logger::log_info("🔓 Pointer released");
                unlocked.write(PointerUnlocked);
            }
            None => {}
        }
    }
}

/// Modal gate открыт → release capture + clear input в этом же кадре
///
/// Locomotion tick делает то же самое, но он no-op пока нет player body.
pub fn enforce_modal_gate(
    gate: Res<ModalGate>,
    mut controller: ResMut<LocomotionController>,
    mut pointer_commands: EventWriter<PointerCommand>,
) {
    if gate.is_changed() && !gate.is_added() {
        let state = if gate.is_active() { "opened" } else { "closed" };
        logger::log_info(&format!("Modal gate {}", state));
    }

    if gate.is_active() {
        let mut host = PointerCommandHost::new(&mut pointer_commands);
        controller.suspend(&mut host);
    }
}
