//! Controls events
//!
//! Host (клиент, headless скрипт, тесты) пишет input events,
//! симуляция отвечает PointerCommand + notices.

use bevy::prelude::{Event, KeyCode};

/// Key down/up с физическим кодом клавиши
///
/// Auto-repeat key-down допустим: флаг просто остаётся выставленным.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub pressed: bool,
}

impl KeyInput {
    pub fn down(code: KeyCode) -> Self {
        Self { code, pressed: true }
    }

    pub fn up(code: KeyCode) -> Self {
        Self { code, pressed: false }
    }
}

/// Click по viewport (ЛКМ): запрос pointer capture
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ViewportClicked;

/// Host сообщает реальное состояние pointer capture
///
/// Приходит как ответ на PointerCommand::Capture, а также при потере
/// capture по инициативе host (Escape, alt-tab).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureChanged {
    pub captured: bool,
}

/// Команда host'у: захватить/отпустить курсор
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCommand {
    Capture,
    Release,
}

/// Notice: capture получен (скрыть hint overlay)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PointerLocked;

/// Notice: capture потерян вне modal (показать hint overlay)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PointerUnlocked;
