//! Modal gate: флаг "идёт разговор"
//!
//! Владелец: приложение (conversation toggle в клиенте). Controls слой только
//! читает и передаёт значение явно в каждый handle_*/tick.

use bevy::prelude::Resource;

/// Modal-active флаг
///
/// Пока активен:
/// - pointer capture запрещён (grant сразу отпускается)
/// - InputState очищен, key-down игнорируются
/// - focus probe выключен
///
/// Закрытие НЕ возвращает capture автоматически: нужен явный click.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalGate {
    active: bool,
}

impl ModalGate {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Возвращает true если состояние реально изменилось
    pub fn open(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
