//! InputState: какие movement клавиши зажаты

use bevy::prelude::KeyCode;

/// Логическая movement клавиша
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Sprint,
}

impl MoveKey {
    /// WASD + стрелки + оба Shift. Остальные клавиши: None.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Self::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Self::Right),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Self::Sprint),
            _ => None,
        }
    }
}

/// Зажатые movement флаги
///
/// Инвариант: полностью очищается при открытии modal и при потере capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl InputState {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
            MoveKey::Sprint => self.sprint = held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Хотя бы одна направленная клавиша (sprint не считается)
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// (forward - backward, right - left), каждая ось в {-1, 0, 1}
    pub fn axes(&self) -> (f32, f32) {
        let axis = |positive: bool, negative: bool| (positive as i8 - negative as i8) as f32;
        (axis(self.forward, self.backward), axis(self.right, self.left))
    }
}
