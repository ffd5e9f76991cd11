//! Pointer capture FSM
//!
//! ```text
//! Released --click (gate closed) + host grant--> Captured
//! Captured --loss notification / gate open-----> Released
//! ```
//!
//! Host (окно/браузер) асинхронный: click только ЗАПРАШИВАЕТ capture,
//! переход в Captured происходит по `on_capture_changed(true)`.

use crate::error::ControlError;
use crate::logger;
use crate::shared::ModalGate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Released,
    Captured,
}

/// Notice для presentation (hint overlay)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureNotice {
    Locked,
    Unlocked,
}

/// Host seam: кто реально владеет курсором
pub trait PointerHost {
    /// Запросить capture. Err = host отказал сразу (не фатально).
    /// Асинхронный отказ = grant так и не пришёл, FSM остаётся Released.
    fn request_capture(&mut self) -> Result<(), ControlError>;

    fn release_capture(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PointerCapture {
    state: CaptureState,
}

impl PointerCapture {
    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    /// Click по viewport. Возвращает true если запрос ушёл host'у.
    pub fn on_click(&mut self, gate: ModalGate, host: &mut impl PointerHost) -> bool {
        if gate.is_active() || self.is_captured() {
            return false;
        }

        match host.request_capture() {
            Ok(()) => true,
            Err(err) => {
                // Повтор на следующем click
                logger::log_warning(&format!("Pointer capture request failed: {}", err));
                false
            }
        }
    }

    /// Host сообщил новое состояние capture
    pub fn on_capture_changed(
        &mut self,
        captured: bool,
        gate: ModalGate,
        host: &mut impl PointerHost,
    ) -> Option<CaptureNotice> {
        if captured {
            if gate.is_active() {
                // Grant пришёл пока открыт modal: отпускаем сразу
                host.release_capture();
                self.state = CaptureState::Released;
                return None;
            }

            if self.is_captured() {
                return None;
            }

            self.state = CaptureState::Captured;
            return Some(CaptureNotice::Locked);
        }

        let was_captured = self.is_captured();
        self.state = CaptureState::Released;

        (was_captured && !gate.is_active()).then_some(CaptureNotice::Unlocked)
    }

    /// Gate открылся: Captured → Released без Unlocked notice.
    /// Возвращает true если был Captured.
    pub fn force_release(&mut self, host: &mut impl PointerHost) -> bool {
        if !self.is_captured() {
            return false;
        }

        host.release_capture();
        self.state = CaptureState::Released;
        true
    }
}
