//! Player input module
//!
//! # Компоненты модуля
//!
//! - `events` - ECS события (KeyInput, ViewportClicked, CaptureChanged, PointerCommand)
//! - `state` - InputState (зажатые movement клавиши)
//! - `capture` - pointer capture FSM + PointerHost seam
//! - `systems` - ECS системы применения events к LocomotionController

pub mod capture;
pub mod events;
pub mod state;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod capture_tests;

pub use capture::*;
pub use events::*;
pub use state::*;
pub use systems::*;
