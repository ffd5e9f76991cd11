//! Shared domain: cross-cutting состояние
//!
//! Читается и locomotion, и interaction:
//! - ModalGate (conversation active)
//! - CameraPose (first-person камера)

pub mod camera;
pub mod modal;

pub use camera::*;
pub use modal::*;
