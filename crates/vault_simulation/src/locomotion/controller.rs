//! LocomotionController: first-person движение поверх rigid body
//!
//! Архитектура:
//! - Rapier dynamic body (capsule, rotation locked), solver отвечает за gravity
//! - Controller меняет ТОЛЬКО горизонтальную velocity (impulse + clamp + damping)
//! - Ground check коротким ray от основания капсулы
//! - Pointer capture FSM живёт здесь же: движение разрешено только в Captured
//!
//! Physics и pointer host приходят через trait seams, поэтому tick
//! тестируется с fake body без Rapier.

use bevy::prelude::*;

use super::math;
use crate::config::LocomotionConfig;
use crate::error::ControlError;
use crate::input::{CaptureNotice, CaptureState, InputState, MoveKey, PointerCapture, PointerHost};
use crate::logger;
use crate::shared::{CameraPose, ModalGate};

/// Snapshot player body на начало кадра
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
}

/// Physics seam для player body
pub trait PlayerPhysics {
    /// Err(BodyNotReady) → tick no-op (startup race)
    fn body_state(&self) -> Result<BodyState, ControlError>;

    /// Луч строго вниз из `origin`. Исключает dynamic bodies и сам player.
    /// Возвращает distance до ближайшего попадания в пределах `max_distance`.
    fn cast_ground_ray(&self, origin: Vec3, max_distance: f32) -> Option<f32>;

    fn set_linear_velocity(&mut self, velocity: Vec3);
}

/// Итог одного tick (для логов/тестов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionReport {
    pub grounded: bool,
    /// Движение разрешено и зажата хотя бы одна направленная клавиша
    pub moving: bool,
    pub velocity: Vec3,
}

#[derive(Resource, Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    input: InputState,
    capture: PointerCapture,
    grounded: bool,
    orientation_initialized: bool,
    /// Чтобы BodyNotReady логировался один раз, а не каждый кадр
    waiting_for_body: bool,
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(LocomotionConfig::default())
    }
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            input: InputState::default(),
            capture: PointerCapture::default(),
            grounded: false,
            orientation_initialized: false,
            waiting_for_body: false,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Key down/up
    ///
    /// Key-up применяется всегда (иначе залипшие клавиши после modal).
    /// Key-down при открытом modal игнорируется и чистит все флаги.
    pub fn handle_key_event(&mut self, code: KeyCode, pressed: bool, gate: ModalGate) {
        let Some(key) = MoveKey::from_key_code(code) else {
            return;
        };

        if !pressed {
            self.input.set(key, false);
            return;
        }

        if gate.is_active() {
            self.input.clear();
            return;
        }

        self.input.set(key, true);
    }

    /// Click по viewport. true = запрос capture ушёл host'у.
    pub fn handle_click(&mut self, gate: ModalGate, host: &mut impl PointerHost) -> bool {
        self.capture.on_click(gate, host)
    }

    pub fn on_capture_changed(
        &mut self,
        captured: bool,
        gate: ModalGate,
        host: &mut impl PointerHost,
    ) -> Option<CaptureNotice> {
        let notice = self.capture.on_capture_changed(captured, gate, host);
        if !self.capture.is_captured() {
            self.input.clear();
        }
        notice
    }

    /// Modal открыт: release capture (без Unlocked notice) + clear input
    pub fn suspend(&mut self, host: &mut impl PointerHost) {
        if self.capture.force_release(host) {
            logger::log("Pointer capture released by modal gate");
        }
        self.input.clear();
    }

    /// Per-frame update
    ///
    /// Порядок:
    /// 1. Body state (нет body → no-op)
    /// 2. Одноразовая начальная ориентация камеры
    /// 3. Modal gate → suspend
    /// 4. Ground check
    /// 5. Impulse + clamp ИЛИ damping
    /// 6. Camera position = body + eye offset
    pub fn tick(
        &mut self,
        dt: f32,
        gate: ModalGate,
        physics: &mut impl PlayerPhysics,
        camera: &mut CameraPose,
        host: &mut impl PointerHost,
    ) -> Option<LocomotionReport> {
        let body = match physics.body_state() {
            Ok(body) => body,
            Err(err) => {
                if !self.waiting_for_body {
                    logger::log(&format!("Locomotion tick skipped: {}", err));
                    self.waiting_for_body = true;
                }
                return None;
            }
        };
        self.waiting_for_body = false;

        if !self.orientation_initialized {
            camera.yaw = self.config.initial_yaw;
            camera.pitch = self.config.initial_pitch;
            self.orientation_initialized = true;
        }

        if gate.is_active() {
            self.suspend(host);
        }

        let foot = body.position - Vec3::Y * self.config.foot_offset();
        let ground_hit = physics.cast_ground_ray(foot, self.config.ground_ray_length);
        self.grounded = math::is_grounded(ground_hit, self.config.ground_ray_length);

        let permitted = self.capture.is_captured() && !gate.is_active();
        let moving = permitted && self.input.any_direction();

        let velocity = if moving {
            let direction = math::movement_direction(
                &self.input,
                camera.horizontal_forward(),
                camera.horizontal_right(),
            );
            let speed = math::movement_speed(&self.config, self.input.sprint, self.grounded);
            let impulse = direction * speed * dt * self.config.impulse_scale;

            let pushed = math::apply_impulse(body.velocity, impulse, body.mass);
            math::clamp_horizontal(pushed, self.config.speed_cap(self.input.sprint))
        } else if permitted {
            // Стоим на месте: на земле гасим скольжение, в воздухе инерция сохраняется
            if self.grounded {
                math::damp_horizontal(body.velocity, self.config.idle_damping)
            } else {
                body.velocity
            }
        } else {
            self.input.clear();
            math::damp_horizontal(body.velocity, self.config.idle_damping)
        };

        if velocity != body.velocity {
            physics.set_linear_velocity(velocity);
        }

        camera.position = body.position + Vec3::Y * self.config.eye_height;

        Some(LocomotionReport {
            grounded: self.grounded,
            moving,
            velocity,
        })
    }
}
