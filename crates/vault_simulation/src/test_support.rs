//! Fakes для unit тестов (без окна и без Rapier)

use bevy::prelude::Vec3;

use crate::error::ControlError;
use crate::input::PointerHost;
use crate::locomotion::{BodyState, PlayerPhysics};

/// Host, который записывает запросы и может отказать
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub deny: bool,
    pub capture_requests: usize,
    pub releases: usize,
}

impl PointerHost for RecordingHost {
    fn request_capture(&mut self) -> Result<(), ControlError> {
        self.capture_requests += 1;
        if self.deny {
            return Err(ControlError::CaptureDenied("window not focused".into()));
        }
        Ok(())
    }

    fn release_capture(&mut self) {
        self.releases += 1;
    }
}

/// Body без solver'а: velocity меняется только через set_linear_velocity,
/// ground ray отвечает заранее заданной дистанцией.
#[derive(Debug, Clone)]
pub struct FakeBody {
    pub state: Option<BodyState>,
    pub ground_distance: Option<f32>,
    pub velocity_writes: usize,
}

impl FakeBody {
    pub fn grounded_at(position: Vec3) -> Self {
        Self {
            state: Some(BodyState {
                position,
                velocity: Vec3::ZERO,
                mass: 1.0,
            }),
            ground_distance: Some(0.02),
            velocity_writes: 0,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.map(|s| s.velocity).unwrap_or_default()
    }
}

impl PlayerPhysics for FakeBody {
    fn body_state(&self) -> Result<BodyState, ControlError> {
        self.state.ok_or(ControlError::BodyNotReady)
    }

    fn cast_ground_ray(&self, _origin: Vec3, max_distance: f32) -> Option<f32> {
        self.ground_distance.filter(|distance| *distance <= max_distance)
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        if let Some(state) = self.state.as_mut() {
            state.velocity = velocity;
            self.velocity_writes += 1;
        }
    }
}
