//! Tuning параметры controls (vault.toml)
//!
//! Все поля имеют defaults, файл может задавать любое подмножество:
//! ```toml
//! [locomotion]
//! base_speed = 2.5
//!
//! [interaction]
//! max_range = 8.0
//! ```

use bevy::prelude::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Корневой конфиг
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub locomotion: LocomotionConfig,
    pub interaction: InteractionConfig,
}

impl VaultConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: VaultConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает файл. Отсутствующий файл: не ошибка, возвращаем defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locomotion.validate()?;
        self.interaction.validate()
    }
}

/// Параметры first-person движения
///
/// Скорости в m/s, impulse масштабируется `impulse_scale * dt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Базовая скорость (до air control и sprint)
    pub base_speed: f32,
    /// Множитель speed и cap при зажатом Shift
    pub sprint_multiplier: f32,
    /// Доля authority в воздухе (1.0 = как на земле)
    pub air_control: f32,
    /// Cap горизонтальной скорости без sprint
    pub max_speed: f32,
    pub impulse_scale: f32,
    /// Множитель горизонтальной скорости при торможении (0.1 = почти стоп за кадр)
    pub idle_damping: f32,
    /// Длина ground ray от основания капсулы (inclusive)
    pub ground_ray_length: f32,
    pub capsule_half_height: f32,
    pub capsule_radius: f32,
    /// Высота глаз над центром body
    pub eye_height: f32,
    pub spawn_position: [f32; 3],
    pub initial_yaw: f32,
    pub initial_pitch: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 2.2,
            sprint_multiplier: 2.0,
            air_control: 0.3,
            max_speed: 5.0,
            impulse_scale: 10.0,
            idle_damping: 0.1,
            ground_ray_length: 0.1,
            capsule_half_height: 0.5,
            capsule_radius: 0.3,
            eye_height: 1.6,
            spawn_position: [17.31, 0.67, -12.36],
            initial_yaw: 1.58,
            initial_pitch: -0.27,
        }
    }
}

impl LocomotionConfig {
    /// Cap горизонтальной скорости (sprint-dependent)
    pub fn speed_cap(&self, sprint: bool) -> f32 {
        if sprint {
            self.max_speed * self.sprint_multiplier
        } else {
            self.max_speed
        }
    }

    /// Расстояние от центра body до основания капсулы
    pub fn foot_offset(&self) -> f32 {
        self.capsule_half_height + self.capsule_radius
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("impulse_scale", self.impulse_scale),
            ("ground_ray_length", self.ground_ray_length),
            ("capsule_half_height", self.capsule_half_height),
            ("capsule_radius", self.capsule_radius),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("locomotion.{name} must be > 0, got {value}")));
            }
        }

        if self.sprint_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "locomotion.sprint_multiplier must be >= 1, got {}",
                self.sprint_multiplier
            )));
        }

        for (name, value) in [("air_control", self.air_control), ("idle_damping", self.idle_damping)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("locomotion.{name} must be in [0, 1], got {value}")));
            }
        }

        Ok(())
    }
}

/// Параметры focus probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Максимальная дистанция до exhibit (units)
    pub max_range: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { max_range: 10.0 }
    }
}

impl InteractionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_range > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "interaction.max_range must be > 0, got {}",
                self.max_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = VaultConfig::from_toml_str(
            r#"
            [locomotion]
            base_speed = 3.0

            [interaction]
            max_range = 8.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.locomotion.base_speed, 3.0);
        assert_eq!(config.locomotion.max_speed, 5.0);
        assert_eq!(config.interaction.max_range, 8.0);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = VaultConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, VaultConfig::default());
    }

    #[test]
    fn test_sprint_cap_is_multiplied() {
        let config = LocomotionConfig::default();
        assert_eq!(config.speed_cap(false), 5.0);
        assert_eq!(config.speed_cap(true), 10.0);
        assert!((config.foot_offset() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = VaultConfig::from_toml_str("[locomotion]\nidle_damping = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");

        let err = VaultConfig::from_toml_str("[interaction]\nmax_range = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = VaultConfig::from_toml_str("[locomotion\nbase_speed = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = VaultConfig::load(Path::new("definitely/not/here/vault.toml")).expect("defaults");
        assert_eq!(config, VaultConfig::default());
    }
}
