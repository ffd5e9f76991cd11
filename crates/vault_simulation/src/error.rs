//! Ошибки controls/config слоя
//!
//! Ни одна не фатальна: вызывающий код логирует и возвращается в safe default
//! (released capture, пустой input, пустой focus).

use thiserror::Error;

/// Ошибки на seams (pointer host, physics)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Host синхронно отказал в pointer capture (окно без фокуса, OS denial).
    /// Повтор: на следующий click.
    ///
    /// Event-based host (`PointerCommandHost`) отказывает асинхронно: просто
    /// не присылает `CaptureChanged { captured: true }`, этот вариант не строит.
    #[error("pointer capture denied: {0}")]
    CaptureDenied(String),

    /// Player body ещё не готов (нет entity или Rapier не посчитал mass)
    #[error("player body is not ready")]
    BodyNotReady,
}

/// Ошибки чтения vault.toml
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Значение прошло парсинг, но нарушает инвариант (например cap <= 0)
    #[error("invalid config value: {0}")]
    Invalid(String),
}
