use thiserror::Error;

/// Misconfiguration detected while building spirals, drivers or presets.
///
/// Everything past construction is infallible: a tick never returns an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a spiral needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("max_theta must be finite and positive, got {0}")]
    InvalidMaxTheta(f32),

    #[error("curve scale must be finite, got k={k} k2={k2}")]
    InvalidScale { k: f32, k2: f32 },

    #[error("a range is empty or inverted: a_min={a_min} a_max={a_max}")]
    InvalidRange { a_min: f32, a_max: f32 },

    #[error("start value {a_start} lies outside [{a_min}, {a_max}]")]
    StartOutOfRange { a_start: f32, a_min: f32, a_max: f32 },

    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("rotation speed must be finite, got {0}")]
    InvalidRotationSpeed(f32),

    #[error("companion radius must be finite and positive, got {0}")]
    InvalidCompanionRadius(f32),

    #[error("camera distance must be finite and positive, got {0}")]
    InvalidCameraDistance(f32),

    #[error("unknown preset `{0}` (expected oscillating, scaled or static)")]
    UnknownPreset(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
