use thiserror::Error;

use crate::ranges::RangeError;

/// Top-level error type for dualpole-core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Range error: {0}")]
    Range(#[from] RangeError),
}

/// Construction-time configuration errors.
///
/// A bundle is plain data and checks nothing on its own; the runtime runs
/// the `validate()` methods once when the environment is built and fails
/// fast on the first error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid dt: {0} (must be > 0)")]
    InvalidDt(f64),

    #[error("Invalid render_interval: {0} (must be >= 1)")]
    InvalidRenderInterval(u32),

    #[error("Invalid decimation: {0} (must be >= 1)")]
    InvalidDecimation(u32),

    #[error("Invalid episode_length_s: {0} (must be > 0)")]
    InvalidEpisodeLength(f64),

    #[error("Unknown scene entity: {0}")]
    UnknownEntity(String),

    #[error("Unknown joint '{joint}' on articulation '{asset}'")]
    UnknownJoint { asset: String, joint: String },

    #[error("Duplicate prim path: {0}")]
    DuplicatePrimPath(String),

    #[error("Environment spacing {spacing} is below the robot footprint {footprint}")]
    SpacingBelowFootprint { spacing: f32, footprint: f32 },

    #[error("Invalid range for {field}: {source}")]
    Range { field: String, source: RangeError },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
