//! Observation corruption models.
//!
//! [`NoiseCfg`] is the parameter type behind an observation group's
//! corruption flag.  Sampling takes an explicit `&mut R: Rng` so that a
//! seeded runtime stays reproducible.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// NoiseError
// ---------------------------------------------------------------------------

/// Validation errors for noise parameters.
#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("std must be finite and >= 0, got {0}")]
    InvalidStd(f32),

    #[error("mean is not finite: {0}")]
    NonFiniteMean(f32),

    #[error("noise range must satisfy low < high with finite bounds, got [{low}, {high}]")]
    InvalidRange { low: f32, high: f32 },
}

// ---------------------------------------------------------------------------
// NoiseCfg
// ---------------------------------------------------------------------------

/// Additive noise applied to an observation term when the group enables
/// corruption.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseCfg {
    /// Gaussian noise with the given mean and standard deviation.
    Gaussian { mean: f32, std: f32 },
    /// Uniform noise over `[low, high)`.
    Uniform { low: f32, high: f32 },
}

impl NoiseCfg {
    /// Zero-mean Gaussian noise.
    #[must_use]
    pub const fn gaussian_zero_mean(std: f32) -> Self {
        Self::Gaussian { mean: 0.0, std }
    }

    /// Reject malformed parameters.
    pub fn validate(&self) -> Result<(), NoiseError> {
        match *self {
            Self::Gaussian { mean, std } => {
                if !std.is_finite() || std < 0.0 {
                    return Err(NoiseError::InvalidStd(std));
                }
                if !mean.is_finite() {
                    return Err(NoiseError::NonFiniteMean(mean));
                }
                Ok(())
            }
            Self::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(NoiseError::InvalidRange { low, high });
                }
                Ok(())
            }
        }
    }

    /// Sample one additive noise value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match *self {
            Self::Gaussian { mean, std } => {
                if std == 0.0 {
                    return mean;
                }
                let dist = Normal::new(f64::from(mean), f64::from(std)).unwrap();
                #[allow(clippy::cast_possible_truncation)]
                let val = dist.sample(rng) as f32;
                val
            }
            Self::Uniform { low, high } => rng.gen_range(low..high),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
