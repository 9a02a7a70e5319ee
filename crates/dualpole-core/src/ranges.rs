//! Reset-time sampling ranges.
//!
//! A [`ResetRange`] is the uniform interval a scalar joint state is drawn
//! from when a reset event fires.  A zero-width interval is the idiom for
//! "always this value": resets that pin a joint reuse the same sampling
//! primitive instead of a separate deterministic-set path.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// RangeError
// ---------------------------------------------------------------------------

/// Errors from checking a reset range.
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid bounds: low ({low}) > high ({high})")]
    InvalidBounds { low: f32, high: f32 },

    #[error("bound is not finite: [{low}, {high}]")]
    NonFinite { low: f32, high: f32 },
}

// ---------------------------------------------------------------------------
// ResetRange
// ---------------------------------------------------------------------------

/// Inclusive uniform interval `[low, high]` sampled on episode reset.
///
/// Plain data: nothing is checked on construction.  The runtime calls
/// [`validate`](Self::validate) once when the bundle is assembled and
/// rejects reversed or non-finite bounds there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResetRange {
    pub low: f32,
    pub high: f32,
}

impl ResetRange {
    /// Uniform interval `[low, high]`.
    #[must_use]
    pub const fn uniform(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Zero-width interval that always yields `value`.
    #[must_use]
    pub const fn fixed(value: f32) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Whether the bounds coincide exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Interval width.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.high - self.low
    }

    /// Center of the interval.
    #[must_use]
    pub fn nominal(&self) -> f32 {
        (self.low + self.high) / 2.0
    }

    /// Reject reversed or non-finite bounds.
    pub fn validate(&self) -> Result<(), RangeError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(RangeError::NonFinite {
                low: self.low,
                high: self.high,
            });
        }
        if self.low > self.high {
            return Err(RangeError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Sample a value from the interval.
    ///
    /// A degenerate interval returns `low` without consuming randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.is_degenerate() {
            return self.low;
        }
        rng.gen_range(self.low..=self.high)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    // -- Construction --

    #[test]
    fn fixed_is_degenerate() {
        let range = ResetRange::fixed(std::f32::consts::PI);
        assert!(range.is_degenerate());
        assert!((range.low - std::f32::consts::PI).abs() < f32::EPSILON);
        assert!((range.high - std::f32::consts::PI).abs() < f32::EPSILON);
    }

    #[test]
    fn uniform_is_not_degenerate() {
        let range = ResetRange::uniform(-1.0, 1.0);
        assert!(!range.is_degenerate());
    }

    #[test]
    fn degenerate_bounds_are_exactly_equal() {
        let range = ResetRange::fixed(0.1);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(range.low, range.high);
        }
    }

    // -- Validation --

    #[test]
    fn validate_accepts_degenerate() {
        assert!(ResetRange::fixed(0.0).validate().is_ok());
    }

    #[test]
    fn validate_accepts_proper_interval() {
        assert!(ResetRange::uniform(-0.5, 0.5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_reversed_bounds() {
        let err = ResetRange::uniform(1.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, RangeError::InvalidBounds { .. }));
    }

    #[test]
    fn validate_rejects_nan() {
        let err = ResetRange::uniform(f32::NAN, 1.0).validate().unwrap_err();
        assert!(matches!(err, RangeError::NonFinite { .. }));
    }

    #[test]
    fn validate_rejects_inf() {
        let err = ResetRange::uniform(0.0, f32::INFINITY).validate().unwrap_err();
        assert!(matches!(err, RangeError::NonFinite { .. }));
    }

    // -- Sampling --

    #[test]
    fn degenerate_sample_returns_exact_value() {
        let range = ResetRange::fixed(std::f32::consts::PI);
        let mut rng = rng();
        for _ in 0..10 {
            #[allow(clippy::float_cmp)]
            {
                assert_eq!(range.sample(&mut rng), std::f32::consts::PI);
            }
        }
    }

    #[test]
    fn degenerate_sample_does_not_consume_randomness() {
        let range = ResetRange::fixed(1.0);
        let mut rng1 = rng();
        let mut rng2 = rng();
        let _ = range.sample(&mut rng1);
        let a: f32 = rng1.gen_range(0.0..1.0);
        let b: f32 = rng2.gen_range(0.0..1.0);
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    fn uniform_samples_within_bounds() {
        let range = ResetRange::uniform(1.0, 5.0);
        let mut rng = rng();
        for _ in 0..100 {
            let v = range.sample(&mut rng);
            assert!((1.0..=5.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn sample_deterministic_with_same_seed() {
        let range = ResetRange::uniform(0.0, 100.0);
        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);
        assert!((range.sample(&mut rng1) - range.sample(&mut rng2)).abs() < f32::EPSILON);
    }

    // -- Derived values --

    #[test]
    fn span_and_nominal() {
        let range = ResetRange::uniform(2.0, 4.0);
        assert!((range.span() - 2.0).abs() < f32::EPSILON);
        assert!((range.nominal() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn degenerate_span_is_zero() {
        let range = ResetRange::fixed(7.0);
        assert!(range.span().abs() < f32::EPSILON);
        assert!((range.nominal() - 7.0).abs() < f32::EPSILON);
    }

    // -- Serde --

    #[test]
    fn serde_roundtrip() {
        let range = ResetRange::uniform(-1.24, 1.24);
        let json = serde_json::to_string(&range).unwrap();
        let range2: ResetRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, range2);
    }

    #[test]
    fn toml_deserialization() {
        let range: ResetRange = toml::from_str("low = 0.0\nhigh = 0.0").unwrap();
        assert!(range.is_degenerate());
    }

    // -- Send + Sync --

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn range_is_send_sync() {
        assert_send_sync::<ResetRange>();
    }
}
