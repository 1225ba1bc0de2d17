//! Escape-time iteration of the quaternion Julia map `Z <- Z*Z + C`.
//!
//! The iteration stops as soon as `|Z|² > threshold²`, testing after each
//! update. Stopping early yields a smaller (but still above-threshold) norm
//! than running the full budget would. With `threshold >= 2` both values are
//! at least `2 * threshold` and pack to pixel 0. Below 2 an early-exit norm
//! can land between `threshold²` and `2 * threshold` and pack to a dim
//! non-zero pixel where a full-budget run can reach pixel 0.

use crate::quaternion::Quaternion;

/// Result of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeSample {
    /// Squared norm of `Z` when the iteration stopped (unclamped).
    pub measure: f32,
    /// Number of `Z*Z + C` updates performed.
    pub iterations: u32,
    /// Whether `|Z|² > threshold²` was reached within the budget.
    pub escaped: bool,
}

/// Iterates `Z <- Z*Z + C` from `z0` and returns the final squared norm.
///
/// At most `max_iterations` updates are performed. With `max_iterations == 0`
/// the squared norm of `z0` is returned unchanged.
#[must_use]
pub fn escape_measure(z0: Quaternion, c: Quaternion, max_iterations: u32, threshold: f32) -> f32 {
    EscapeTime::new(c, max_iterations, threshold)
        .sample(z0)
        .measure
}

/// Escape-time engine for a fixed Julia constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTime {
    c: Quaternion,
    max_iterations: u32,
    threshold_sq: f32,
}

impl EscapeTime {
    #[must_use]
    pub fn new(c: Quaternion, max_iterations: u32, threshold: f32) -> Self {
        Self {
            c,
            max_iterations,
            threshold_sq: threshold * threshold,
        }
    }

    /// Iterates a single starting point.
    #[must_use]
    pub fn sample(&self, z0: Quaternion) -> EscapeSample {
        let mut z = z0;
        let mut norm_sq = z.squared_norm();

        for i in 0..self.max_iterations {
            z = z.square() + self.c;
            norm_sq = z.squared_norm();

            // NaN compares false, so a NaN orbit runs out the budget
            if norm_sq > self.threshold_sq {
                return EscapeSample {
                    measure: norm_sq,
                    iterations: i + 1,
                    escaped: true,
                };
            }
        }

        EscapeSample {
            measure: norm_sq,
            iterations: self.max_iterations,
            escaped: false,
        }
    }
}
