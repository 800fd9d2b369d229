//! Slicing parameters and presets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SliceError, SliceResult};

/// Parameters for slicing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliceParams {
    /// Quantization step along Z in mm.
    pub step: f64,

    /// Tolerance in mm when comparing extrusion edges to slice boundaries.
    ///
    /// Slice boundaries are accumulated by repeated addition of `step`, so an
    /// edge that should sit exactly on a boundary can miss it by a few ulps.
    /// An extrusion only enters a slice if it overlaps it by more than this.
    pub epsilon: f64,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            step: 0.5,
            epsilon: 1e-6,
        }
    }
}

impl SliceParams {
    /// Whole-millimeter slicing (step of 1.0mm).
    #[must_use]
    pub fn whole_millimeter() -> Self {
        Self {
            step: 1.0,
            ..Default::default()
        }
    }

    /// Set the quantization step.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the boundary tolerance.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check that the parameters can drive a slicing run.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidConfiguration`] if `step` is not a finite
    /// positive number, or if `epsilon` is negative, non-finite, or not
    /// smaller than half a step.
    pub fn validate(&self) -> SliceResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SliceError::invalid_configuration(
                "step",
                self.step,
                "must be finite and > 0",
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 || self.epsilon >= self.step / 2.0 {
            return Err(SliceError::invalid_configuration(
                "epsilon",
                self.epsilon,
                "must be finite, >= 0 and < step / 2",
            ));
        }
        Ok(())
    }
}
