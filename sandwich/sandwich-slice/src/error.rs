//! Error types for slicing and merging.

use thiserror::Error;

/// Errors that can occur while building layers.
///
/// All are caller input defects and are detected before any slice is
/// produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliceError {
    /// A slicing parameter is out of range.
    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// An extrusion has a malformed height interval.
    #[error("Invalid extrusion #{index}: z range [{z_min}, {z_max}] (must be finite with z_min <= z_max)")]
    InvalidExtrusion {
        /// Position of the extrusion in the input.
        index: usize,
        /// The extrusion's lower height.
        z_min: f64,
        /// The extrusion's upper height.
        z_max: f64,
    },

    /// An extrusion's placement has a non-finite offset.
    #[error("Invalid extrusion #{index}: placement offset ({x}, {y}) must be finite")]
    InvalidPlacement {
        /// Position of the extrusion in the input.
        index: usize,
        /// The placement's x offset.
        x: f64,
        /// The placement's y offset.
        y: f64,
    },
}

impl SliceError {
    /// Create an `InvalidConfiguration` error.
    #[must_use]
    pub const fn invalid_configuration(
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidConfiguration {
            parameter,
            value,
            reason,
        }
    }
}

/// Result type for slicing operations.
pub type SliceResult<T> = std::result::Result<T, SliceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SliceError::invalid_configuration("step", -0.5, "must be > 0");
        assert_eq!(
            format!("{err}"),
            "Invalid configuration: step = -0.5 (must be > 0)"
        );

        let err = SliceError::InvalidExtrusion {
            index: 3,
            z_min: 2.0,
            z_max: 1.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("#3"));
        assert!(msg.contains("[2, 1]"));
    }
}
