//! Height-ranged extrusions of a placement.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::placement::Placement2D;

/// A placement that is physically present at every height in
/// `[z_min, z_max]`.
///
/// Construction does not validate the interval; the slicer rejects
/// extrusions with `z_min > z_max` or non-finite heights before doing any
/// work.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extrusion {
    /// The 2D cut being extruded.
    pub placement: Placement2D,

    /// Lowest height of the extrusion in mm.
    pub z_min: f64,

    /// Highest height of the extrusion in mm.
    pub z_max: f64,
}

impl Extrusion {
    /// Extrude `placement` from `z_min` to `z_max`.
    #[must_use]
    pub fn new(placement: Placement2D, z_min: f64, z_max: f64) -> Self {
        Self {
            placement,
            z_min,
            z_max,
        }
    }

    /// Height covered by the extrusion in mm.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Whether the interval is well formed: both ends finite and
    /// `z_min <= z_max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.z_min.is_finite() && self.z_max.is_finite() && self.z_min <= self.z_max
    }

    /// Whether the extrusion has zero height.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_flat(&self) -> bool {
        self.z_min == self.z_max
    }
}

impl fmt::Display for Extrusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}] {}", self.z_min, self.z_max, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring() -> Placement2D {
        Placement2D::new("ring.svg", 0.0, 0.0)
    }

    #[test]
    fn test_height() {
        let e = Extrusion::new(ring(), 1.5, 4.0);
        assert_relative_eq!(e.height(), 2.5);
    }

    #[test]
    fn test_validity() {
        assert!(Extrusion::new(ring(), 0.0, 1.0).is_valid());
        assert!(Extrusion::new(ring(), 1.0, 1.0).is_valid());
        assert!(!Extrusion::new(ring(), 2.0, 1.0).is_valid());
        assert!(!Extrusion::new(ring(), f64::NAN, 1.0).is_valid());
        assert!(!Extrusion::new(ring(), 0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_flat() {
        assert!(Extrusion::new(ring(), 2.0, 2.0).is_flat());
        assert!(!Extrusion::new(ring(), 2.0, 2.5).is_flat());
    }

    #[test]
    fn test_display() {
        let e = Extrusion::new(ring(), 0.5, 2.0);
        assert_eq!(e.to_string(), "[0.5-2] ring.svg at (0,0)");
    }
}
