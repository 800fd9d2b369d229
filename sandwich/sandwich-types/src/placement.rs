//! 2D placements of externally stored shapes.

use std::fmt;
use std::path::{Path, PathBuf};

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shape reference placed at a planar offset.
///
/// The shape is opaque: it is a path to vector content that only the export
/// stage ever opens. Two placements are equal when both the reference and
/// the offset are exactly equal.
///
/// # Example
///
/// ```
/// use sandwich_types::Placement2D;
///
/// let a = Placement2D::new("gear.svg", 1.0, 2.0);
/// let b = Placement2D::new("gear.svg", 1.0, 2.0);
/// let c = Placement2D::new("gear.svg", 1.0, 2.5);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.to_string(), "gear.svg at (1,2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement2D {
    /// Path to the SVG file holding the shape.
    pub shape: PathBuf,

    /// Offset of the shape from the sheet origin, in mm.
    pub offset: Vector2<f64>,
}

impl Placement2D {
    /// Create a placement of `shape` at `(x, y)`.
    #[must_use]
    pub fn new(shape: impl Into<PathBuf>, x: f64, y: f64) -> Self {
        Self {
            shape: shape.into(),
            offset: Vector2::new(x, y),
        }
    }

    /// The shape reference.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &Path {
        &self.shape
    }

    /// X offset in mm.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.offset.x
    }

    /// Y offset in mm.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.offset.y
    }

    /// Whether both offset coordinates are finite.
    ///
    /// A NaN offset compares unequal to itself, so placements failing this
    /// check cannot take part in cross-section comparison.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.offset.iter().all(|v| v.is_finite())
    }
}

impl fmt::Display for Placement2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({},{})",
            self.shape.display(),
            self.offset.x,
            self.offset.y
        )
    }
}
