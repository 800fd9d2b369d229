//! Layer types for merged sandwiches.

use std::fmt;

use sandwich_types::CrossSection;

use crate::slicer::Slice;

/// One physical sheet of the sandwich.
///
/// A layer covers `[z_min, z_max)`, the union of one or more consecutive
/// slices that all had the same cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer index (0 = bottom sheet).
    pub index: usize,

    /// Lower bound in mm (inclusive).
    pub z_min: f64,

    /// Upper bound in mm (exclusive).
    pub z_max: f64,

    /// Number of slices merged into this layer.
    pub slice_count: usize,

    /// Placements cut out of this sheet, in stacking order.
    pub cross_section: CrossSection,
}

impl Layer {
    /// Start a layer from a single slice.
    #[must_use]
    pub fn from_slice(index: usize, slice: Slice) -> Self {
        Self {
            index,
            z_min: slice.z_min,
            z_max: slice.z_max,
            slice_count: 1,
            cross_section: slice.cross_section,
        }
    }

    /// Thickness of the sheet in mm.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Check if the layer holds no placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cross_section.is_empty()
    }

    /// Get the number of placements.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.cross_section.len()
    }

    /// Check if a height falls inside `[z_min, z_max)`.
    #[must_use]
    pub fn contains_height(&self, z: f64) -> bool {
        z >= self.z_min && z < self.z_max
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "z[{}mm-{}mm] : [{}]",
            self.z_min, self.z_max, self.cross_section
        )
    }
}

/// Layer statistics summary.
#[derive(Debug, Clone, Default)]
pub struct LayerStats {
    /// Thinnest layer in mm.
    pub min_thickness: f64,
    /// Thickest layer in mm.
    pub max_thickness: f64,
    /// Average thickness in mm.
    pub avg_thickness: f64,
    /// Number of layers without any placement.
    pub empty_layers: usize,
    /// Most placements found on a single layer.
    pub max_placements: usize,
}
