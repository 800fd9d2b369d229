//! Z-axis quantization.
//!
//! Cuts the overall height range of a set of extrusions into fixed-width
//! slices and records, for each slice, which placements are present in it.

use sandwich_types::{CrossSection, Extrusion};
use tracing::{debug, info, warn};

use crate::error::{SliceError, SliceResult};
use crate::params::SliceParams;

/// One quantization band of the Z axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Slice index (0 = bottom).
    pub index: usize,

    /// Lower bound in mm (inclusive).
    pub z_min: f64,

    /// Upper bound in mm (exclusive).
    pub z_max: f64,

    /// Placements present in this band, in input order.
    pub cross_section: CrossSection,
}

impl Slice {
    /// Thickness of the slice in mm.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Check if no placement is present in the slice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cross_section.is_empty()
    }
}

/// Slice a set of extrusions into fixed-width bands.
///
/// The range `[min z_min, max z_max)` is cut at `z_min`, `z_min + step`,
/// `z_min + 2·step`, ... with boundaries accumulated by repeated addition.
/// The last slice is clamped to the top of the range. Every extrusion is
/// added to every slice it overlaps by more than `params.epsilon`; a
/// zero-height extrusion lands in the slice containing its height.
///
/// Slices without any extrusion are still returned, with an empty
/// cross-section.
///
/// # Errors
///
/// Returns [`SliceError::InvalidConfiguration`] for bad parameters and
/// [`SliceError::InvalidExtrusion`] or [`SliceError::InvalidPlacement`] for
/// the first malformed extrusion. No slicing happens if any check fails.
///
/// # Example
///
/// ```
/// use sandwich_slice::{slice_extrusions, SliceParams};
/// use sandwich_types::{Extrusion, Placement2D};
///
/// let cut = Extrusion::new(Placement2D::new("a.svg", 0.0, 0.0), 0.0, 1.0);
/// let slices = slice_extrusions(&[cut], &SliceParams::default())?;
///
/// assert_eq!(slices.len(), 2);
/// assert!(slices.iter().all(|s| s.cross_section.len() == 1));
/// # Ok::<(), sandwich_slice::SliceError>(())
/// ```
pub fn slice_extrusions(extrusions: &[Extrusion], params: &SliceParams) -> SliceResult<Vec<Slice>> {
    params.validate()?;
    validate_extrusions(extrusions)?;

    let Some((min_z, max_z)) = find_z_bounds(extrusions) else {
        debug!("No extrusions to slice");
        return Ok(Vec::new());
    };

    let boundaries = slice_boundaries(min_z, max_z, params)?;
    if boundaries.is_empty() {
        warn!(
            z = min_z,
            extrusions = extrusions.len(),
            "Extrusions span no height; nothing to slice"
        );
        return Ok(Vec::new());
    }

    info!(
        extrusions = extrusions.len(),
        slices = boundaries.len(),
        step = params.step,
        "Slicing extrusions"
    );

    let mut slices: Vec<Slice> = boundaries
        .iter()
        .enumerate()
        .map(|(index, &z_min)| Slice {
            index,
            z_min,
            z_max: boundaries.get(index + 1).copied().unwrap_or(max_z),
            cross_section: CrossSection::new(),
        })
        .collect();

    for extrusion in extrusions {
        let covered = covered_slices(&slices, extrusion, params.epsilon);
        debug!(
            extrusion = %extrusion,
            first = covered.start,
            last = covered.end.saturating_sub(1),
            "Bucketing extrusion"
        );
        for slice in &mut slices[covered] {
            slice.cross_section.push(extrusion.placement.clone());
        }
    }

    Ok(slices)
}

/// Check every extrusion, reporting the first bad one.
///
/// # Errors
///
/// Returns [`SliceError::InvalidExtrusion`] if an extrusion has a non-finite
/// bound or `z_min > z_max`, and [`SliceError::InvalidPlacement`] if its
/// placement offset is not finite.
pub fn validate_extrusions(extrusions: &[Extrusion]) -> SliceResult<()> {
    for (index, e) in extrusions.iter().enumerate() {
        if !e.is_valid() {
            return Err(SliceError::InvalidExtrusion {
                index,
                z_min: e.z_min,
                z_max: e.z_max,
            });
        }
        if !e.placement.is_finite() {
            return Err(SliceError::InvalidPlacement {
                index,
                x: e.placement.x(),
                y: e.placement.y(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn find_z_bounds(extrusions: &[Extrusion]) -> Option<(f64, f64)> {
    if extrusions.is_empty() {
        return None;
    }

    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;

    for e in extrusions {
        min_z = min_z.min(e.z_min);
        max_z = max_z.max(e.z_max);
    }

    Some((min_z, max_z))
}

/// Lower bounds of every slice, in ascending order.
fn slice_boundaries(min_z: f64, max_z: f64, params: &SliceParams) -> SliceResult<Vec<f64>> {
    let mut boundaries = Vec::new();
    let mut z = min_z;

    while z < max_z - params.epsilon {
        boundaries.push(z);
        let next = z + params.step;
        if next <= z {
            return Err(SliceError::invalid_configuration(
                "step",
                params.step,
                "below floating-point resolution at this height",
            ));
        }
        z = next;
    }

    Ok(boundaries)
}

/// Index range of the slices an extrusion overlaps.
///
/// Slices are contiguous and ascending, so both ends are found by binary
/// search. An extrusion too thin to overlap any slice by more than `epsilon`
/// is assigned the single slice containing its lower edge.
fn covered_slices(slices: &[Slice], extrusion: &Extrusion, epsilon: f64) -> std::ops::Range<usize> {
    let first = slices.partition_point(|s| s.z_max - epsilon <= extrusion.z_min);
    let end = slices.partition_point(|s| s.z_min + epsilon < extrusion.z_max);

    if first < end {
        first..end
    } else {
        let only = first.min(slices.len().saturating_sub(1));
        only..only + 1
    }
}
