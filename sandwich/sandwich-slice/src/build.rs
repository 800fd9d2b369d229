//! Slice-then-merge entry points.

use sandwich_types::Extrusion;
use tracing::info;

use crate::error::SliceResult;
use crate::layer::Layer;
use crate::merge::merge_slices;
use crate::params::SliceParams;
use crate::result::LayerStack;
use crate::slicer::slice_extrusions;

/// Turn extrusions into the minimal ordered list of layers.
///
/// Validates every input first, then slices the Z axis and merges runs of
/// identical consecutive slices. The result is deterministic: the same input
/// always yields the same layers in the same order. Empty input yields no
/// layers.
///
/// # Errors
///
/// Returns [`SliceError::InvalidConfiguration`](crate::SliceError::InvalidConfiguration)
/// for bad parameters and
/// [`SliceError::InvalidExtrusion`](crate::SliceError::InvalidExtrusion) or
/// [`SliceError::InvalidPlacement`](crate::SliceError::InvalidPlacement) for a
/// malformed extrusion. Nothing is produced on error.
///
/// # Example
///
/// ```
/// use sandwich_slice::{build_layers, SliceParams};
/// use sandwich_types::{Extrusion, Placement2D};
///
/// let p1 = Placement2D::new("p1.svg", 0.0, 0.0);
/// let p2 = Placement2D::new("p2.svg", 0.0, 0.0);
/// let layers = build_layers(
///     &[Extrusion::new(p1, 0.0, 1.0), Extrusion::new(p2, 1.0, 2.0)],
///     &SliceParams::whole_millimeter(),
/// )?;
///
/// assert_eq!(layers.len(), 2);
/// # Ok::<(), sandwich_slice::SliceError>(())
/// ```
pub fn build_layers(extrusions: &[Extrusion], params: &SliceParams) -> SliceResult<Vec<Layer>> {
    Ok(build_stack(extrusions, params)?.layers)
}

/// Like [`build_layers`], returning the layers with run metadata.
///
/// # Errors
///
/// Same as [`build_layers`].
pub fn build_stack(extrusions: &[Extrusion], params: &SliceParams) -> SliceResult<LayerStack> {
    let slices = slice_extrusions(extrusions, params)?;
    if slices.is_empty() {
        return Ok(LayerStack::empty(*params));
    }

    let slice_count = slices.len();
    let layers = merge_slices(slices);
    let total_height = match (layers.first(), layers.last()) {
        (Some(bottom), Some(top)) => top.z_max - bottom.z_min,
        _ => 0.0,
    };

    info!(
        slices = slice_count,
        layers = layers.len(),
        total_height = format!("{:.2}", total_height),
        "Layer merging complete"
    );

    Ok(LayerStack {
        layers,
        total_height,
        slice_count,
        params: *params,
    })
}
