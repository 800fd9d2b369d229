//! Consecutive-run merging of slices into layers.

use tracing::debug;

use crate::layer::Layer;
use crate::slicer::Slice;

/// Merge runs of consecutive slices with identical cross-sections.
///
/// Slices must be in ascending Z order, as produced by
/// [`slice_extrusions`](crate::slice_extrusions). Each run becomes one
/// [`Layer`] spanning the run's combined height. Only neighbours are merged:
/// two equal cross-sections separated by a different one stay two layers.
/// Empty cross-sections merge with each other like any other.
///
/// # Example
///
/// ```
/// use sandwich_slice::{merge_slices, slice_extrusions, SliceParams};
/// use sandwich_types::{Extrusion, Placement2D};
///
/// let cut = Extrusion::new(Placement2D::new("a.svg", 0.0, 0.0), 0.0, 2.0);
/// let slices = slice_extrusions(&[cut], &SliceParams::whole_millimeter())?;
/// let layers = merge_slices(slices);
///
/// assert_eq!(layers.len(), 1);
/// assert_eq!(layers[0].slice_count, 2);
/// # Ok::<(), sandwich_slice::SliceError>(())
/// ```
#[must_use]
pub fn merge_slices(slices: impl IntoIterator<Item = Slice>) -> Vec<Layer> {
    let mut layers = Vec::new();

    let open = slices
        .into_iter()
        .fold(None, |open: Option<Layer>, slice| match open {
            Some(mut layer) if layer.cross_section == slice.cross_section => {
                layer.z_max = slice.z_max;
                layer.slice_count += 1;
                Some(layer)
            }
            Some(layer) => {
                debug!(
                    index = layer.index,
                    z_min = layer.z_min,
                    z_max = layer.z_max,
                    slices = layer.slice_count,
                    "Closed layer"
                );
                layers.push(layer);
                Some(Layer::from_slice(layers.len(), slice))
            }
            None => Some(Layer::from_slice(0, slice)),
        });

    layers.extend(open);
    layers
}
