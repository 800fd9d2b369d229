//! Z-axis slicing and layer merging for laminated sandwiches.
//!
//! This crate turns height-ranged 2D cuts ([`Extrusion`]s) into the minimal
//! ordered stack of flat sheets needed to fabricate them.
//!
//! # Pipeline
//!
//! - **Slicing**: quantize the Z range into fixed-width bands and record the
//!   placements present in each ([`slice_extrusions`])
//! - **Merging**: collapse runs of consecutive bands with identical
//!   cross-sections into single layers ([`merge_slices`])
//! - **Both at once**: [`build_layers`] / [`build_stack`]
//!
//! The whole computation is pure and synchronous. It never opens the shape
//! files the placements refer to.
//!
//! # Example
//!
//! ```
//! use sandwich_slice::{build_stack, SliceParams};
//! use sandwich_types::{Extrusion, Placement2D};
//!
//! let ring = Placement2D::new("ring.svg", 0.0, 0.0);
//! let stack = build_stack(
//!     &[
//!         Extrusion::new(ring.clone(), 0.0, 1.0),
//!         Extrusion::new(ring, 2.0, 3.0),
//!     ],
//!     &SliceParams::whole_millimeter(),
//! )?;
//!
//! // ring, gap, ring: equal but not adjacent, so three layers
//! assert_eq!(stack.layer_count(), 3);
//! println!("{stack}");
//! # Ok::<(), sandwich_slice::SliceError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod build;
mod error;
mod layer;
mod merge;
mod params;
mod result;
mod slicer;

pub use build::{build_layers, build_stack};
pub use error::{SliceError, SliceResult};
pub use layer::{Layer, LayerStats};
pub use merge::merge_slices;
pub use params::SliceParams;
pub use result::LayerStack;
pub use slicer::{Slice, slice_extrusions, validate_extrusions};

// Re-export model types for convenience
pub use sandwich_types::{CrossSection, Extrusion, Placement2D};
