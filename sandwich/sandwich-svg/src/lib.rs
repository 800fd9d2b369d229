//! SVG export for laminated sandwiches.
//!
//! Each layer becomes one cut sheet: an SVG document holding every shape of
//! the layer's cross-section at its placement offset. A stacked preview
//! (`design.svg`) shows all sheets skewed on top of each other.
//!
//! Shapes are looked up through a [`ShapeResolver`], so the layer model
//! never touches the filesystem. [`FsShapeResolver`] reads SVG files from
//! disk and is what [`make_sandwich`] uses.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sandwich_slice::{Extrusion, Placement2D, SliceParams};
//! use sandwich_svg::{make_sandwich, SvgExportParams};
//!
//! let base = Extrusion::new(Placement2D::new("shapes/base.svg", 0.0, 0.0), 0.0, 3.0);
//! let pin = Extrusion::new(Placement2D::new("shapes/pin.svg", 40.0, 40.0), 1.0, 2.0);
//!
//! let output = make_sandwich(
//!     Path::new("out"),
//!     &[base, pin],
//!     &SliceParams::default(),
//!     &SvgExportParams::default().with_canvas(100.0, 100.0),
//! )?;
//! println!("{}", output.stack);
//! # Ok::<(), sandwich_svg::SandwichError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod composite;
mod error;
mod layer_file;
mod params;
mod resolve;
mod sandwich;

pub use composite::{render_composite_svg, write_composite};
pub use error::{ExportError, ExportResult};
pub use layer_file::{LayerSink, SvgDirectorySink, layer_file_name, render_layer_svg};
pub use params::{CompositeParams, SvgExportParams, SvgStyle};
pub use resolve::{CachedResolver, FsShapeResolver, ShapeResolver, inner_markup};
pub use sandwich::{
    SandwichError, SandwichOutput, SandwichResult, make_sandwich, make_sandwich_with,
};
