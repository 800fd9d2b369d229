//! Core value types for sandwich fabrication.
//!
//! A sandwich is a laminated object built from flat sheets stacked along Z.
//! This crate provides the values callers describe it with:
//!
//! - [`Placement2D`] - An opaque 2D shape reference placed at a planar offset
//! - [`Extrusion`] - A placement held constant over a height interval
//! - [`CrossSection`] - The ordered placements present at one height
//!
//! The types carry no geometry logic. A shape is only ever compared by its
//! reference, never by its content.
//!
//! # Units
//!
//! All offsets and heights are `f64` millimeters.
//!
//! # Coordinate System
//!
//! - X: offset from the left edge of the sheet
//! - Y: offset from the top edge of the sheet (SVG convention)
//! - Z: stacking height, first sheet at the bottom
//!
//! # Example
//!
//! ```
//! use sandwich_types::{Extrusion, Placement2D};
//!
//! let frame = Placement2D::new("frame.svg", 10.0, 5.0);
//! let cut = Extrusion::new(frame.clone(), 0.0, 3.0);
//!
//! assert_eq!(cut.placement, frame);
//! assert!((cut.height() - 3.0).abs() < f64::EPSILON);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cross_section;
mod extrusion;
mod placement;

pub use cross_section::CrossSection;
pub use extrusion::Extrusion;
pub use placement::Placement2D;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector2;
