//! Parsing of `svg_path,x,y,z_min,z_max` cut arguments.

use std::path::PathBuf;
use std::str::FromStr;

use sandwich_types::{Extrusion, Placement2D};
use thiserror::Error;

/// Why a cut argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutParseError {
    /// Not exactly five comma-separated fields.
    #[error("expected svg_path,x,y,z_min,z_max but got {found} field(s) in '{input}'")]
    FieldCount {
        /// The rejected argument.
        input: String,
        /// Number of fields found.
        found: usize,
    },

    /// The shape path is blank.
    #[error("empty svg path in '{input}'")]
    EmptyPath {
        /// The rejected argument.
        input: String,
    },

    /// A numeric field does not parse.
    #[error("invalid {field} '{value}' in '{input}'")]
    Number {
        /// Name of the field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
        /// The rejected argument.
        input: String,
    },
}

/// One cut given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CutArg {
    pub shape: PathBuf,
    pub x: f64,
    pub y: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl FromStr for CutArg {
    type Err = CutParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        let [shape, x, y, z_min, z_max] = fields[..] else {
            return Err(CutParseError::FieldCount {
                input: input.to_string(),
                found: fields.len(),
            });
        };

        if shape.is_empty() {
            return Err(CutParseError::EmptyPath {
                input: input.to_string(),
            });
        }

        let number = |field: &'static str, value: &str| {
            value.parse::<f64>().map_err(|_| CutParseError::Number {
                field,
                value: value.to_string(),
                input: input.to_string(),
            })
        };

        Ok(Self {
            shape: PathBuf::from(shape),
            x: number("x", x)?,
            y: number("y", y)?,
            z_min: number("z_min", z_min)?,
            z_max: number("z_max", z_max)?,
        })
    }
}

impl From<CutArg> for Extrusion {
    fn from(cut: CutArg) -> Self {
        Self::new(Placement2D::new(cut.shape, cut.x, cut.y), cut.z_min, cut.z_max)
    }
}
