//! Error types for SVG export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while resolving shapes or writing layer files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A shape file could not be read.
    #[error("shape unavailable: {path}: {source}")]
    ResourceUnavailable {
        /// Path of the shape file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A shape file is not a usable SVG document.
    #[error("failed to parse {path}: {message}")]
    ParseFailure {
        /// Path of the shape file.
        path: PathBuf,
        /// Description of what was invalid.
        message: String,
    },

    /// An output file or directory could not be written.
    #[error("failed to write to {path}: {source}")]
    IoWrite {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Canvas dimensions are not usable.
    #[error("invalid canvas: {width} x {height} mm (both must be finite and > 0)")]
    InvalidCanvas {
        /// Requested width in mm.
        width: f64,
        /// Requested height in mm.
        height: f64,
    },

    /// Generating the XML document failed.
    #[error("failed to render SVG: {message}")]
    Render {
        /// Description of the failure.
        message: String,
    },
}

impl ExportError {
    /// Create a `ParseFailure` error for `path`.
    #[must_use]
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a `Render` error with the given message.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::parse_failure("gear.svg", "no root element");
        assert_eq!(err.to_string(), "failed to parse gear.svg: no root element");

        let err = ExportError::InvalidCanvas {
            width: 0.0,
            height: 10.0,
        };
        assert!(err.to_string().contains("0 x 10"));
    }
}
