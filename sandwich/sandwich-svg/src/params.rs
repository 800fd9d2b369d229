//! Export parameters.

use crate::error::{ExportError, ExportResult};

/// Presentation attributes applied to a group of cut lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgStyle {
    /// Stroke color (any SVG color).
    pub stroke: String,
    /// Stroke width, with unit.
    pub stroke_width: String,
    /// Fill (usually `none` for laser cut lines).
    pub fill: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "rgb(255,0,0)".to_string(),
            stroke_width: "0.2pt".to_string(),
            fill: "none".to_string(),
        }
    }
}

impl SvgStyle {
    /// Set the stroke color.
    #[must_use]
    pub fn with_stroke(mut self, stroke: &str) -> Self {
        self.stroke = stroke.to_string();
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: &str) -> Self {
        self.stroke_width = width.to_string();
        self
    }

    /// Attributes as name/value pairs.
    #[must_use]
    pub fn attributes(&self) -> [(&str, &str); 3] {
        [
            ("stroke", self.stroke.as_str()),
            ("stroke-width", self.stroke_width.as_str()),
            ("fill", self.fill.as_str()),
        ]
    }
}

/// Layout of the stacked preview drawing.
#[derive(Debug, Clone)]
pub struct CompositeParams {
    /// Left margin of every sheet in the preview.
    pub left: f64,
    /// Top margin of the preview.
    pub top: f64,
    /// Vertical distance between stacked sheets.
    pub spacing: f64,
    /// Horizontal skew giving the stack its perspective, in degrees.
    pub skew_x_degrees: f64,
    /// Style of the preview lines.
    pub style: SvgStyle,
    /// File name of the preview inside the output directory.
    pub file_name: String,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            left: 50.0,
            top: 50.0,
            spacing: 100.0,
            skew_x_degrees: 50.0,
            style: SvgStyle::default().with_stroke_width("1pt"),
            file_name: "design.svg".to_string(),
        }
    }
}

/// Parameters for SVG export.
#[derive(Debug, Clone)]
pub struct SvgExportParams {
    /// Sheet width in mm.
    pub canvas_width: f64,
    /// Sheet height in mm.
    pub canvas_height: f64,
    /// X of the top-left corner of the view box.
    pub origin_x: f64,
    /// Y of the top-left corner of the view box.
    pub origin_y: f64,
    /// Style of the cut lines in each layer file.
    pub style: SvgStyle,
    /// Whether layers without placements are left out.
    pub skip_empty_layers: bool,
    /// Layout of the stacked preview.
    pub composite: CompositeParams,
}

impl Default for SvgExportParams {
    fn default() -> Self {
        Self {
            canvas_width: 200.0,
            canvas_height: 200.0,
            origin_x: 0.0,
            origin_y: 0.0,
            style: SvgStyle::default(),
            skip_empty_layers: false,
            composite: CompositeParams::default(),
        }
    }
}

impl SvgExportParams {
    /// Set the sheet size in mm.
    #[must_use]
    pub const fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the view box origin.
    #[must_use]
    pub const fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Set the cut line style.
    #[must_use]
    pub fn with_style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    /// Leave empty layers out of the export.
    #[must_use]
    pub const fn with_skip_empty_layers(mut self, skip: bool) -> Self {
        self.skip_empty_layers = skip;
        self
    }

    /// Check the canvas can be drawn on.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidCanvas`] unless both dimensions are
    /// finite and positive.
    pub fn validate(&self) -> ExportResult<()> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.canvas_width) && usable(self.canvas_height) {
            Ok(())
        } else {
            Err(ExportError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            })
        }
    }
}
