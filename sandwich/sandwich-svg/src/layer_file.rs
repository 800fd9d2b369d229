//! Per-layer SVG documents and the directory sink that writes them.

use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sandwich_slice::Layer;
use tracing::{debug, info, warn};

use crate::error::{ExportError, ExportResult};
use crate::params::SvgExportParams;
use crate::resolve::{CachedResolver, ShapeResolver};

/// SVG namespace URI.
pub(crate) const NAMESPACE_SVG: &str = "http://www.w3.org/2000/svg";

/// Destination for an ordered stack of layers.
pub trait LayerSink {
    /// Persist every layer, bottom first, returning the written artifacts.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if a shape cannot be resolved or an output
    /// cannot be written.
    fn write_layers(&mut self, layers: &[Layer]) -> ExportResult<Vec<PathBuf>>;
}

/// File name of a layer's SVG: `design-<z_min>-<z_max>.svg`, heights with one
/// decimal.
#[must_use]
pub fn layer_file_name(layer: &Layer) -> String {
    format!("design-{:.1}-{:.1}.svg", layer.z_min, layer.z_max)
}

/// Render one layer as a standalone SVG document.
///
/// Every placement's shape content is wrapped in a group translated to the
/// placement's offset, inside one group carrying the cut line style. An
/// empty layer renders as an empty sheet.
///
/// # Errors
///
/// Returns an error if the canvas is invalid or a shape cannot be resolved.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use sandwich_slice::{build_layers, Extrusion, Placement2D, SliceParams};
/// use sandwich_svg::{render_layer_svg, ExportResult, ShapeResolver, SvgExportParams};
///
/// struct Square;
/// impl ShapeResolver for Square {
///     fn resolve(&self, _: &Path) -> ExportResult<String> {
///         Ok("<rect width=\"10\" height=\"10\"/>".to_string())
///     }
/// }
///
/// let cut = Extrusion::new(Placement2D::new("square.svg", 5.0, 5.0), 0.0, 1.0);
/// let layers = build_layers(&[cut], &SliceParams::default()).unwrap_or_default();
/// let svg = render_layer_svg(&layers[0], &SvgExportParams::default(), &Square)?;
///
/// assert!(svg.contains("translate(5.00,5.00)"));
/// assert!(svg.contains("<rect"));
/// # Ok::<(), sandwich_svg::ExportError>(())
/// ```
pub fn render_layer_svg(
    layer: &Layer,
    params: &SvgExportParams,
    resolver: &impl ShapeResolver,
) -> ExportResult<String> {
    params.validate()?;

    let mut buffer = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| ExportError::render(format!("failed to write XML declaration: {e}")))?;

    let width = format!("{}mm", params.canvas_width);
    let height = format!("{}mm", params.canvas_height);
    let view_box = format!(
        "{} {} {} {}",
        params.origin_x, params.origin_y, params.canvas_width, params.canvas_height
    );
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", NAMESPACE_SVG));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer
        .write_event(Event::Start(svg))
        .map_err(|e| ExportError::render(format!("failed to write svg element: {e}")))?;

    let id = format!("layer-{}", layer.index);
    let mut group = BytesStart::new("g");
    group.push_attribute(("id", id.as_str()));
    group.extend_attributes(params.style.attributes());
    writer
        .write_event(Event::Start(group))
        .map_err(|e| ExportError::render(format!("failed to write layer group: {e}")))?;

    for placement in &layer.cross_section {
        let content = resolver.resolve(placement.shape())?;
        let transform = format!("translate({:.2},{:.2})", placement.x(), placement.y());
        write_embedded(&mut writer, &transform, &content)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("g")))
        .map_err(|e| ExportError::render(format!("failed to close layer group: {e}")))?;
    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(|e| ExportError::render(format!("failed to close svg element: {e}")))?;

    String::from_utf8(buffer)
        .map_err(|e| ExportError::render(format!("invalid UTF-8 in generated SVG: {e}")))
}

/// Write `<g transform="...">content</g>` with `content` copied verbatim.
pub(crate) fn write_embedded<W: std::io::Write>(
    writer: &mut Writer<W>,
    transform: &str,
    content: &str,
) -> ExportResult<()> {
    let mut group = BytesStart::new("g");
    group.push_attribute(("transform", transform));
    writer
        .write_event(Event::Start(group))
        .map_err(|e| ExportError::render(format!("failed to write shape group: {e}")))?;
    writer
        .write_event(Event::Text(BytesText::from_escaped(content)))
        .map_err(|e| ExportError::render(format!("failed to embed shape: {e}")))?;
    writer
        .write_event(Event::End(BytesEnd::new("g")))
        .map_err(|e| ExportError::render(format!("failed to close shape group: {e}")))?;
    Ok(())
}

/// Writes one SVG file per layer into a directory.
#[derive(Debug)]
pub struct SvgDirectorySink<R> {
    out_dir: PathBuf,
    params: SvgExportParams,
    resolver: CachedResolver<R>,
}

impl<R: ShapeResolver> SvgDirectorySink<R> {
    /// Write into `out_dir`, resolving shapes with `resolver`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, params: SvgExportParams, resolver: R) -> Self {
        Self {
            out_dir: out_dir.into(),
            params,
            resolver: CachedResolver::new(resolver),
        }
    }

    /// The output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The export parameters.
    #[must_use]
    pub fn params(&self) -> &SvgExportParams {
        &self.params
    }
}

impl<R: ShapeResolver> LayerSink for SvgDirectorySink<R> {
    fn write_layers(&mut self, layers: &[Layer]) -> ExportResult<Vec<PathBuf>> {
        self.params.validate()?;
        fs::create_dir_all(&self.out_dir).map_err(|source| ExportError::IoWrite {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut used_names = HashSet::new();
        let mut written = Vec::with_capacity(layers.len());

        for layer in layers {
            if layer.is_empty() && self.params.skip_empty_layers {
                debug!(index = layer.index, "Skipping empty layer");
                continue;
            }

            let mut name = layer_file_name(layer);
            if used_names.contains(&name) {
                // Layers thinner than the name's precision collide
                let stem = name.trim_end_matches(".svg").to_string();
                let mut suffix = layer.index;
                name = format!("{stem}-{suffix}.svg");
                while used_names.contains(&name) {
                    suffix += 1;
                    name = format!("{stem}-{suffix}.svg");
                }
                warn!(index = layer.index, file = %name, "Layer file name collision");
            }
            used_names.insert(name.clone());

            let svg = render_layer_svg(layer, &self.params, &self.resolver)?;
            let path = self.out_dir.join(&name);
            fs::write(&path, svg).map_err(|source| ExportError::IoWrite {
                path: path.clone(),
                source,
            })?;

            debug!(
                index = layer.index,
                placements = layer.placement_count(),
                path = %path.display(),
                "Wrote layer"
            );
            written.push(path);
        }

        info!(
            files = written.len(),
            shapes = self.resolver.cached_count(),
            out_dir = %self.out_dir.display(),
            "Layer export complete"
        );

        Ok(written)
    }
}
