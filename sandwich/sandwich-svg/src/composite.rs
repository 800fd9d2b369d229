//! Stacked preview of all layer files.
//!
//! The preview draws every layer sheet skewed, one above the other, so the
//! sandwich can be checked at a glance. The first (lowest) layer ends up at
//! the bottom of the drawing.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::layer_file::{NAMESPACE_SVG, write_embedded};
use crate::params::SvgExportParams;
use crate::resolve::ShapeResolver;

/// Render the stacked preview of the given layer files, bottom layer first.
///
/// Each file's content is obtained through `resolver`, so the files must be
/// readable SVG documents.
///
/// # Errors
///
/// Returns an error if a layer file cannot be resolved.
#[allow(clippy::cast_precision_loss)]
pub fn render_composite_svg(
    layer_files: &[PathBuf],
    params: &SvgExportParams,
    resolver: &impl ShapeResolver,
) -> ExportResult<String> {
    params.validate()?;
    let layout = &params.composite;
    let count = layer_files.len() as f64;

    let skew = layout.skew_x_degrees.to_radians().tan().abs();
    let width = 2.0f64.mul_add(
        layout.left,
        params.canvas_height.mul_add(skew, params.canvas_width),
    );
    let height = 2.0f64.mul_add(
        layout.top,
        count.mul_add(layout.spacing, params.canvas_height),
    );

    let mut buffer = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| ExportError::render(format!("failed to write XML declaration: {e}")))?;

    let size_w = format!("{width:.2}");
    let size_h = format!("{height:.2}");
    let view_box = format!("0 0 {width:.2} {height:.2}");
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", NAMESPACE_SVG));
    svg.push_attribute(("width", size_w.as_str()));
    svg.push_attribute(("height", size_h.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer
        .write_event(Event::Start(svg))
        .map_err(|e| ExportError::render(format!("failed to write svg element: {e}")))?;

    let mut group = BytesStart::new("g");
    group.extend_attributes(layout.style.attributes());
    writer
        .write_event(Event::Start(group))
        .map_err(|e| ExportError::render(format!("failed to write preview group: {e}")))?;

    for (i, file) in layer_files.iter().enumerate() {
        let content = resolver.resolve(file)?;
        let y = (count - i as f64).mul_add(layout.spacing, layout.top);
        let transform = format!(
            "translate({:.2},{:.2}) skewX({})",
            layout.left, y, layout.skew_x_degrees
        );
        write_embedded(&mut writer, &transform, &content)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("g")))
        .map_err(|e| ExportError::render(format!("failed to close preview group: {e}")))?;
    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(|e| ExportError::render(format!("failed to close svg element: {e}")))?;

    String::from_utf8(buffer)
        .map_err(|e| ExportError::render(format!("invalid UTF-8 in generated SVG: {e}")))
}

/// Render the stacked preview and write it into `out_dir`.
///
/// # Errors
///
/// Returns an error if a layer file cannot be resolved or the preview cannot
/// be written.
pub fn write_composite(
    out_dir: &Path,
    layer_files: &[PathBuf],
    params: &SvgExportParams,
    resolver: &impl ShapeResolver,
) -> ExportResult<PathBuf> {
    let svg = render_composite_svg(layer_files, params, resolver)?;
    let path = out_dir.join(&params.composite.file_name);
    fs::write(&path, svg).map_err(|source| ExportError::IoWrite {
        path: path.clone(),
        source,
    })?;

    info!(
        layers = layer_files.len(),
        path = %path.display(),
        "Wrote stacked preview"
    );
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    struct NamedSheets;

    impl ShapeResolver for NamedSheets {
        fn resolve(&self, shape: &Path) -> ExportResult<String> {
            Ok(format!("<text>{}</text>", shape.display()))
        }
    }

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_bottom_layer_drawn_lowest() {
        let svg = render_composite_svg(
            &files(&["first.svg", "second.svg", "third.svg"]),
            &SvgExportParams::default(),
            &NamedSheets,
        )
        .unwrap();

        // first: 50 + 3 * 100, last: 50 + 1 * 100
        assert!(svg.contains(
            r#"<g transform="translate(50.00,350.00) skewX(50)"><text>first.svg</text></g>"#
        ));
        assert!(svg.contains(
            r#"<g transform="translate(50.00,250.00) skewX(50)"><text>second.svg</text></g>"#
        ));
        assert!(svg.contains(
            r#"<g transform="translate(50.00,150.00) skewX(50)"><text>third.svg</text></g>"#
        ));
        assert!(svg.contains(r#"stroke-width="1pt""#));
    }

    #[test]
    fn test_size_covers_stack() {
        let params = SvgExportParams::default().with_canvas(100.0, 0.5);
        let svg = render_composite_svg(&files(&["a.svg"]), &params, &NamedSheets).unwrap();
        // 2 * 50 + 1 * 100 + 0.5
        assert!(svg.contains(r#"height="200.50""#));
    }

    #[test]
    fn test_empty_stack_renders() {
        let svg = render_composite_svg(&[], &SvgExportParams::default(), &NamedSheets).unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("transform"));
    }

    #[test]
    fn test_write_composite() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_composite(
            dir.path(),
            &files(&["a.svg"]),
            &SvgExportParams::default(),
            &NamedSheets,
        )
        .unwrap();

        assert_eq!(path, dir.path().join("design.svg"));
        assert!(fs::read_to_string(path).unwrap().contains("<text>a.svg</text>"));
    }
}
