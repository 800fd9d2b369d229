//! Shape resolution: turning a placement's shape reference into SVG markup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::error::{ExportError, ExportResult};

/// Source of the vector content behind a shape reference.
pub trait ShapeResolver {
    /// Return the markup inside the root element of the shape's document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ResourceUnavailable`] if the shape cannot be
    /// read and [`ExportError::ParseFailure`] if it is not well-formed XML.
    fn resolve(&self, shape: &Path) -> ExportResult<String>;
}

/// Resolves shapes by reading SVG files from disk.
///
/// Relative shape paths are looked up under `base_dir` when one is set,
/// otherwise under the working directory.
#[derive(Debug, Clone, Default)]
pub struct FsShapeResolver {
    base_dir: Option<PathBuf>,
}

impl FsShapeResolver {
    /// Resolve relative to the working directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolve relative shape paths under `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Where the shape would be read from.
    #[must_use]
    pub fn locate(&self, shape: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(shape),
            None => shape.to_path_buf(),
        }
    }
}

impl ShapeResolver for FsShapeResolver {
    fn resolve(&self, shape: &Path) -> ExportResult<String> {
        let path = self.locate(shape);
        let content =
            fs::read_to_string(&path).map_err(|source| ExportError::ResourceUnavailable {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = content.len(), "Read shape");
        inner_markup(&content).map_err(|message| ExportError::parse_failure(path, message))
    }
}

/// Memoizes another resolver so each shape is read once.
#[derive(Debug)]
pub struct CachedResolver<R> {
    inner: R,
    cache: RefCell<HashMap<PathBuf, String>>,
}

impl<R: ShapeResolver> CachedResolver<R> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct shapes resolved so far.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<R: ShapeResolver> ShapeResolver for CachedResolver<R> {
    fn resolve(&self, shape: &Path) -> ExportResult<String> {
        if let Some(hit) = self.cache.borrow().get(shape) {
            return Ok(hit.clone());
        }
        let content = self.inner.resolve(shape)?;
        self.cache
            .borrow_mut()
            .insert(shape.to_path_buf(), content.clone());
        Ok(content)
    }
}

/// Extract the raw markup between the root element's start and end tags.
///
/// Declarations, comments and doctypes before the root are skipped. A
/// self-closing root yields an empty string.
///
/// # Errors
///
/// Returns a description of the problem if the document has no root element
/// or is not well-formed up to the end of the root.
pub fn inner_markup(content: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(content);
    let mut depth = 0_usize;
    let mut inner_start = None;

    loop {
        let before = offset(reader.buffer_position())?;
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                if inner_start.is_none() {
                    inner_start = Some(offset(reader.buffer_position())?);
                }
                depth += 1;
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let start = inner_start.ok_or("end tag before root element")?;
                    return content
                        .get(start..before)
                        .map(str::to_string)
                        .ok_or_else(|| "root element content is not valid UTF-8".to_string());
                }
            }
            Ok(Event::Empty(_)) if inner_start.is_none() => return Ok(String::new()),
            Ok(Event::Eof) => {
                return Err(if inner_start.is_none() {
                    "no root element".to_string()
                } else {
                    "unexpected end of document inside root element".to_string()
                });
            }
            Err(e) => {
                return Err(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                ));
            }
            Ok(_) => {}
        }
    }
}

fn offset<P>(position: P) -> Result<usize, String>
where
    usize: TryFrom<P>,
{
    usize::try_from(position).map_err(|_| "document too large".to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_inner_markup() {
        let doc = r#"<?xml version="1.0"?>
<!-- exported -->
<svg xmlns="http://www.w3.org/2000/svg" width="10mm"><circle r="5"/><g><path d="M0 0"/></g></svg>"#;
        assert_eq!(
            inner_markup(doc).unwrap(),
            r#"<circle r="5"/><g><path d="M0 0"/></g>"#
        );
    }

    #[test]
    fn test_inner_markup_keeps_whitespace_and_text() {
        let doc = "<svg>\n  <text>A &amp; B</text>\n</svg>";
        assert_eq!(inner_markup(doc).unwrap(), "\n  <text>A &amp; B</text>\n");
    }

    #[test]
    fn test_inner_markup_self_closing_root() {
        assert_eq!(inner_markup("<svg/>").unwrap(), "");
    }

    #[test]
    fn test_inner_markup_ignores_trailing_content() {
        assert_eq!(inner_markup("<svg><a/></svg>\n<!-- end -->").unwrap(), "<a/>");
    }

    #[test]
    fn test_inner_markup_errors() {
        assert!(inner_markup("").is_err());
        assert!(inner_markup("just text").is_err());
        assert!(inner_markup("<svg><g></svg>").is_err());
        assert!(inner_markup("<svg><g>").is_err());
    }

    #[test]
    fn test_fs_resolver_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dot.svg"), "<svg><circle r=\"1\"/></svg>").unwrap();

        let resolver = FsShapeResolver::new().with_base_dir(dir.path());
        assert_eq!(
            resolver.resolve(Path::new("dot.svg")).unwrap(),
            "<circle r=\"1\"/>"
        );
    }

    #[test]
    fn test_fs_resolver_missing_file() {
        let resolver = FsShapeResolver::new();
        let result = resolver.resolve(Path::new("nonexistent_shape_12345.svg"));
        assert!(matches!(
            result,
            Err(ExportError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_fs_resolver_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "<svg><g></svg>").unwrap();

        let result = FsShapeResolver::new().resolve(&path);
        match result {
            Err(ExportError::ParseFailure { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl ShapeResolver for CountingResolver {
        fn resolve(&self, shape: &Path) -> ExportResult<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("<use href=\"{}\"/>", shape.display()))
        }
    }

    #[test]
    fn test_cached_resolver() {
        let cached = CachedResolver::new(CountingResolver {
            calls: Cell::new(0),
        });

        for _ in 0..3 {
            assert_eq!(
                cached.resolve(Path::new("a.svg")).unwrap(),
                "<use href=\"a.svg\"/>"
            );
        }
        cached.resolve(Path::new("b.svg")).unwrap();

        assert_eq!(cached.inner.calls.get(), 2);
        assert_eq!(cached.cached_count(), 2);
    }
}
