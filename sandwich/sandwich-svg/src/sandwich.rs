//! End-to-end export: extrusions in, layer files and preview out.

use std::path::{Path, PathBuf};

use sandwich_slice::{LayerStack, SliceError, SliceParams, build_stack};
use sandwich_types::Extrusion;
use thiserror::Error;
use tracing::{info, warn};

use crate::composite::write_composite;
use crate::error::ExportError;
use crate::layer_file::{LayerSink, SvgDirectorySink};
use crate::params::SvgExportParams;
use crate::resolve::{FsShapeResolver, ShapeResolver};

/// Result type for [`make_sandwich`].
pub type SandwichResult<T> = Result<T, SandwichError>;

/// Failure of a full sandwich run.
#[derive(Debug, Error)]
pub enum SandwichError {
    /// The layers could not be computed.
    #[error(transparent)]
    Build(#[from] SliceError),

    /// The layers could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Everything a sandwich run produced.
#[derive(Debug)]
pub struct SandwichOutput {
    /// The merged layers.
    pub stack: LayerStack,
    /// One SVG per exported layer, bottom first.
    pub layer_files: Vec<PathBuf>,
    /// The stacked preview, when at least one layer file was written.
    pub composite: Option<PathBuf>,
}

/// Build the layers for `extrusions` and write them to `out_dir`, reading
/// shapes from disk.
///
/// # Errors
///
/// Returns [`SandwichError::Build`] for invalid parameters or extrusions
/// (nothing is written) and [`SandwichError::Export`] if a shape cannot be
/// read or an output cannot be written.
pub fn make_sandwich(
    out_dir: &Path,
    extrusions: &[Extrusion],
    slice_params: &SliceParams,
    export_params: &SvgExportParams,
) -> SandwichResult<SandwichOutput> {
    make_sandwich_with(
        out_dir,
        extrusions,
        slice_params,
        export_params,
        FsShapeResolver::new(),
    )
}

/// Like [`make_sandwich`], resolving shapes with `resolver`.
///
/// The preview always reads the written layer files back from disk.
///
/// # Errors
///
/// Same as [`make_sandwich`].
pub fn make_sandwich_with<R: ShapeResolver>(
    out_dir: &Path,
    extrusions: &[Extrusion],
    slice_params: &SliceParams,
    export_params: &SvgExportParams,
    resolver: R,
) -> SandwichResult<SandwichOutput> {
    export_params.validate()?;
    let stack = build_stack(extrusions, slice_params)?;
    if stack.is_empty() {
        warn!("No layers to export");
    }

    let mut sink = SvgDirectorySink::new(out_dir, export_params.clone(), resolver);
    let layer_files = sink.write_layers(&stack.layers)?;

    let composite = if layer_files.is_empty() {
        None
    } else {
        Some(write_composite(
            sink.out_dir(),
            &layer_files,
            sink.params(),
            &FsShapeResolver::new(),
        )?)
    };

    info!(
        layers = stack.layer_count(),
        files = layer_files.len(),
        out_dir = %out_dir.display(),
        "Sandwich complete"
    );

    Ok(SandwichOutput {
        stack,
        layer_files,
        composite,
    })
}
