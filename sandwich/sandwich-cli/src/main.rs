//! Sandwich: laser-cut layer sheets from height-ranged cuts.
//!
//! Every cut is an SVG shape placed at `(x, y)` and present from `z_min` to
//! `z_max`. The tool slices the heights, merges consecutive slices that cut
//! the same shapes, and writes one SVG sheet per layer plus a stacked preview.
//!
//! # Usage
//!
//! - `sandwich out 200 200 base.svg,0,0,0,3 pin.svg,40,40,1,2`
//! - `sandwich out 200 200 --cuts-file cuts.json --step 1`
//! - `sandwich out 200 200 base.svg,0,0,0,3 --dry-run`

mod cut;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::LevelFilter;
use sandwich_slice::{SliceParams, build_stack};
use sandwich_svg::{SvgExportParams, make_sandwich};
use sandwich_types::Extrusion;

use crate::cut::CutArg;

/// Turn a list of cuts into the sheets of a laminated sandwich
#[derive(Parser, Debug)]
#[command(name = "sandwich")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory the layer sheets are written to
    #[arg(value_name = "OUT")]
    out_dir: PathBuf,

    /// Sheet width in mm
    #[arg(value_name = "SIZE_X")]
    size_x: f64,

    /// Sheet height in mm
    #[arg(value_name = "SIZE_Y")]
    size_y: f64,

    /// Cuts as svg_path,x,y,z_min,z_max
    #[arg(value_name = "CUT")]
    cuts: Vec<CutArg>,

    /// JSON array of extrusions, appended after the positional cuts
    #[arg(long, value_name = "JSON")]
    cuts_file: Option<PathBuf>,

    /// Slice height in mm
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// X of the sheet's top-left corner
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    origin_x: f64,

    /// Y of the sheet's top-left corner
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    origin_y: f64,

    /// Don't write sheets for layers without cuts
    #[arg(long)]
    skip_empty: bool,

    /// Print the layers without writing anything
    #[arg(long)]
    dry_run: bool,

    /// More output (repeat for debug and trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn slice_params(&self) -> SliceParams {
        SliceParams::default().with_step(self.step)
    }

    fn export_params(&self) -> SvgExportParams {
        SvgExportParams::default()
            .with_canvas(self.size_x, self.size_y)
            .with_origin(self.origin_x, self.origin_y)
            .with_skip_empty_layers(self.skip_empty)
    }

    /// Positional cuts first, then the cuts file.
    fn extrusions(&self) -> Result<Vec<Extrusion>> {
        let mut extrusions: Vec<Extrusion> =
            self.cuts.iter().cloned().map(Extrusion::from).collect();

        if let Some(path) = &self.cuts_file {
            extrusions.extend(read_cuts_file(path)?);
        }

        if extrusions.is_empty() {
            bail!("no cuts given: pass svg_path,x,y,z_min,z_max arguments or --cuts-file");
        }
        Ok(extrusions)
    }
}

fn read_cuts_file(path: &Path) -> Result<Vec<Extrusion>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cuts file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse cuts file {}", path.display()))
}

fn run(cli: &Cli) -> Result<()> {
    let extrusions = cli.extrusions()?;
    let slice_params = cli.slice_params();

    if cli.dry_run {
        let stack = build_stack(&extrusions, &slice_params).context("Failed to build layers")?;
        for layer in &stack.layers {
            print!("{layer}");
        }
        println!("{stack}");
        return Ok(());
    }

    let output = make_sandwich(
        &cli.out_dir,
        &extrusions,
        &slice_params,
        &cli.export_params(),
    )
    .with_context(|| format!("Failed to make sandwich in {}", cli.out_dir.display()))?;

    for file in &output.layer_files {
        println!("{}", file.display());
    }
    if let Some(preview) = &output.composite {
        println!("{}", preview.display());
    }
    println!("{}", output.stack);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    run(&cli)
}
