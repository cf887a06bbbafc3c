use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixelgrid_core::{self, reconstruct, AnalysisConfig, RasterImage};

#[derive(Args)]
pub struct ReconstructArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output PNG path
    pub output: PathBuf,

    /// Upper bound of the per-axis scale search band
    #[arg(long)]
    pub max_scale: Option<u32>,

    /// Sample only the cell center instead of box-averaging
    #[arg(long)]
    pub sample_center_only: bool,

    /// Emit the full-size preview instead of the cropped low-resolution image
    #[arg(long)]
    pub preview: bool,

    /// Load an AnalysisConfig from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ReconstructArgs) -> Result<()> {
    let config = super::load_config(
        args.config.as_deref(),
        args.max_scale,
        args.sample_center_only,
    )?;

    let image = RasterImage::load(&args.file)?;
    let analysis = pixelgrid_core::analyze(&image, &config)?;

    tracing::info!(
        scale_x = analysis.x.scale,
        scale_y = analysis.y.scale,
        "reconstructing"
    );

    let out = if args.preview {
        reconstruct::preview(&image, &analysis.grid, config.sample_center_only)
    } else {
        reconstruct::low_res(&image, &analysis.grid, config.sample_center_only)
    };

    out.save_png(&args.output)?;
    println!(
        "Wrote {}x{} to {}",
        out.width(),
        out.height(),
        args.output.display()
    );

    Ok(())
}
