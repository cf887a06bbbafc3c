use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixelgrid_core::{self, AnalysisConfig, RasterImage};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Upper bound of the per-axis scale search band
    #[arg(long)]
    pub max_scale: Option<u32>,

    /// Sample only the cell center instead of box-averaging during reconstruction
    #[arg(long)]
    pub sample_center_only: bool,

    /// Load an AnalysisConfig from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = super::load_config(
        args.config.as_deref(),
        args.max_scale,
        args.sample_center_only,
    )?;

    let image = RasterImage::load(&args.file)?;
    let analysis = pixelgrid_core::analyze(&image, &config)?;

    println!("Axis   Scale       Offset      Confidence");
    println!(
        "X      {:<10.4}  {:<10.4}  {:.4}",
        analysis.x.scale, analysis.x.offset, analysis.x.confidence
    );
    println!(
        "Y      {:<10.4}  {:<10.4}  {:.4}",
        analysis.y.scale, analysis.y.offset, analysis.y.confidence
    );

    let (out_w, out_h) = analysis.grid.low_res_size();
    println!("\nRecovered native size: {}x{}", out_w, out_h);

    Ok(())
}
