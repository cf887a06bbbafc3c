use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixelgrid_core::RasterImage;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = RasterImage::load(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Pixels:      {}", image.width() as u64 * image.height() as u64);

    Ok(())
}
