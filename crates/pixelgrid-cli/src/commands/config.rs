use anyhow::Result;
use pixelgrid_core::AnalysisConfig;

/// Print a default AnalysisConfig as TOML to stdout.
pub fn run() -> Result<()> {
    let config = AnalysisConfig::default();
    print!("{}", config.to_toml_string()?);
    Ok(())
}
