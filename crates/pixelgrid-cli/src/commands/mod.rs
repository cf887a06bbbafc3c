pub mod analyze;
pub mod config;
pub mod info;
pub mod reconstruct;

use std::path::Path;

use anyhow::Result;
use pixelgrid_core::AnalysisConfig;

/// Shared CLI precedence: an explicit `--config <path.toml>` wins outright;
/// otherwise build from flags on top of [`AnalysisConfig::default`].
fn load_config(
    config_path: Option<&Path>,
    max_scale: Option<u32>,
    sample_center_only: bool,
) -> Result<AnalysisConfig> {
    if let Some(path) = config_path {
        let text = std::fs::read_to_string(path)?;
        return Ok(AnalysisConfig::from_toml_str(&text)?);
    }

    let mut config = AnalysisConfig::default();
    if let Some(max_scale) = max_scale {
        config.max_scale = max_scale;
    }
    config.sample_center_only = sample_center_only;
    Ok(config)
}
