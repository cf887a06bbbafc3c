//! [`AnalysisConfig`] (§6 ADDED): serde/TOML-roundtrippable analysis knobs,
//! mirroring the teacher's `pipeline::config` conventions.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_SCALE;

/// User-tunable knobs for [`crate::pipeline::analyze`] and the reconstruction
/// step that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound of the per-axis scale search band, `[2, max_scale]`.
    pub max_scale: u32,
    /// When `true`, reconstruction samples only the nearest pixel to each
    /// cell center; when `false`, it box-averages within the cell.
    pub sample_center_only: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            sample_center_only: false,
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(text: &str) -> crate::error::Result<Self> {
        toml::from_str(text)
            .map_err(|e| crate::error::PixelGridError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> crate::error::Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::PixelGridError::InvalidConfig(e.to_string()))
    }
}
