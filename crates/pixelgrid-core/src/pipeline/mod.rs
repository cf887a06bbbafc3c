//! Top-level orchestration (§4 overview): wires `EdgeProjector -> PeriodicityFitter
//! -> GridModel` into one entry point, mirroring the teacher's `pipeline::run`.

pub mod config;

use rayon::join;
use tracing::{debug, info_span};

use crate::edge;
use crate::error::{PixelGridError, Result};
use crate::fit::{self, AxisEstimate};
use crate::grid::GridModel;
use crate::image::RasterImage;

pub use config::AnalysisConfig;

/// Full result of analyzing one image: the per-axis fits plus the resulting grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAnalysis {
    pub x: AxisEstimate,
    pub y: AxisEstimate,
    pub grid: GridModel,
}

/// Run the complete detection pipeline on a decoded image.
pub fn analyze(image: &RasterImage, config: &AnalysisConfig) -> Result<GridAnalysis> {
    let span = info_span!("analyze", width = image.width(), height = image.height());
    let _enter = span.enter();

    if image.width() < 2 || image.height() < 2 {
        return Err(PixelGridError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let (col_signal, row_signal) = edge::project(image);

    let (x, y) = join(
        || fit::fit(&col_signal, config.max_scale),
        || fit::fit(&row_signal, config.max_scale),
    );

    debug!(
        scale_x = x.scale,
        offset_x = x.offset,
        confidence_x = x.confidence,
        scale_y = y.scale,
        offset_y = y.offset,
        confidence_y = y.confidence,
        "fitted axis estimates"
    );

    let grid = GridModel::from_estimates(&x, &y, image.width(), image.height());

    Ok(GridAnalysis { x, y, grid })
}
