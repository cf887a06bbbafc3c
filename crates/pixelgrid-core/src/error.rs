use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelGridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("image too small to analyze: {width}x{height} (need at least 2x2)")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Retained to document the historical failure mode described in the
    /// degenerate-scale edge case; unreachable through
    /// [`crate::grid::GridModel::from_estimates`], which clamps instead.
    #[error("degenerate scale: Sx={sx}, Sy={sy} (both must be >= 1)")]
    DegenerateScale { sx: f64, sy: f64 },
}

pub type Result<T> = std::result::Result<T, PixelGridError>;
