//! Native-resolution grid recovery for upscaled or letterboxed pixel art.
//!
//! The pipeline is five independent stages, each its own module: reduce the
//! image to per-axis edge-energy signals ([`edge`]), probe their Fourier
//! content at arbitrary real bins ([`dft`]), fit a dominant fundamental
//! frequency per axis ([`fit`]), turn the two fits into a 2-D grid
//! ([`grid`]), and resample the source against that grid ([`reconstruct`]).
//! [`pipeline`] wires the first three together into one entry point.

pub mod consts;
pub mod dft;
pub mod edge;
pub mod error;
pub mod fit;
pub mod grid;
pub mod image;
pub mod pipeline;
pub mod reconstruct;

pub use error::{PixelGridError, Result};
pub use image::{RasterImage, Rgba};
pub use pipeline::{analyze, AnalysisConfig, GridAnalysis};
