//! EdgeProjector (§4.1): reduces a 2-D image to two 1-D edge-energy signals.

use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::image::RasterImage;

/// A 1-D nonnegative edge-energy signal, one value per pixel column or row.
#[derive(Clone, Debug)]
pub struct EdgeSignal(Vec<f64>);

impl EdgeSignal {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn total_energy(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl std::ops::Index<usize> for EdgeSignal {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

/// A replaceable implementation of the §4.1 contract, so a host may substitute
/// a GPU reduction for the default CPU pass without changing the rest of the
/// pipeline (mirrors the teacher's `ComputeBackend` trait for FFT/shift ops).
pub trait EdgeBackend {
    /// Returns `(col, row)` with `col.len() == image.width()` and
    /// `row.len() == image.height()`.
    fn project(&self, image: &RasterImage) -> (EdgeSignal, EdgeSignal);
}

/// Default CPU implementation of [`EdgeBackend`].
#[derive(Default)]
pub struct CpuEdgeBackend;

impl EdgeBackend for CpuEdgeBackend {
    fn project(&self, image: &RasterImage) -> (EdgeSignal, EdgeSignal) {
        let (width, height) = (image.width(), image.height());
        let total_pixels = width as usize * height as usize;

        if total_pixels >= PARALLEL_PIXEL_THRESHOLD {
            rayon::join(
                || column_energy(image, width, height),
                || row_energy(image, width, height),
            )
        } else {
            (
                column_energy(image, width, height),
                row_energy(image, width, height),
            )
        }
    }
}

/// Top-level entry point: project `image` with the default CPU backend.
pub fn project(image: &RasterImage) -> (EdgeSignal, EdgeSignal) {
    CpuEdgeBackend.project(image)
}

fn l1_diff(a: crate::image::Rgba, b: crate::image::Rgba) -> f64 {
    (a.r - b.r).abs() as f64 + (a.g - b.g).abs() as f64 + (a.b - b.b).abs() as f64
}

fn column_energy(image: &RasterImage, width: u32, height: u32) -> EdgeSignal {
    let mut col = vec![0.0f64; width as usize];
    for y in 0..height {
        for x in 1..width {
            let xp = x - 1;
            col[x as usize] += l1_diff(image.get(x, y), image.get(xp, y));
        }
    }
    EdgeSignal::new(col)
}

fn row_energy(image: &RasterImage, width: u32, height: u32) -> EdgeSignal {
    let mut row = vec![0.0f64; height as usize];
    for y in 0..height {
        if y == 0 {
            continue;
        }
        let yp = y - 1;
        for x in 0..width {
            row[y as usize] += l1_diff(image.get(x, y), image.get(x, yp));
        }
    }
    EdgeSignal::new(row)
}
