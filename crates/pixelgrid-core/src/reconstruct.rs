//! Reconstructor (§4.5): upscaled preview and low-resolution output derived
//! from a [`GridModel`].

use std::collections::HashMap;

use rayon::prelude::*;

use crate::consts::{BOX_SAMPLE_RADIUS_FRACTION, PARALLEL_PIXEL_THRESHOLD};
use crate::grid::GridModel;
use crate::image::{RasterImage, Rgba};

/// Produce the upscaled preview: an image the same size as `image`, where
/// every pixel is replaced by the color of the grid cell it falls into.
///
/// Memoizes per-cell color by `(kx, ky)` to avoid `O(W*H*S^2)` cost.
pub fn preview(image: &RasterImage, grid: &GridModel, sample_center_only: bool) -> RasterImage {
    let (width, height) = (image.width(), image.height());
    let mut cache: HashMap<(i64, i64), Rgba> = HashMap::new();
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            let (kx, ky) = grid.cell_index(x as f64, y as f64);
            let color = *cache
                .entry((kx, ky))
                .or_insert_with(|| cell_color(image, grid, kx, ky, sample_center_only));
            pixels.push(color);
        }
    }

    RasterImage::new(width, height, pixels)
}

/// Produce the low-resolution output: one pixel per grid cell covering the
/// image's [`GridModel::bounds`].
pub fn low_res(image: &RasterImage, grid: &GridModel, sample_center_only: bool) -> RasterImage {
    let (min_gx, _max_gx, min_gy, _max_gy) = grid.bounds();
    let (out_w, out_h) = grid.low_res_size();

    let rows: Vec<Vec<Rgba>> = if (out_w as usize) * (out_h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        (0..out_h)
            .into_par_iter()
            .map(|gy| low_res_row(image, grid, min_gx, min_gy, gy, out_w, sample_center_only))
            .collect()
    } else {
        (0..out_h)
            .map(|gy| low_res_row(image, grid, min_gx, min_gy, gy, out_w, sample_center_only))
            .collect()
    };

    let mut pixels = Vec::with_capacity(out_w as usize * out_h as usize);
    for row in rows {
        pixels.extend(row);
    }
    RasterImage::new(out_w, out_h, pixels)
}

fn low_res_row(
    image: &RasterImage,
    grid: &GridModel,
    min_gx: i64,
    min_gy: i64,
    gy: u32,
    out_w: u32,
    sample_center_only: bool,
) -> Vec<Rgba> {
    (0..out_w)
        .map(|gx| {
            let kx = min_gx + gx as i64;
            let ky = min_gy + gy as i64;
            cell_color(image, grid, kx, ky, sample_center_only)
        })
        .collect()
}

fn cell_color(image: &RasterImage, grid: &GridModel, kx: i64, ky: i64, sample_center_only: bool) -> Rgba {
    let (cx, cy) = grid.cell_center(kx, ky);
    let width = image.width();
    let height = image.height();

    if sample_center_only {
        return nearest_neighbor(image, cx, cy, width, height);
    }

    let x_min = (cx - BOX_SAMPLE_RADIUS_FRACTION * grid.sx).ceil();
    let x_max = (cx + BOX_SAMPLE_RADIUS_FRACTION * grid.sx).floor();
    let y_min = (cy - BOX_SAMPLE_RADIUS_FRACTION * grid.sy).ceil();
    let y_max = (cy + BOX_SAMPLE_RADIUS_FRACTION * grid.sy).floor();

    let x_lo = x_min.max(0.0) as i64;
    let x_hi = x_max.min(width as f64 - 1.0) as i64;
    let y_lo = y_min.max(0.0) as i64;
    let y_hi = y_max.min(height as f64 - 1.0) as i64;

    if x_lo > x_hi || y_lo > y_hi {
        return nearest_neighbor(image, cx, cy, width, height);
    }

    let mut sum = Rgba::new(0.0, 0.0, 0.0, 0.0);
    let mut count = 0u32;
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let p = image.get(x as u32, y as u32);
            sum.r += p.r;
            sum.g += p.g;
            sum.b += p.b;
            sum.a += p.a;
            count += 1;
        }
    }

    Rgba::new(
        sum.r / count as f32,
        sum.g / count as f32,
        sum.b / count as f32,
        sum.a / count as f32,
    )
}

fn nearest_neighbor(image: &RasterImage, cx: f64, cy: f64, width: u32, height: u32) -> Rgba {
    let x = (cx.round() as i64).clamp(0, width as i64 - 1) as u32;
    let y = (cy.round() as i64).clamp(0, height as i64 - 1) as u32;
    image.get(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_upscaled(tile: &[Rgba], tile_w: u32, scale: u32) -> RasterImage {
        let tile_h = tile.len() as u32 / tile_w;
        let mut pixels = vec![Rgba::default(); (tile_w * scale * tile_h * scale) as usize];
        let out_w = tile_w * scale;
        for ty in 0..tile_h {
            for tx in 0..tile_w {
                let color = tile[(ty * tile_w + tx) as usize];
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = tx * scale + dx;
                        let y = ty * scale + dy;
                        pixels[(y * out_w + x) as usize] = color;
                    }
                }
            }
        }
        RasterImage::new(out_w, tile_h * scale, pixels)
    }

    #[test]
    fn low_res_reproduces_the_source_tile_nearest_neighbor() {
        let tile = vec![
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
            Rgba::new(1.0, 1.0, 0.0, 1.0),
        ];
        let img = tile_upscaled(&tile, 2, 4);
        let grid = GridModel::new(4.0, 0.0, 4.0, 0.0, img.width(), img.height());

        let out = low_res(&img, &grid, true);
        assert_eq!((out.width(), out.height()), (2, 2));
        for i in 0..4 {
            assert_eq!(out.pixels()[i], tile[i]);
        }
    }

    #[test]
    fn low_res_reproduces_the_source_tile_box_average() {
        let tile = vec![
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
            Rgba::new(1.0, 1.0, 0.0, 1.0),
        ];
        let img = tile_upscaled(&tile, 2, 4);
        let grid = GridModel::new(4.0, 0.0, 4.0, 0.0, img.width(), img.height());

        let out = low_res(&img, &grid, false);
        for i in 0..4 {
            assert_eq!(out.pixels()[i], tile[i]);
        }
    }

    #[test]
    fn preview_has_the_same_dimensions_as_the_input() {
        let tile = vec![Rgba::new(1.0, 1.0, 1.0, 1.0); 4];
        let img = tile_upscaled(&tile, 2, 3);
        let grid = GridModel::new(3.0, 0.0, 3.0, 0.0, img.width(), img.height());
        let out = preview(&img, &grid, false);
        assert_eq!((out.width(), out.height()), (img.width(), img.height()));
    }

    #[test]
    fn center_sampling_can_diverge_from_box_averaging_on_ringing_pixels() {
        // 6x6 source upscaled by 8, with a single ringing pixel planted at
        // the exact center of one cell.
        let mut tile = vec![Rgba::new(0.0, 0.0, 0.0, 1.0); 36];
        tile[0] = Rgba::new(1.0, 1.0, 1.0, 1.0);
        let img = tile_upscaled(&tile, 6, 8);
        let mut img = img;
        // Plant a ring artifact at the center of cell (1,0): cell center is
        // at x = 0*8 + 4 = 4 for kx=0, so use kx=1 -> center x = 12.
        img.set(12, 4, Rgba::new(1.0, 1.0, 1.0, 1.0));

        let grid = GridModel::new(8.0, 0.0, 8.0, 0.0, img.width(), img.height());
        let center_only = low_res(&img, &grid, true);
        let box_avg = low_res(&img, &grid, false);

        let idx = 1usize; // cell (1, 0)
        assert_ne!(center_only.pixels()[idx], box_avg.pixels()[idx]);
    }
}
