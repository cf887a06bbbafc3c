//! GridModel (§4.4): the recovered 2-D grid and its mapping to/from pixel space.

use crate::fit::AxisEstimate;

/// The recovered native-resolution grid: per-axis scale/offset plus the
/// inclusive grid-cell index range covering the source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridModel {
    pub sx: f64,
    pub ox: f64,
    pub sy: f64,
    pub oy: f64,
    min_gx: i64,
    max_gx: i64,
    min_gy: i64,
    max_gy: i64,
}

impl GridModel {
    /// Construct directly from (Sx, Ox, Sy, Oy) and image size, clamping
    /// Sx/Sy to a floor of 1.0 per the DegenerateScale edge case (§7) so the
    /// type can never hold an out-of-contract scale.
    pub fn new(sx: f64, ox: f64, sy: f64, oy: f64, width: u32, height: u32) -> Self {
        let sx = sx.max(1.0);
        let sy = sy.max(1.0);

        let min_gx = cell_of(0.0, ox, sx);
        let max_gx = cell_of((width as f64) - 1.0, ox, sx);
        let min_gy = cell_of(0.0, oy, sy);
        let max_gy = cell_of((height as f64) - 1.0, oy, sy);

        Self {
            sx,
            ox,
            sy,
            oy,
            min_gx,
            max_gx,
            min_gy,
            max_gy,
        }
    }

    /// The one constructor the top-level pipeline uses: build a `GridModel`
    /// straight from the two independent axis fits.
    pub fn from_estimates(x: &AxisEstimate, y: &AxisEstimate, width: u32, height: u32) -> Self {
        Self::new(x.scale, x.offset, y.scale, y.offset, width, height)
    }

    pub fn cell_index(&self, px: f64, py: f64) -> (i64, i64) {
        (cell_of(px, self.ox, self.sx), cell_of(py, self.oy, self.sy))
    }

    pub fn cell_center(&self, kx: i64, ky: i64) -> (f64, f64) {
        (
            self.ox + kx as f64 * self.sx + self.sx / 2.0,
            self.oy + ky as f64 * self.sy + self.sy / 2.0,
        )
    }

    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.min_gx, self.max_gx, self.min_gy, self.max_gy)
    }

    pub fn low_res_size(&self) -> (u32, u32) {
        (
            (self.max_gx - self.min_gx + 1).max(0) as u32,
            (self.max_gy - self.min_gy + 1).max(0) as u32,
        )
    }
}

fn cell_of(p: f64, offset: f64, scale: f64) -> i64 {
    ((p - offset) / scale).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_every_pixel() {
        let grid = GridModel::new(5.0, 2.0, 5.0, 2.0, 42, 42);
        let (min_gx, max_gx, min_gy, max_gy) = grid.bounds();
        for y in 0..42 {
            for x in 0..42 {
                let (kx, ky) = grid.cell_index(x as f64, y as f64);
                assert!(kx >= min_gx && kx <= max_gx);
                assert!(ky >= min_gy && ky <= max_gy);
            }
        }
    }

    #[test]
    fn bounds_match_the_42x42_cropped_offset_scenario() {
        // §8 scenario 2: 8x8 source, scale 5, offset 2, cropped to 42x42.
        let grid = GridModel::new(5.0, 2.0, 5.0, 2.0, 42, 42);
        let (min_gx, max_gx, _, _) = grid.bounds();
        assert_eq!(min_gx, 0);
        assert_eq!(max_gx, 7);
    }

    #[test]
    fn low_res_size_shrinks_as_scale_grows() {
        let small_scale = GridModel::new(4.0, 0.0, 4.0, 0.0, 256, 256);
        let big_scale = GridModel::new(8.0, 0.0, 8.0, 0.0, 256, 256);
        assert!(big_scale.low_res_size().0 < small_scale.low_res_size().0);
    }

    #[test]
    fn scale_below_one_is_clamped_to_one() {
        let grid = GridModel::new(0.3, 0.0, 0.3, 0.0, 10, 10);
        assert_eq!(grid.sx, 1.0);
        assert_eq!(grid.sy, 1.0);
    }
}
