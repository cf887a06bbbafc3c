//! Raster image value type and the default Raster I/O adapter (§6).

use std::path::Path;

use crate::error::Result;

/// A single RGBA pixel with straight (non-premultiplied) channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A decoded raster image: straight RGBA, row-major, `f32` channels in `[0, 1]`.
///
/// This is the common currency between Raster I/O, [`crate::edge::EdgeProjector`]
/// and [`crate::reconstruct::Reconstructor`].
#[derive(Clone, Debug)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[idx] = color;
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Load and decode an image file into straight RGBA via the `image` crate.
    ///
    /// `image`'s own decoders never hand back premultiplied alpha, so no
    /// un-premultiply step is needed for this default loader (§6).
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path)?;
        Ok(Self::from_dynamic(&decoded))
    }

    pub fn from_dynamic(decoded: &image::DynamicImage) -> Self {
        let rgba8 = decoded.to_rgba8();
        let (width, height) = rgba8.dimensions();
        let pixels = rgba8
            .pixels()
            .map(|p| {
                Rgba::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                    p[3] as f32 / 255.0,
                )
            })
            .collect();
        Self::new(width, height, pixels)
    }

    /// Encode as an 8-bit PNG (§6 default Image writer).
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let mut buffer = image::RgbaImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = self.get(x, y);
                buffer.put_pixel(
                    x,
                    y,
                    image::Rgba([
                        (p.r.clamp(0.0, 1.0) * 255.0).round() as u8,
                        (p.g.clamp(0.0, 1.0) * 255.0).round() as u8,
                        (p.b.clamp(0.0, 1.0) * 255.0).round() as u8,
                        (p.a.clamp(0.0, 1.0) * 255.0).round() as u8,
                    ]),
                );
            }
        }
        buffer.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_image_reads_back_the_fill_color() {
        let color = Rgba::new(0.25, 0.5, 0.75, 1.0);
        let img = RasterImage::filled(4, 3, color);
        assert_eq!(img.get(2, 1), color);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
    }
}
