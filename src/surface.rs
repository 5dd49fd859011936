//! Row-major RGBA8 pixel grid shared by the base image, bar patterns and the
//! composite. Its byte layout is exactly what a canvas `ImageData` carries.

use crate::color::Rgba;
use crate::error::{EncodeError, PatternError};

#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Allocates a buffer filled with `color`. Zero-area or oversized buffers
    /// are refused, mirroring a canvas that hands back no 2D context.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self, PatternError> {
        let unavailable = PatternError::SurfaceUnavailable { width, height };
        if width == 0 || height == 0 {
            return Err(unavailable);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(unavailable)?;

        let mut pixels = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            pixels.extend_from_slice(&color);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps raw RGBA bytes, e.g. from `ImageData::data()` or a decoded PNG.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EncodeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(pixels.len()) {
            return Err(EncodeError::BadLength {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Writes one pixel; coordinates outside the buffer are ignored.
    pub fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    /// Fills `[x0, x1) x [y0, y1)`, clipped to the buffer.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
        let x0 = x0.clamp(0, self.width as i64) as u32;
        let x1 = x1.clamp(0, self.width as i64) as u32;
        let y0 = y0.clamp(0, self.height as i64) as u32;
        let y1 = y1.clamp(0, self.height as i64) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                let i = self.offset(x, y);
                self.pixels[i..i + 4].copy_from_slice(&color);
            }
        }
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.pixels
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Copies `src` onto this buffer with its top-left corner at `(x, y)`.
    /// Rows and columns falling outside are dropped.
    pub fn blit(&mut self, src: &PixelBuffer, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = src.width.min(self.width - x) as usize;
        let rows = src.height.min(self.height - y);
        for row in 0..rows {
            let s = src.offset(0, row);
            let d = self.offset(x, y + row);
            self.pixels[d..d + cols * 4].copy_from_slice(&src.pixels[s..s + cols * 4]);
        }
    }
}
