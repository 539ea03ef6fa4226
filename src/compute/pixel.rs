//! Flat RGBA pixel buffer.

use crate::schema::Rgb;

/// Row-major RGBA8 buffer with a top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Allocate a buffer filled with an opaque color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let rgba = color.to_rgba();
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Write one opaque pixel. Coordinates outside the buffer are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if self.in_bounds(x, y) {
            let idx = self.offset(x as usize, y as usize);
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba());
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb) {
        let rgba = color.to_rgba();
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for py in y.min(y_end)..y_end {
            let start = self.offset(x.min(x_end), py);
            let end = self.offset(x_end, py);
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// RGBA bytes at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = self.offset(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}
