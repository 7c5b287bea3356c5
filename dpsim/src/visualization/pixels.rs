//! RGBA8888 pixel buffer used for both the trace canvas and the composited frame
//!
//! Each pixel is one `u32` laid out as `0xRRGGBBAA`, so `to_be_bytes` gives the
//! `[r, g, b, a]` order an `Rgba8UnormSrgb` texture expects.

use thiserror::Error;

/// Opaque white, the canvas starts filled with it
pub const BACKGROUND: u32 = 0xFFFF_FFFF;
/// Opaque black, written into the canvas where the second mass has been
pub const TRACE: u32 = 0x0000_00FF;
/// Opaque black, the live arms and masses
pub const INK: u32 = 0x0000_00FF;

#[derive(Debug, Error, PartialEq)]
pub enum PixelError {
    #[error("destination holds {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer filled with `color`
    pub fn new(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Row-major index of `(x, y)`, `None` outside `[0, width) x [0, height)`
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel, returns `false` and writes nothing when out of bounds
    pub fn set(&mut self, x: i64, y: i64, color: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Horizontal span from `x0` to `x1` inclusive on row `y`, clipped
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: u32) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i64 - 1);
        if lo > hi {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + lo as usize..=row + hi as usize].fill(color);
    }

    /// Overwrite this buffer with `other`, both must have the same size
    pub fn copy_from(&mut self, other: &PixelBuffer) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.pixels.copy_from_slice(&other.pixels);
    }

    /// Number of pixels holding exactly `color`
    pub fn count(&self, color: u32) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Unpack into `dst` as `[r, g, b, a]` bytes, row-major
    pub fn write_rgba8(&self, dst: &mut [u8]) -> Result<(), PixelError> {
        let expected = self.pixels.len() * 4;
        if dst.len() != expected {
            return Err(PixelError::SizeMismatch {
                expected,
                actual: dst.len(),
            });
        }
        for (out, px) in dst.chunks_exact_mut(4).zip(&self.pixels) {
            out.copy_from_slice(&px.to_be_bytes());
        }
        Ok(())
    }
}
