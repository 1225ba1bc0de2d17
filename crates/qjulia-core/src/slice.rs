//! Per-slice sample storage and 8-bit packing.

use crate::error::{QJuliaError, Result};

/// Raw escape measures for one z-slice.
///
/// Samples are stored row-major with `y` as the row: the value for node
/// `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl SampleGrid {
    /// Creates a grid from existing values.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(QJuliaError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Builds a grid whose size is already known to match.
    pub(crate) fn from_sampled(width: u32, height: u32, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            values,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the sample at node `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Normalizes and quantizes every sample into an 8-bit pixel buffer.
    #[must_use]
    pub fn pack(&self, threshold: f32) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self
                .values
                .iter()
                .map(|&v| pack_sample(v, threshold))
                .collect(),
        }
    }
}

/// 8-bit grayscale pixels for one slice, same layout as [`SampleGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside buffer");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Consumes the buffer and returns the raw pixels.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Maps one raw escape measure to a grayscale density.
///
/// The measure is clamped to `2 * threshold`, scaled to `[0, 1]`, inverted so
/// points inside the set are bright, and truncated to `floor(255 * v)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pack_sample(value: f32, threshold: f32) -> u8 {
    let ceiling = 2.0 * threshold;
    let normalized = value.min(ceiling) / ceiling;
    let density = 1.0 - normalized;
    // `as` saturates: negative measures cannot occur, NaN maps to 0
    (255.0 * density) as u8
}
