//! Row-major grayscale sample storage
//!
//! Samples span the full 16-bit quantum `[0, MAX_SAMPLE]`. Inputs are expected
//! to be pre-quantized to 8-bit levels scaled onto that range, but any value in
//! the range is accepted.

use ndarray::Array2;

use crate::io::error::{DitherError, Result};

/// Grayscale image with one luminance sample per pixel
///
/// Samples are held in an `(height, width)` array so that iteration order
/// matches row-major pixel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleBuffer {
    samples: Array2<u16>,
}

impl GrayscaleBuffer {
    /// Create an all-black image
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height, width.saturating_mul(height))?;
        Ok(Self {
            samples: Array2::zeros((height, width)),
        })
    }

    /// Wrap row-major samples
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if either dimension is zero or
    /// `samples.len() != width * height`
    pub fn from_samples(width: usize, height: usize, samples: Vec<u16>) -> Result<Self> {
        let count = samples.len();
        check_dimensions(width, height, count)?;
        let samples = Array2::from_shape_vec((height, width), samples).map_err(|_shape_error| {
            DitherError::DimensionMismatch {
                width,
                height,
                samples: count,
            }
        })?;
        Ok(Self { samples })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::DimensionMismatch`] if either dimension is zero
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u16,
    ) -> Result<Self> {
        check_dimensions(width, height, width.saturating_mul(height))?;
        Ok(Self {
            samples: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the image holds no pixels
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        self.samples.get((y, x)).copied()
    }

    /// Overwrite the sample at column `x`, row `y`; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, sample: u16) {
        if let Some(slot) = self.samples.get_mut((y, x)) {
            *slot = sample;
        }
    }

    /// Samples as an `(height, width)` array view
    pub fn samples(&self) -> &Array2<u16> {
        &self.samples
    }
}

// Every buffer holds at least one pixel and exactly `width * height` samples
fn check_dimensions(width: usize, height: usize, samples: usize) -> Result<()> {
    if width == 0 || height == 0 || width.checked_mul(height) != Some(samples) {
        return Err(DitherError::DimensionMismatch {
            width,
            height,
            samples,
        });
    }
    Ok(())
}
