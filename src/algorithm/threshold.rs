//! Per-pixel thresholding with a fixed or randomly drawn level
//!
//! Both variants look at each sample in isolation, so the result does not
//! depend on visiting order.

use rand::Rng;

use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::configuration::MAX_SAMPLE;

/// Compare a sample against a level given as a fraction of the quantum
#[inline]
pub fn exceeds(sample: u16, fraction: f64) -> bool {
    f64::from(sample) > fraction * f64::from(MAX_SAMPLE)
}

/// Binarize against a single level
///
/// A pixel is white iff its sample is strictly above `level * MAX_SAMPLE`.
/// `level` is expected in `[0, 1]`; range checking belongs to the caller.
pub fn fixed_threshold(image: &GrayscaleBuffer, level: f64) -> BinaryBuffer {
    let mut output = BinaryBuffer::new(image.width(), image.height());
    for ((y, x), &sample) in image.samples().indexed_iter() {
        output.set(x, y, exceeds(sample, level));
    }
    output
}

/// Binarize against a fresh uniform level per pixel
///
/// Draws one `r` in `[0, 1)` per pixel, in row-major order, and marks the
/// pixel white iff its sample is above `r * MAX_SAMPLE`. Seeding `rng`
/// makes the output reproducible.
pub fn random_threshold<R: Rng + ?Sized>(image: &GrayscaleBuffer, rng: &mut R) -> BinaryBuffer {
    let mut output = BinaryBuffer::new(image.width(), image.height());
    for ((y, x), &sample) in image.samples().indexed_iter() {
        let fraction: f64 = rng.random();
        output.set(x, y, exceeds(sample, fraction));
    }
    output
}

