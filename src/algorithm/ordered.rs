//! Ordered dithering with a fixed 3x3 threshold tile

use crate::algorithm::threshold::exceeds;
use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::configuration::{ORDERED_MATRIX, ORDERED_MATRIX_DIVISOR, ORDERED_MATRIX_SIZE};

/// Periodic threshold lookup tiled over the image
///
/// Nine distinct ranks in `[1, 17]` divided by 18, so every tile carries
/// nine distinct levels strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedDitherMatrix {
    ranks: [[u8; ORDERED_MATRIX_SIZE]; ORDERED_MATRIX_SIZE],
}

impl Default for OrderedDitherMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedDitherMatrix {
    /// The standard tile
    pub const fn new() -> Self {
        Self {
            ranks: ORDERED_MATRIX,
        }
    }

    /// Rank at image position `(x, y)`, wrapped onto the tile
    pub fn rank(&self, x: usize, y: usize) -> u8 {
        self.ranks
            .get(x % ORDERED_MATRIX_SIZE)
            .and_then(|column| column.get(y % ORDERED_MATRIX_SIZE))
            .copied()
            .unwrap_or_default()
    }

    /// Threshold fraction at image position `(x, y)`
    pub fn fraction(&self, x: usize, y: usize) -> f64 {
        f64::from(self.rank(x, y)) / ORDERED_MATRIX_DIVISOR
    }
}

/// Binarize each pixel against the tile level at its position
pub fn ordered_dither(image: &GrayscaleBuffer) -> BinaryBuffer {
    let matrix = OrderedDitherMatrix::new();
    let mut output = BinaryBuffer::new(image.width(), image.height());
    for ((y, x), &sample) in image.samples().indexed_iter() {
        output.set(x, y, exceeds(sample, matrix.fraction(x, y)));
    }
    output
}
