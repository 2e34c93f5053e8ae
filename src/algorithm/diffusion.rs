//! Row-local error diffusion
//!
//! Quantization error is carried only to the next pixel visited in the same
//! row and is dropped at the end of every row, so rows never influence each
//! other. The forward variant scans every row left to right; the serpentine
//! variant reverses direction on odd rows.

use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::configuration::{HALF_SAMPLE, MAX_SAMPLE};

/// Horizontal visiting order for a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Column 0 first
    LeftToRight,
    /// Last column first
    RightToLeft,
}

impl ScanDirection {
    /// Direction for row `y`; serpentine scans reverse on odd rows
    pub const fn for_row(y: usize, serpentine: bool) -> Self {
        if serpentine && y % 2 == 1 {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    /// Column offset of the next pixel in this direction
    pub const fn step(self) -> isize {
        match self {
            Self::LeftToRight => 1,
            Self::RightToLeft => -1,
        }
    }

    /// Column indices of a row of `width` pixels in visiting order
    pub fn columns(self, width: usize) -> impl Iterator<Item = usize> {
        (0..width).map(move |i| match self {
            Self::LeftToRight => i,
            Self::RightToLeft => width - 1 - i,
        })
    }
}

/// Hard binary snap shared by every diffusion variant
///
/// Returns `MAX_SAMPLE` for values strictly above half the quantum and 0
/// otherwise.
#[inline]
pub const fn snap(value: i32) -> i32 {
    if value > HALF_SAMPLE {
        MAX_SAMPLE as i32
    } else {
        0
    }
}

/// Diffuse error to the right along each row, left to right
pub fn forward_diffusion(image: &GrayscaleBuffer) -> BinaryBuffer {
    diffuse_within_rows(image, false)
}

/// Diffuse error along each row in serpentine order
pub fn serpentine_diffusion(image: &GrayscaleBuffer) -> BinaryBuffer {
    diffuse_within_rows(image, true)
}

fn diffuse_within_rows(image: &GrayscaleBuffer, serpentine: bool) -> BinaryBuffer {
    let width = image.width();
    let mut output = BinaryBuffer::new(width, image.height());

    for (y, row) in image.samples().rows().into_iter().enumerate() {
        let direction = ScanDirection::for_row(y, serpentine);
        let mut error = 0;
        for x in direction.columns(width) {
            let value = row.get(x).map_or(0, |&sample| i32::from(sample)) + error;
            let new_value = snap(value);
            error = value - new_value;
            output.set(x, y, new_value != 0);
        }
    }

    output
}
