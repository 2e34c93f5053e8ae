use bitvec::prelude::*;
use std::fmt;

/// One-bit image produced by every dithering algorithm
///
/// Bits are stored row-major; `true` is white and `false` is black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryBuffer {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl BinaryBuffer {
    /// Create an all-black image
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bits.get(y * self.width + x).as_deref().copied()
    }

    /// Set the pixel at column `x`, row `y`; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, white: bool) {
        if x < self.width && y < self.height {
            self.bits.set(y * self.width + x, white);
        }
    }

    /// Number of white pixels
    pub fn count_white(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate rows as bit slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &BitSlice> {
        // chunks() rejects a zero size even when there is nothing to chunk
        self.bits.chunks(self.width.max(1))
    }
}

impl fmt::Display for BinaryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for bit in row {
                write!(f, "{}", if *bit { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
