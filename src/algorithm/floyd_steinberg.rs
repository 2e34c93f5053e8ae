//! Serpentine Floyd-Steinberg error diffusion
//!
//! Error flows to four neighbors relative to the scan direction:
//!
//! ```text
//!            X   5
//!        1   7   3
//! ```
//!
//! Each share is `weight * error / 16` with integer division, so up to 15/16
//! of a quantum step can be lost per pixel. This matches the reference output
//! bit for bit and must not be replaced by rounding division.

use ndarray::Array2;

use crate::algorithm::diffusion::{ScanDirection, snap};
use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::configuration::{
    FS_DIVISOR, FS_WEIGHT_AHEAD, FS_WEIGHT_BELOW, FS_WEIGHT_BELOW_AHEAD, FS_WEIGHT_BELOW_BEHIND,
};

/// Padded scratch grid holding samples plus accumulated residuals
///
/// Shaped `(height + 1, width + 2)` with row stride `width + 2`. Image pixel
/// `(x, y)` lives at cell `(y, x + 1)`. Column 0, column `width + 1` and row
/// `height` are padding: they absorb shares pushed off the image edge and
/// are never read back into the output.
#[derive(Debug, Clone)]
pub struct ErrorGrid {
    cells: Array2<i32>,
}

impl ErrorGrid {
    /// Copy every sample into the interior of a zeroed grid
    pub fn from_image(image: &GrayscaleBuffer) -> Self {
        let mut cells = Array2::zeros((image.height() + 1, image.width() + 2));
        for ((y, x), &sample) in image.samples().indexed_iter() {
            if let Some(cell) = cells.get_mut((y, x + 1)) {
                *cell = i32::from(sample);
            }
        }
        Self { cells }
    }

    /// Grid shape as `(rows, columns)`, padding included
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Value of a grid cell; `column` is in grid coordinates
    pub fn value(&self, row: usize, column: usize) -> i32 {
        self.cells.get((row, column)).copied().unwrap_or(0)
    }

    fn add(&mut self, row: usize, column: usize, amount: i32) {
        if let Some(cell) = self.cells.get_mut((row, column)) {
            *cell += amount;
        }
    }

    /// Push `error` from cell `(row, column)` onto its four kernel neighbors
    pub fn distribute(&mut self, row: usize, column: usize, direction: ScanDirection, error: i32) {
        let ahead = column.saturating_add_signed(direction.step());
        let behind = column.saturating_add_signed(-direction.step());

        self.add(row, ahead, FS_WEIGHT_AHEAD * error / FS_DIVISOR);
        self.add(row + 1, column, FS_WEIGHT_BELOW * error / FS_DIVISOR);
        self.add(row + 1, ahead, FS_WEIGHT_BELOW_AHEAD * error / FS_DIVISOR);
        self.add(row + 1, behind, FS_WEIGHT_BELOW_BEHIND * error / FS_DIVISOR);
    }
}

/// Dither with error carried along the row and into the row below
///
/// Rows alternate direction, starting left to right on row 0.
pub fn floyd_steinberg_diffusion(image: &GrayscaleBuffer) -> BinaryBuffer {
    let width = image.width();
    let mut output = BinaryBuffer::new(width, image.height());
    let mut grid = ErrorGrid::from_image(image);

    for y in 0..image.height() {
        let direction = ScanDirection::for_row(y, true);
        for x in direction.columns(width) {
            let column = x + 1;
            let value = grid.value(y, column);
            let new_value = snap(value);
            grid.distribute(y, column, direction, value - new_value);
            output.set(x, y, new_value != 0);
        }
    }

    output
}
