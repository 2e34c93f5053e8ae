//! Grayscale to 1-bit image conversion
//!
//! Six binarization strategies share one buffer model: fixed and random
//! thresholding, 3x3 ordered dithering, and three error-diffusion variants
//! (row-local forward, row-local serpentine and serpentine Floyd-Steinberg).
//! Decoding, encoding, gradient generation and the command line live in [`io`].

#![forbid(unsafe_code)]

/// Binarization algorithms and mode dispatch
pub mod algorithm;
/// Grayscale input and one-bit output buffers
pub mod buffer;
/// Input/output, configuration and error handling
pub mod io;

pub use algorithm::{DitherOutput, Mode, dither};
pub use buffer::{BinaryBuffer, GrayscaleBuffer};
pub use io::error::{DitherError, Result};
