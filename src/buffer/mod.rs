//! Pixel storage shared by every algorithm
//!
//! - Grayscale input samples on a 16-bit quantum
//! - One-bit output pixels

/// Packed one-bit output image
pub mod binary;
/// Normalized luminance input image
pub mod grayscale;

pub use binary::BinaryBuffer;
pub use grayscale::GrayscaleBuffer;
