//! Decoding to grayscale samples and encoding of results
//!
//! Any format the `image` crate recognizes can be read; the output format is
//! chosen from the destination extension.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::algorithm::DitherOutput;
use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::configuration::EIGHT_BIT_SCALE;
use crate::io::error::{DitherError, Result};

/// Decode an image and reduce it to 8-bit luminance on the 16-bit quantum
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has no pixels
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayscaleBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| DitherError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let luma = img.to_luma8();
    let (width, height) = (luma.width() as usize, luma.height() as usize);
    tracing::debug!(path = %path.display(), width, height, "Decoded input image");

    let samples = luma
        .into_raw()
        .into_iter()
        .map(|level| u16::from(level) * EIGHT_BIT_SCALE)
        .collect();
    GrayscaleBuffer::from_samples(width, height, samples)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DitherError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

fn save_luma(img: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    img.save(path).map_err(|e| DitherError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a one-bit image with white as 255 and black as 0
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions exceed what the encoder accepts
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn save_binary<P: AsRef<Path>>(bits: &BinaryBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = encoder_dimensions(bits.width(), bits.height())?;
    let img = GrayImage::from_fn(width, height, |x, y| {
        let white = bits.get(x as usize, y as usize).unwrap_or(false);
        Luma([if white { u8::MAX } else { 0 }])
    });
    save_luma(&img, path)
}

/// Write grayscale samples back as 8-bit luminance
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions exceed what the encoder accepts
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn save_grayscale<P: AsRef<Path>>(image: &GrayscaleBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = encoder_dimensions(image.width(), image.height())?;
    let img = GrayImage::from_fn(width, height, |x, y| {
        let sample = image.get(x as usize, y as usize).unwrap_or(0);
        Luma([(sample / EIGHT_BIT_SCALE) as u8])
    });
    save_luma(&img, path)
}

/// Write whichever image a dispatch produced
///
/// # Errors
///
/// Propagates errors from [`save_binary`] and [`save_grayscale`]
pub fn save_output<P: AsRef<Path>>(output: &DitherOutput, path: P) -> Result<()> {
    match output {
        DitherOutput::Binary(bits) => save_binary(bits, path),
        DitherOutput::Passthrough(image) => save_grayscale(image, path),
    }
}

fn encoder_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(DitherError::DimensionMismatch {
            width,
            height,
            samples: width.saturating_mul(height),
        }),
    }
}
