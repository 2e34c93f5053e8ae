//! Algorithm selection and invocation

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::diffusion::{forward_diffusion, serpentine_diffusion};
use crate::algorithm::floyd_steinberg::floyd_steinberg_diffusion;
use crate::algorithm::ordered::ordered_dither;
use crate::algorithm::threshold::{fixed_threshold, random_threshold};
use crate::buffer::{BinaryBuffer, GrayscaleBuffer};
use crate::io::error::{Result, invalid_parameter};

/// The single binarization strategy for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Fixed level in `[0, 1]`; build with [`Mode::threshold`]
    Threshold {
        /// Fraction of the quantum a sample must exceed to be white
        level: f64,
    },
    /// Independent uniform level per pixel
    Random {
        /// Seed for the per-pixel draws
        seed: u64,
    },
    /// 3x3 ordered dither tile
    Ordered,
    /// Left-to-right error carry within each row
    Forward,
    /// Serpentine error carry within each row
    Serpentine,
    /// Serpentine four-neighbor Floyd-Steinberg diffusion
    FloydSteinberg,
}

impl Mode {
    /// Fixed-threshold mode with a validated level
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `level` is outside `[0, 1]` or NaN
    pub fn threshold(level: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&level) {
            Ok(Self::Threshold { level })
        } else {
            Err(invalid_parameter(
                "threshold",
                &level,
                &"level must be between 0 and 1",
            ))
        }
    }

    /// Short lowercase name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Threshold { .. } => "threshold",
            Self::Random { .. } => "random",
            Self::Ordered => "ordered",
            Self::Forward => "forward",
            Self::Serpentine => "serpentine",
            Self::FloydSteinberg => "floyd-steinberg",
        }
    }
}

/// Result of a dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum DitherOutput {
    /// One-bit image from the selected algorithm
    Binary(BinaryBuffer),
    /// Unmodified copy of the input, produced when no mode was selected
    Passthrough(GrayscaleBuffer),
}

impl DitherOutput {
    /// The one-bit image, if an algorithm ran
    pub const fn as_binary(&self) -> Option<&BinaryBuffer> {
        match self {
            Self::Binary(bits) => Some(bits),
            Self::Passthrough(_) => None,
        }
    }
}

/// Run exactly the algorithm `mode` names
pub fn binarize(image: &GrayscaleBuffer, mode: Mode) -> BinaryBuffer {
    match mode {
        Mode::Threshold { level } => fixed_threshold(image, level),
        Mode::Random { seed } => random_threshold(image, &mut StdRng::seed_from_u64(seed)),
        Mode::Ordered => ordered_dither(image),
        Mode::Forward => forward_diffusion(image),
        Mode::Serpentine => serpentine_diffusion(image),
        Mode::FloydSteinberg => floyd_steinberg_diffusion(image),
    }
}

/// Dispatch `image` to the selected algorithm
///
/// With no mode the input is returned unchanged as a passthrough.
pub fn dither(image: &GrayscaleBuffer, mode: Option<Mode>) -> DitherOutput {
    match mode {
        Some(mode) => {
            tracing::debug!(
                mode = mode.name(),
                width = image.width(),
                height = image.height(),
                "Dithering"
            );
            DitherOutput::Binary(binarize(image, mode))
        }
        None => {
            tracing::warn!("No dithering mode selected, passing the grayscale input through");
            DitherOutput::Passthrough(image.clone())
        }
    }
}
