//! Synthetic linear-ramp input

use clap::ValueEnum;

use crate::buffer::GrayscaleBuffer;
use crate::io::configuration::EIGHT_BIT_SCALE;
use crate::io::error::Result;

/// Axis the ramp runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gradient {
    /// White at the left edge, black at the right edge
    Horizontal,
    /// White at the top edge, black at the bottom edge
    Vertical,
}

/// Ramp sample at `position` along an axis of `extent` pixels
///
/// Luminance `1 - position / (extent - 1)`, rounded to the nearest 8-bit level
/// and scaled onto the quantum. A one-pixel axis is white.
fn ramp_sample(position: usize, extent: usize) -> u16 {
    let luminance = if extent > 1 {
        1.0 - position as f64 / (extent - 1) as f64
    } else {
        1.0
    };
    let level = (luminance.clamp(0.0, 1.0) * 255.0).round() as u16;
    level * EIGHT_BIT_SCALE
}

/// Generate a `width` x `height` ramp along `direction`
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn generate(direction: Gradient, width: usize, height: usize) -> Result<GrayscaleBuffer> {
    tracing::debug!(?direction, width, height, "Generating gradient");
    GrayscaleBuffer::from_fn(width, height, |x, y| match direction {
        Gradient::Horizontal => ramp_sample(x, width),
        Gradient::Vertical => ramp_sample(y, height),
    })
}
