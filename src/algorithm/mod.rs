/// Row-local error diffusion and the shared scan-order policy
pub mod diffusion;
/// Mode selection and dispatch to a single algorithm
pub mod dispatch;
/// Serpentine Floyd-Steinberg diffusion over a padded scratch grid
pub mod floyd_steinberg;
/// Ordered dithering with a 3x3 tile
pub mod ordered;
/// Fixed and random per-pixel thresholding
pub mod threshold;

pub use dispatch::{DitherOutput, Mode, binarize, dither};
