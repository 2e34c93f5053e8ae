//! Engine constants and runtime configuration defaults

// Sample quantum
/// Largest representable luminance sample (16-bit quantum)
pub const MAX_SAMPLE: u16 = u16::MAX;
/// Snap point for error diffusion; values strictly above it become white
pub const HALF_SAMPLE: i32 = MAX_SAMPLE as i32 / 2;
/// Factor mapping an 8-bit level onto the quantum (`255 * 257 == 65535`)
pub const EIGHT_BIT_SCALE: u16 = 257;

// Ordered dither tile
/// Side length of the ordered dither tile
pub const ORDERED_MATRIX_SIZE: usize = 3;
/// Ranks of the ordered dither tile, indexed `[x mod 3][y mod 3]`
pub const ORDERED_MATRIX: [[u8; ORDERED_MATRIX_SIZE]; ORDERED_MATRIX_SIZE] =
    [[5, 13, 7], [11, 1, 17], [3, 15, 9]];
/// Divisor turning a rank into a threshold fraction in `(0, 1)`
pub const ORDERED_MATRIX_DIVISOR: f64 = 18.0;

// Floyd-Steinberg kernel, all relative to the scan direction
/// Weight for the next pixel in the current row
pub const FS_WEIGHT_AHEAD: i32 = 5;
/// Weight for the pixel directly below
pub const FS_WEIGHT_BELOW: i32 = 7;
/// Weight for the pixel below and ahead
pub const FS_WEIGHT_BELOW_AHEAD: i32 = 3;
/// Weight for the pixel below and behind
pub const FS_WEIGHT_BELOW_BEHIND: i32 = 1;
/// Common divisor of the Floyd-Steinberg weights
pub const FS_DIVISOR: i32 = 16;

// Default values for configurable parameters
/// Fixed threshold level used when `--threshold` is given without a value
pub const DEFAULT_THRESHOLD_LEVEL: f64 = 0.5;
/// Side length of the synthetic gradient input
pub const GRADIENT_SIZE: usize = 512;

// Logging
/// Tracing target the default filter directive applies to
pub const LOG_TARGET: &str = "bilevel";
