/// Command-line parsing, validation and the conversion driver
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// Synthetic gradient input
pub mod gradient;
/// Image decoding and encoding
pub mod image;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Stage spinner for interactive runs
pub mod progress;
