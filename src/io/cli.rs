//! Command-line interface for converting one image or gradient to 1-bit

use crate::algorithm::{DitherOutput, Mode, dither};
use crate::buffer::GrayscaleBuffer;
use crate::io::configuration::{DEFAULT_THRESHOLD_LEVEL, GRADIENT_SIZE};
use crate::io::error::{Result, configuration_error};
use crate::io::gradient::{Gradient, generate};
use crate::io::image::{load_grayscale, save_output};
use crate::io::progress::{ProgressManager, Stage};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bilevel")]
#[command(
    author,
    version,
    about = "Convert a grayscale image to 1-bit black and white"
)]
/// Command-line arguments for the conversion tool
// One boolean per algorithm flag; exclusivity is checked in `mode`
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image file to convert
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Generate a 512x512 ramp instead of reading a file
    #[arg(short, long, value_enum, value_name = "DIRECTION")]
    pub gradient: Option<Gradient>,

    /// Destination image file; the format follows the extension
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fixed threshold at LEVEL in [0, 1], 0.5 when LEVEL is omitted
    #[arg(short, long, value_name = "LEVEL")]
    pub threshold: Option<Option<f64>>,

    /// Random threshold per pixel
    #[arg(short, long)]
    pub random: bool,

    /// Ordered dithering with a 3x3 tile
    #[arg(short = 'O', long)]
    pub ordered: bool,

    /// Error diffusion to the right within each row
    #[arg(short, long)]
    pub forward: bool,

    /// Error diffusion within each row, alternating direction
    #[arg(short, long)]
    pub both: bool,

    /// Serpentine Floyd-Steinberg error diffusion
    #[arg(short = 'F', long)]
    pub floyd: bool,

    /// Seed for --random; drawn from the OS when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the grayscale input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Decode an image file
    File(PathBuf),
    /// Generate a ramp of `GRADIENT_SIZE` pixels square
    Gradient(Gradient),
}

impl Source {
    /// Produce the grayscale input
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be loaded or the ramp is empty
    pub fn load(&self) -> Result<GrayscaleBuffer> {
        match self {
            Self::File(path) => load_grayscale(path),
            Self::Gradient(direction) => generate(*direction, GRADIENT_SIZE, GRADIENT_SIZE),
        }
    }
}

/// A validated conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Grayscale input
    pub source: Source,
    /// Destination path
    pub output: PathBuf,
    /// Algorithm to run; `None` passes the input through
    pub mode: Option<Mode>,
}

impl Job {
    /// Load, dither and write, reporting each stage to `progress`
    ///
    /// # Errors
    ///
    /// Returns an error if loading the input or writing the output fails
    pub fn run(&self, progress: &ProgressManager) -> Result<DitherOutput> {
        progress.enter(Stage::Loading);
        let image = self.source.load()?;

        progress.enter(Stage::Dithering);
        let start_time = Instant::now();
        let output = dither(&image, self.mode);
        tracing::info!(
            elapsed = ?start_time.elapsed(),
            width = image.width(),
            height = image.height(),
            "Dithered image"
        );

        progress.enter(Stage::Writing);
        save_output(&output, &self.output)?;
        tracing::info!(path = %self.output.display(), "Wrote output");

        Ok(output)
    }
}

impl Cli {
    /// Names of the algorithm flags present on the command line
    pub fn selected_modes(&self) -> Vec<&'static str> {
        [
            ("--threshold", self.threshold.is_some()),
            ("--random", self.random),
            ("--ordered", self.ordered),
            ("--forward", self.forward),
            ("--both", self.both),
            ("--floyd", self.floyd),
        ]
        .into_iter()
        .filter_map(|(name, selected)| selected.then_some(name))
        .collect()
    }

    /// Resolve the algorithm flags into at most one mode
    ///
    /// # Errors
    ///
    /// Returns an error if more than one algorithm is requested or the
    /// threshold level is outside `[0, 1]`
    pub fn mode(&self) -> Result<Option<Mode>> {
        let selected = self.selected_modes();
        if selected.len() > 1 {
            return Err(configuration_error(&format!(
                "only one algorithm may be selected, got {}",
                selected.join(", ")
            )));
        }

        if self.seed.is_some() && !self.random {
            tracing::warn!("--seed only affects --random and will be ignored");
        }

        let mode = if let Some(level) = self.threshold {
            Some(Mode::threshold(level.unwrap_or(DEFAULT_THRESHOLD_LEVEL))?)
        } else if self.random {
            let seed = self.seed.unwrap_or_else(rand::random);
            tracing::info!(seed, "Random threshold seed");
            Some(Mode::Random { seed })
        } else if self.ordered {
            Some(Mode::Ordered)
        } else if self.forward {
            Some(Mode::Forward)
        } else if self.both {
            Some(Mode::Serpentine)
        } else if self.floyd {
            Some(Mode::FloydSteinberg)
        } else {
            None
        };
        Ok(mode)
    }

    /// Check every option combination and build the job to run
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both or neither of `--input` and `--gradient` are given
    /// - No `--output` is given
    /// - The algorithm flags are invalid (see [`Cli::mode`])
    pub fn validate(&self) -> Result<Job> {
        let source = match (&self.input, self.gradient) {
            (Some(path), None) => Source::File(path.clone()),
            (None, Some(direction)) => Source::Gradient(direction),
            (Some(_), Some(_)) => {
                return Err(configuration_error(
                    &"--input and --gradient cannot be used together",
                ));
            }
            (None, None) => {
                return Err(configuration_error(
                    &"an input is required: pass --input FILE or --gradient DIRECTION",
                ));
            }
        };

        let output = self
            .output
            .clone()
            .ok_or_else(|| configuration_error(&"an output file is required (--output FILE)"))?;

        Ok(Job {
            source,
            output,
            mode: self.mode()?,
        })
    }
}

/// Runs a single conversion with progress reporting
pub struct Converter {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl Converter {
    /// Create a converter for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new(cli.quiet);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Validate the arguments and perform the conversion
    ///
    /// # Errors
    ///
    /// Returns an error if validation, loading or writing fails
    pub fn process(&self) -> Result<()> {
        let result = self
            .cli
            .validate()
            .and_then(|job| job.run(&self.progress_manager));
        self.progress_manager.finish();
        result.map(|_| ())
    }
}
