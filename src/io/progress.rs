//! Terminal spinner reporting the current pipeline stage

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Stages a single conversion passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the input file or generating the gradient
    Loading,
    /// Running the selected algorithm
    Dithering,
    /// Encoding and writing the output
    Writing,
}

impl Stage {
    /// Label shown next to the spinner
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Dithering => "dithering",
            Self::Writing => "writing",
        }
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner for one conversion, or nothing when quiet
pub struct ProgressManager {
    spinner: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager that draws to stderr unless `quiet`
    pub fn new(quiet: bool) -> Self {
        let spinner = (!quiet).then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { spinner }
    }

    /// Create a manager that never draws
    pub const fn hidden() -> Self {
        Self { spinner: None }
    }

    /// True when a spinner is being drawn
    pub const fn is_visible(&self) -> bool {
        self.spinner.is_some()
    }

    /// Show the stage now in progress
    pub fn enter(&self, stage: Stage) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(stage.label());
        }
    }

    /// Clear the spinner once the run is over
    pub fn finish(&self) {
        if let Some(ref spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}
