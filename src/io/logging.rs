//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::configuration::LOG_TARGET;

/// Default filter directive for a verbosity count and quiet flag
///
/// `--quiet` wins over `-v`.
pub fn default_directive(verbose: u8, quiet: bool) -> String {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    format!("{LOG_TARGET}={level}")
}

/// Install the global subscriber, writing to stderr without timestamps
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more than
/// once keeps the first subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(verbose, quiet).into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
