//! CLI entry point for grayscale to 1-bit conversion

use bilevel::io::cli::{Cli, Converter};
use bilevel::io::logging;
use clap::Parser;
use std::process::ExitCode;

// Allow print for the final error report
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            let _ = error.print();
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose, cli.quiet);

    match Converter::new(cli).process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
