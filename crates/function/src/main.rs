//! Tally function runner
//!
//! Reads an input query from stdin, evaluates the selected discount function
//! and writes the decision to stdout. Diagnostics go to stderr.

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use tracing::error;

use crate::config::FunctionConfig;

mod config;
mod observability;
mod runner;

fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match FunctionConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Logging is not initialised yet; clap renders its own help and errors.
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        return ExitCode::FAILURE;
    }

    let mut stdout = BufWriter::new(io::stdout().lock());

    match runner::run(config.function, io::stdin().lock(), &mut stdout, config.pretty) {
        Ok(_) => ExitCode::SUCCESS,
        Err(run_error) => {
            error!(function = ?config.function, "function run failed: {run_error}");

            ExitCode::FAILURE
        }
    }
}
