//! Function runner configuration

use clap::Parser;

use crate::{config::observability::LoggingConfig, runner::FunctionKind};

pub(crate) mod observability;

/// Tally discount function runner configuration
#[derive(Debug, Parser)]
#[command(
    name = "tally-function",
    about = "Run a discount function over an input query read from stdin",
    long_about = None
)]
pub struct FunctionConfig {
    /// Discount function to run.
    #[arg(value_enum, env = "TALLY_FUNCTION")]
    pub function: FunctionKind,

    /// Pretty-print the decision JSON.
    #[arg(long, env = "TALLY_PRETTY", default_value_t = false)]
    pub pretty: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl FunctionConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
