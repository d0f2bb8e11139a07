//! Diagnostics Config
//!
//! The host reads the decision from stdout, so these settings only shape what
//! reaches stderr.

use clap::Args;

/// How diagnostics are rendered on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for reading in a terminal or the host's run log.
    Compact,

    /// One JSON object per event, including the active function span.
    Json,
}

/// Diagnostic log settings for a single function run.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `warn` or `tally=debug`. Configuration and
    /// selection problems log at warn, so the default keeps only those.
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Diagnostic format (compact, json)
    #[arg(long, env = "TALLY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Colour compact diagnostics. Off by default since the host log viewer
    /// shows escape codes verbatim.
    #[arg(long, env = "TALLY_LOG_ANSI", default_value_t = false)]
    pub log_ansi: bool,
}
