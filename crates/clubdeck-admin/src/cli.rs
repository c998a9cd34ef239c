//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal admin console for the clubdeck backend.
#[derive(Debug, Parser)]
#[command(name = "clubdeck", version, about)]
pub struct Cli {
    /// Base URL of the backend.
    #[arg(long, env = "CLUBDECK_API", default_value = "http://localhost:5001")]
    pub api: String,

    /// Interface language (nl or en).
    #[arg(long, env = "CLUBDECK_LANG", default_value = "nl")]
    pub lang: String,

    /// Rows per table page.
    #[arg(long, default_value_t = 10)]
    pub per_page: usize,

    /// JSON file with user rows to manage (falls back to sample data).
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
