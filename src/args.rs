use clap::Parser;

use crate::difficulty::Difficulty;

#[derive(Parser)]
pub struct Args {
    /// Skip the difficulty screen and start at this tier
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Validate guesses against the embedded word lists instead of the
    /// remote dictionary
    #[arg(long)]
    pub offline: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
