use anyhow::Result;
use clap::Parser;
use tracing::info;

use wordle_arena::{args::Args, logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = logging::init(&args.log_level)?;
    info!("starting wordle-arena");

    run_ui(&args)
}
