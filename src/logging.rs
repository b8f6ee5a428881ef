//! File-backed tracing setup.
//!
//! The terminal is owned by the TUI, so log output goes to a file through a
//! non-blocking appender. Keep the returned guard alive for the process
//! lifetime or buffered lines are lost on exit.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "wordle-arena.log";

pub fn init(default_level: &str) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
