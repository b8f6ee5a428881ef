mod app;
mod handlers;
mod rendering;
#[cfg(test)]
mod tests;
mod types;

pub use app::App;
pub use types::{LogBuffer, StatusMessage};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

use crate::{
    args::Args,
    engine::GameEngine,
    validate::{DictionaryApiValidator, WordListValidator, WordValidator},
    wordlist::RandomWordProvider,
};

/// Entry point for running the UI.
pub fn run_ui(args: &Args) -> Result<()> {
    let validator: Box<dyn WordValidator> = if args.offline {
        Box::new(WordListValidator)
    } else {
        Box::new(DictionaryApiValidator::new()?)
    };

    let engine = GameEngine::new(Box::new(RandomWordProvider::new()), validator);
    let logs = LogBuffer::new();
    let mut app = App::new(engine, logs);

    if let Some(difficulty) = args.difficulty {
        handlers::RoundHandler::new(&mut app).start_session(difficulty)?;
    }

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
