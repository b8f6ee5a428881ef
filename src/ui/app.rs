use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::{engine::GameEngine, session::Session};

use super::types::{LogBuffer, StatusMessage};

/// Main application state container. Owns the engine instance and the
/// session bookkeeping around it; all game rules live in the engine.
pub struct App {
    pub(in crate::ui) engine: GameEngine,
    pub(in crate::ui) session: Option<Session>,
    pub(in crate::ui) status: Option<StatusMessage>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(engine: GameEngine, logs: LogBuffer) -> Self {
        Self {
            engine,
            session: None,
            status: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key)? {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
