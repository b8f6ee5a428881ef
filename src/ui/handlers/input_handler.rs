//! Keyboard input translation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    difficulty::Difficulty,
    engine::{Action, ActionOutcome},
};

use super::super::{app::App, types::StatusMessage};
use super::RoundHandler;

/// Helper struct turning key events into engine actions. Returns `true`
/// from `handle_key` when the app should exit.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return Ok(true);
        }

        if self.app.session.is_none() {
            self.handle_menu_key(key)?;
            return Ok(false);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                self.app.log("Next word requested");
                RoundHandler::new(self.app).advance()?;
            }

            (KeyCode::Esc, _) => {
                self.app.log("Session abandoned");
                RoundHandler::new(self.app).end_session();
            }

            (KeyCode::Enter, _) => {
                if RoundHandler::new(self.app).round_over() {
                    RoundHandler::new(self.app).advance()?;
                } else {
                    self.submit_guess()?;
                }
            }

            (KeyCode::Backspace, _) => {
                self.app.engine.apply(Action::Backspace)?;
            }

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.app.engine.apply(Action::PressLetter(c))?;
            }

            _ => {}
        }

        Ok(false)
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        let difficulty = match key.code {
            KeyCode::Char('1' | 'e' | 'E') => Some(Difficulty::Easy),
            KeyCode::Char('2' | 'm' | 'M') => Some(Difficulty::Medium),
            KeyCode::Char('3' | 'h' | 'H') => Some(Difficulty::Hard),
            _ => None,
        };

        if let Some(difficulty) = difficulty {
            RoundHandler::new(self.app).start_session(difficulty)?;
        }
        Ok(())
    }

    fn submit_guess(&mut self) -> Result<()> {
        let word = self.app.engine.current_guess().to_string();

        match self.app.engine.apply(Action::Submit)? {
            ActionOutcome::Submitted(outcome) => {
                self.app.log(format!("Guess submitted: {word}"));
                RoundHandler::new(self.app).record_outcome(outcome);
            }
            ActionOutcome::Rejected(kind) => {
                self.app.log(format!("Guess rejected ({kind}): {word}"));
                self.app.status = Some(StatusMessage::Error(kind.to_string()));
            }
            ActionOutcome::Updated | ActionOutcome::RoundStarted => {}
        }
        Ok(())
    }
}
