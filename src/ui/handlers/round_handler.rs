//! Session-level round sequencing.

use anyhow::Result;

use crate::{
    difficulty::Difficulty,
    engine::{RoundPhase, SubmitOutcome},
    session::Session,
};

use super::super::{app::App, types::StatusMessage};

/// Helper struct driving rounds through a session: starting one, recording
/// outcomes, advancing to the next word, and ending back at the menu.
pub struct RoundHandler<'a> {
    app: &'a mut App,
}

impl<'a> RoundHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<()> {
        self.app.engine.select_difficulty(difficulty)?;
        self.app.session = Some(Session::new(difficulty));
        self.app.status = None;
        self.app.log(format!("Session started on {difficulty}"));
        Ok(())
    }

    /// Called after every scored guess to keep the session tally current.
    pub fn record_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Won => {
                let guesses = self.app.engine.history().len();
                if let Some(session) = self.app.session.as_mut() {
                    session.record_round(true);
                }
                self.app.log(format!("Round won in {guesses} guesses"));
                self.app.status = Some(StatusMessage::Info(format!(
                    "You got it in {guesses}! Enter for the next word"
                )));
            }
            SubmitOutcome::Lost => {
                let target = self
                    .app
                    .engine
                    .target_word()
                    .unwrap_or("?")
                    .to_uppercase();
                if let Some(session) = self.app.session.as_mut() {
                    session.record_round(false);
                }
                self.app.log(format!("Round lost, word was {target}"));
                self.app.status = Some(StatusMessage::Info(format!(
                    "Out of guesses! The word was {target}. Enter for the next word"
                )));
            }
            SubmitOutcome::Continue => {
                self.app.status = None;
            }
        }
    }

    /// Next word, or back to the difficulty menu once the session is done.
    pub fn advance(&mut self) -> Result<()> {
        let complete = self
            .app
            .session
            .as_ref()
            .is_some_and(|s| s.is_complete());

        if complete {
            self.end_session();
            return Ok(());
        }

        self.app.engine.reset_round()?;
        self.app.status = None;
        Ok(())
    }

    pub fn end_session(&mut self) {
        if let Some(session) = self.app.session.take() {
            self.app.log(format!(
                "Session over: {}/{} solved on {}",
                session.solved(),
                session.played(),
                session.difficulty()
            ));
        }
        self.app.status = None;
    }

    pub fn round_over(&self) -> bool {
        matches!(
            self.app.engine.phase(),
            RoundPhase::Won | RoundPhase::Lost
        )
    }
}
