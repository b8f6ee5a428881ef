//! Round state machine: difficulty selection, guess entry, win/loss.

use std::fmt;

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    difficulty::{Difficulty, DifficultyConfig},
    keyboard,
    scoring::{score_guess, Feedback, Guess},
    validate::WordValidator,
    wordlist::WordProvider,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundPhase {
    SelectingDifficulty,
    Playing,
    Won,
    Lost,
}

/// Everything a caller can do to the engine, dispatched by one match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    PressLetter(char),
    Backspace,
    Submit,
    SelectDifficulty(Difficulty),
    Reset,
}

/// Why a submit was refused. The round is untouched in every case.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitError {
    InvalidLength,
    WordNotFound,
    ValidationUnavailable,
    Busy,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SubmitError::InvalidLength => "word is not the right length",
            SubmitError::WordNotFound => "word not found in dictionary",
            SubmitError::ValidationUnavailable => "word check unavailable, try again",
            SubmitError::Busy => "previous guess still being checked",
        };
        write!(f, "{msg}")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Won,
    Lost,
    Continue,
}

/// What an applied action did to the round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Input buffer changed, or the action was a silent no-op.
    Updated,
    /// A fresh round began (difficulty selected or reset).
    RoundStarted,
    Submitted(SubmitOutcome),
    Rejected(SubmitError),
}

/// One engine instance per active round; owned by the session controller,
/// never a process-wide singleton. Single-threaded: driven by one event
/// source at a time.
pub struct GameEngine {
    provider: Box<dyn WordProvider>,
    validator: Box<dyn WordValidator>,
    difficulty: Difficulty,
    config: DifficultyConfig,
    target: Option<String>,
    current_guess: String,
    history: Vec<Guess>,
    phase: RoundPhase,
    busy: bool,
}

impl GameEngine {
    pub fn new(provider: Box<dyn WordProvider>, validator: Box<dyn WordValidator>) -> Self {
        let difficulty = Difficulty::Medium;
        Self {
            provider,
            validator,
            difficulty,
            config: difficulty.config(),
            target: None,
            current_guess: String::new(),
            history: Vec::new(),
            phase: RoundPhase::SelectingDifficulty,
            busy: false,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> DifficultyConfig {
        self.config
    }

    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    pub fn target_word(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// True while a submitted word is out for validation. Callers should hold
    /// further input rather than race the pending check.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Best-known hint per guessed letter, derived from the full history.
    pub fn key_hints(&self) -> std::collections::HashMap<char, Feedback> {
        keyboard::key_hints(&self.history)
    }

    /// Single dispatch point for all caller actions.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome> {
        match action {
            Action::PressLetter(ch) => {
                self.press_letter(ch);
                Ok(ActionOutcome::Updated)
            }
            Action::Backspace => {
                self.backspace();
                Ok(ActionOutcome::Updated)
            }
            Action::Submit => {
                if self.phase != RoundPhase::Playing {
                    return Ok(ActionOutcome::Updated);
                }
                match self.submit() {
                    Ok(outcome) => Ok(ActionOutcome::Submitted(outcome)),
                    Err(kind) => Ok(ActionOutcome::Rejected(kind)),
                }
            }
            Action::SelectDifficulty(difficulty) => {
                self.select_difficulty(difficulty)?;
                Ok(ActionOutcome::RoundStarted)
            }
            Action::Reset => {
                self.reset_round()?;
                Ok(ActionOutcome::RoundStarted)
            }
        }
    }

    /// Switches tier and starts a fresh round: new target word, empty
    /// history, phase Playing.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.difficulty = difficulty;
        self.config = difficulty.config();
        self.start_round()
    }

    /// Starts a fresh round at the current difficulty. Valid from any phase.
    pub fn reset_round(&mut self) -> Result<()> {
        self.start_round()
    }

    fn start_round(&mut self) -> Result<()> {
        let target = self.provider.next_word(self.difficulty)?;
        info!(difficulty = %self.difficulty, target, "round started");

        self.target = Some(target);
        self.history.clear();
        self.current_guess.clear();
        self.busy = false;
        self.phase = RoundPhase::Playing;
        Ok(())
    }

    /// Appends a letter to the working guess. Silently ignored outside
    /// Playing, at the length bound, while busy, or for non-letters.
    pub fn press_letter(&mut self, ch: char) {
        if self.phase != RoundPhase::Playing || self.busy {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            return;
        }
        if self.current_guess.len() < self.config.word_length {
            self.current_guess.push(ch.to_ascii_lowercase());
        }
    }

    /// Removes the last letter of the working guess; silent no-op when empty.
    pub fn backspace(&mut self) {
        if self.phase != RoundPhase::Playing || self.busy {
            return;
        }
        self.current_guess.pop();
    }

    /// Scores the working guess against the target.
    ///
    /// Failures leave the working guess and the phase untouched so the UI can
    /// prompt and let the player edit. On success the guess joins the
    /// history, and the phase resolves to Won, Lost, or stays Playing.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }
        if self.current_guess.len() != self.config.word_length {
            return Err(SubmitError::InvalidLength);
        }

        // No target means no round has started, so the working guess is
        // empty and can never reach the configured length; this also keeps
        // a direct submit on an unstarted engine panic-free.
        let Some(target) = self.target.clone() else {
            return Err(SubmitError::InvalidLength);
        };

        let word = self.current_guess.clone();

        // The validity check is the one suspension point in the engine;
        // the busy flag rejects reentrant mutation while it is in flight.
        self.busy = true;
        let verdict = self.validator.is_valid_word(&word);
        self.busy = false;

        match verdict {
            Ok(true) => {}
            Ok(false) => return Err(SubmitError::WordNotFound),
            Err(err) => {
                warn!("word validation unavailable: {err:#}");
                return Err(SubmitError::ValidationUnavailable);
            }
        }

        let feedback = score_guess(&word, &target);
        let won = word.eq_ignore_ascii_case(&target);

        self.history.push(Guess::new(word.clone(), feedback));
        self.current_guess.clear();

        if won {
            info!(word, guesses = self.history.len(), "round won");
            self.phase = RoundPhase::Won;
            Ok(SubmitOutcome::Won)
        } else if self.history.len() >= self.config.max_attempts {
            info!(target, "round lost");
            self.phase = RoundPhase::Lost;
            Ok(SubmitOutcome::Lost)
        } else {
            Ok(SubmitOutcome::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn force_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
