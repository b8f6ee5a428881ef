//! UI module tests.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    app::App,
    handlers::{InputHandler, RoundHandler},
    types::{LogBuffer, StatusMessage},
};
use crate::{
    difficulty::Difficulty,
    engine::{GameEngine, RoundPhase},
    validate::WordValidator,
    wordlist::WordProvider,
};

/// Cycles through a fixed word list so tests know every target.
struct CyclingProvider {
    words: Vec<&'static str>,
    next: usize,
}

impl WordProvider for CyclingProvider {
    fn next_word(&mut self, _difficulty: Difficulty) -> Result<String> {
        let word = self.words[self.next % self.words.len()];
        self.next += 1;
        Ok(word.to_string())
    }
}

struct AcceptAll;

impl WordValidator for AcceptAll {
    fn is_valid_word(&self, _word: &str) -> Result<bool> {
        Ok(true)
    }
}

fn create_test_app() -> App {
    let provider = CyclingProvider {
        words: vec!["rate", "tale", "gate"],
        next: 0,
    };
    let engine = GameEngine::new(Box::new(provider), Box::new(AcceptAll));
    App::new(engine, LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    InputHandler::new(app).handle_key(key).unwrap();
}

fn type_word(app: &mut App, word: &str) {
    for c in word.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_starts_at_menu() {
        let app = create_test_app();

        assert!(app.session.is_none());
        assert!(app.status.is_none());
        assert_eq!(app.engine.phase(), RoundPhase::SelectingDifficulty);
    }

    #[test]
    fn test_log_buffer_caps_lines() {
        let logs = LogBuffer::new();
        for i in 0..350 {
            logs.push(format!("Message {i}"));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        // Oldest lines dropped first
        assert_eq!(lines[0], "Message 50");
    }
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn test_menu_key_starts_session() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));

        assert!(app.session.is_some());
        assert_eq!(app.engine.difficulty(), Difficulty::Easy);
        assert_eq!(app.engine.phase(), RoundPhase::Playing);
    }

    #[test]
    fn test_typing_and_backspace_edit_guess() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));

        type_word(&mut app, "rat");
        assert_eq!(app.engine.current_guess(), "rat");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.current_guess(), "ra");
    }

    #[test]
    fn test_short_guess_rejected_with_message() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));

        type_word(&mut app, "rat");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.status, Some(StatusMessage::Error(_))));
        assert!(app.engine.history().is_empty());
        assert_eq!(app.engine.current_guess(), "rat");
    }

    #[test]
    fn test_winning_round_and_advancing() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));

        type_word(&mut app, "rate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.phase(), RoundPhase::Won);
        assert_eq!(app.session.as_ref().unwrap().solved(), 1);
        assert!(matches!(app.status, Some(StatusMessage::Info(_))));

        // Enter after the round advances to the next target
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.phase(), RoundPhase::Playing);
        assert_eq!(app.engine.target_word(), Some("tale"));
        assert!(app.engine.history().is_empty());
    }

    #[test]
    fn test_losing_round_records_loss() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));

        for _ in 0..6 {
            type_word(&mut app, "gaze");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.engine.phase(), RoundPhase::Lost);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.played(), 1);
        assert_eq!(session.solved(), 0);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('2'));
        assert!(app.session.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_ctrl_q_requests_exit() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(InputHandler::new(&mut app).handle_key(key).unwrap());
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_log_panel_tails_buffer_with_count() {
        let app = create_test_app();
        app.logs.push("first event".to_string());
        app.logs.push("second event".to_string());

        let text = render_to_text(&app, 60, 24);
        assert!(text.contains("Logs (2)"));
        assert!(text.contains("first event"));
        assert!(text.contains("second event"));
    }

    #[test]
    fn test_menu_screen_lists_tiers() {
        let app = create_test_app();
        let text = render_to_text(&app, 60, 24);

        assert!(text.contains("4-letter words, 6 attempts"));
        assert!(text.contains("8-letter words, 8 attempts"));
    }
}

#[cfg(test)]
mod round_handler_tests {
    use super::*;

    #[test]
    fn test_session_completion_ends_at_menu() {
        let mut app = create_test_app();
        RoundHandler::new(&mut app)
            .start_session(Difficulty::Easy)
            .unwrap();

        // Burn through the whole session quota
        for _ in 0..crate::session::WORDS_PER_SESSION {
            app.session.as_mut().unwrap().record_round(true);
        }
        RoundHandler::new(&mut app).advance().unwrap();

        assert!(app.session.is_none());
    }

    #[test]
    fn test_advance_mid_session_resets_round() {
        let mut app = create_test_app();
        RoundHandler::new(&mut app)
            .start_session(Difficulty::Easy)
            .unwrap();

        type_word(&mut app, "tal");
        RoundHandler::new(&mut app).advance().unwrap();

        assert!(app.session.is_some());
        assert_eq!(app.engine.current_guess(), "");
        assert_eq!(app.engine.target_word(), Some("tale"));
    }
}
