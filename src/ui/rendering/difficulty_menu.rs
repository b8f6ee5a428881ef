//! Difficulty selection screen.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{difficulty::Difficulty, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_difficulty_menu(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines = vec![
            Line::from("Pick a difficulty to start a session:"),
            Line::from(""),
        ];

        for (key, difficulty, color) in [
            ('1', Difficulty::Easy, Color::Green),
            ('2', Difficulty::Medium, Color::Yellow),
            ('3', Difficulty::Hard, Color::Red),
        ] {
            let config = difficulty.config();
            lines.push(Line::from(vec![
                Span::styled(format!("  [{key}] "), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:<8}", difficulty.to_string()),
                    Style::default().fg(color),
                ),
                Span::raw(format!(
                    "{}-letter words, {} attempts",
                    config.word_length, config.max_attempts
                )),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from("Ctrl+Q = quit"));

        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Wordle Arena")),
            area,
        );
    }
}
