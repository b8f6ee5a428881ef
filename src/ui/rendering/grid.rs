//! Guess grid rendering with colored feedback.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{engine::RoundPhase, scoring::Feedback, ui::app::App};

fn feedback_style(fb: Feedback) -> Style {
    match fb {
        Feedback::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        Feedback::Present => Style::default().bg(Color::Yellow).fg(Color::Black),
        Feedback::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

impl App {
    pub(in crate::ui) fn draw_grid(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let config = self.engine.config();
        let mut lines: Vec<Line> = self
            .engine
            .history()
            .iter()
            .map(|g| {
                let spans: Vec<Span> = g
                    .word
                    .chars()
                    .zip(g.feedback.iter())
                    .map(|(c, &fb)| {
                        Span::styled(format!(" {} ", c.to_ascii_uppercase()), feedback_style(fb))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        // Working row, then blanks down to the attempt budget
        if self.engine.phase() == RoundPhase::Playing {
            let mut spans: Vec<Span> = self
                .engine
                .current_guess()
                .chars()
                .map(|c| Span::raw(format!(" {} ", c.to_ascii_uppercase())))
                .collect();
            for _ in self.engine.current_guess().len()..config.word_length {
                spans.push(Span::styled(
                    " _ ",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }

        for _ in lines.len()..config.max_attempts {
            let spans: Vec<Span> = (0..config.word_length)
                .map(|_| Span::styled(" . ", Style::default().fg(Color::DarkGray)))
                .collect();
            lines.push(Line::from(spans));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Guesses")),
            area,
        );
    }
}
