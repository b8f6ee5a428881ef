//! On-screen keyboard colored by aggregate hints.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{scoring::Feedback, ui::app::App};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

impl App {
    pub(in crate::ui) fn draw_keyboard(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let hints = self.engine.key_hints();

        let lines: Vec<Line> = KEY_ROWS
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let mut spans = vec![Span::raw(" ".repeat(row_idx))];
                spans.extend(row.chars().map(|c| {
                    let style = match hints.get(&c) {
                        Some(Feedback::Correct) => {
                            Style::default().bg(Color::Green).fg(Color::Black)
                        }
                        Some(Feedback::Present) => {
                            Style::default().bg(Color::Yellow).fg(Color::Black)
                        }
                        Some(Feedback::Absent) => {
                            Style::default().bg(Color::DarkGray).fg(Color::White)
                        }
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                }));
                Line::from(spans)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Keyboard")),
            area,
        );
    }
}
