//! Log panel rendering.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let logs = self.logs.lines();

        let visible = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(visible);
        let newest = logs.len().saturating_sub(1);

        // Tail of the buffer, with everything but the newest line dimmed
        let lines: Vec<Line> = logs[start..]
            .iter()
            .enumerate()
            .map(|(offset, msg)| {
                let style = if start + offset == newest {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(msg.clone(), style))
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Logs ({})", logs.len())),
            ),
            area,
        );
    }
}
