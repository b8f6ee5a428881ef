use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    engine::RoundPhase,
    ui::{app::App, types::StatusMessage},
};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (text, color) = match &self.status {
            Some(StatusMessage::Error(msg)) => (msg.clone(), Color::Red),
            Some(StatusMessage::Info(msg)) => (msg.clone(), Color::Green),
            None => {
                let session = self
                    .session
                    .as_ref()
                    .map(|s| format!("{} solved of {}", s.solved(), s.played()))
                    .unwrap_or_default();

                let text = match self.engine.phase() {
                    RoundPhase::Playing => format!(
                        "{} | attempts left: {} | {} | Enter = submit, Esc = menu, Ctrl+Q = quit",
                        self.engine.difficulty(),
                        self.engine.attempts_left(),
                        session,
                    ),
                    _ => format!("{} | {}", self.engine.difficulty(), session),
                };
                (text, Color::White)
            }
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
