mod difficulty_menu;
mod grid;
mod keyboard;
mod logs;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        if self.session.is_none() {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(10), Constraint::Length(6)])
                .split(f.area());

            self.draw_difficulty_menu(f, layout[0]);
            self.draw_logs(f, layout[1]);
            return;
        }

        let grid_height = self.engine.config().max_attempts as u16 + 2;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // status
                Constraint::Length(grid_height), // guess grid
                Constraint::Length(5),           // keyboard hints
                Constraint::Min(4),              // logs
            ])
            .split(f.area());

        self.draw_status(f, layout[0]);
        self.draw_grid(f, layout[1]);
        self.draw_keyboard(f, layout[2]);
        self.draw_logs(f, layout[3]);
    }
}
