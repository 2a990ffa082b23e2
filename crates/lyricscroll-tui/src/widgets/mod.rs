mod lyrics;
mod status_bar;

pub use lyrics::LyricsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Lay out and draw the whole screen
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    LyricsWidget::render(frame, chunks[0], app);
    StatusBarWidget::render(frame, chunks[1], app);
}
