use lyricscroll_core::LineStatus;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;

pub struct LyricsWidget;

impl LyricsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        // Border turns to the warning colour while manual scrolling holds auto-scroll
        let border_color = if app.viewport.is_suppressed() {
            theme.warning
        } else {
            theme.grey0
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg0))
            .title(Span::styled(" Lyrics ", Style::default().fg(theme.accent)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Measuring happens here: the inner area is the scroll container
        app.layout(inner);

        let theme = &app.theme;
        let viewport = &app.viewport;
        let suppressed = viewport.is_suppressed();

        let mut rows: Vec<Line> = Vec::with_capacity(viewport.total_height() as usize);
        for (line, wrapped) in app.lyrics.lines.iter().zip(viewport.rows()) {
            let style = match line.status {
                LineStatus::Active => Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
                // Dim lines away from the active one unless the user is scrolling
                LineStatus::Sung if suppressed => Style::default().fg(theme.fg1),
                LineStatus::Sung => Style::default().fg(theme.sung),
                LineStatus::NotSung if suppressed => Style::default().fg(theme.fg1),
                LineStatus::NotSung => Style::default().fg(theme.upcoming),
            };
            let style = if line.dot_line {
                style.fg(theme.grey1)
            } else {
                style
            };
            rows.extend(wrapped.iter().map(|row| Line::styled(row.clone(), style)));
        }

        let paragraph = Paragraph::new(rows).scroll((viewport.scroll_offset(), 0));
        frame.render_widget(paragraph, inner);

        if viewport.scrollbar_visible() && viewport.max_scroll() > 0 {
            let mut state = ScrollbarState::new(viewport.max_scroll() as usize)
                .position(viewport.scroll_offset() as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None)
                    .thumb_style(Style::default().fg(theme.grey2)),
                inner,
                &mut state,
            );
        }
    }
}
