use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

/// mm:ss from milliseconds
pub fn format_time(ms: f64) -> String {
    let total = (ms.max(0.0) / 1000.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let playback = app.clock.snapshot_at(std::time::Instant::now());
        let state = app.controller.state();

        let play_str = if playback.playing { "PLAY" } else { "PAUSE" };
        let mut flags = Vec::new();
        if !app.controller.force_scrolling_policy() {
            flags.push("NO-FORCE");
        }
        if state.is_user_scrolling {
            flags.push("USER");
        }
        if app.controller.is_waiting_for_height() {
            flags.push("WAIT");
        }

        let status_color = if app.status_message.is_some() {
            theme.info
        } else {
            theme.fg0
        };
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(
                " {} | {} / {} | line {} {}",
                play_str,
                format_time(playback.position),
                format_time(app.clock.duration()),
                state
                    .last_line_index
                    .map_or_else(|| "-".to_string(), |i| (i + 1).to_string()),
                flags.join(" ")
            )
        };

        let help_hint = " q:quit space:pause ←/→:seek j/k:scroll f/s:force p:policy c:compact ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_color).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65_400.0), "1:05");
        assert_eq!(format_time(-10.0), "0:00");
    }
}
