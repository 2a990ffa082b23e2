use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use lyricscroll_core::scroll::{
    ContainerId, LyricsView, PolicyEvent, ScrollContainer, ScrollInput, WindowEvent,
};
use lyricscroll_core::{AppConfig, Lyrics, PlaybackClock, ScrollController};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::info;

use crate::input::Action;
use crate::theme::Theme;
use crate::viewport::LyricsViewport;

/// Seek step for the arrow keys
const SEEK_STEP_MS: f64 = 5000.0;

/// How long a status message replaces the playback line
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub lyrics: Lyrics,
    pub clock: PlaybackClock,
    pub controller: ScrollController,
    pub viewport: LyricsViewport,
    policy_rx: mpsc::UnboundedReceiver<PolicyEvent>,
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, mut lyrics: Lyrics, theme: Theme) -> Self {
        lyrics.attach_elements();

        let mut controller = ScrollController::new(&config.policy);
        let policy_rx = controller.subscribe();

        let mut viewport = LyricsViewport::new(ContainerId(0), config.scroll.clone())
            .with_layout(config.ui.compact_mode, config.ui.pip_mode);
        viewport.set_lines(&lyrics);

        let clock = PlaybackClock::for_lyrics(&lyrics);

        Self {
            config,
            theme,
            lyrics,
            clock,
            controller,
            viewport,
            policy_rx,
            status_message: None,
            status_set_at: None,
            should_quit: false,
        }
    }

    /// Start playback at `position`
    pub fn start(&mut self, position: f64, now: Instant) {
        self.clock.seek_at(now, position);
        self.clock.play_at(now);
    }

    /// Give the viewport its area for this frame, mounting it on first use
    pub fn layout(&mut self, area: Rect) {
        if !self.viewport.is_mounted() {
            if self.viewport.mount(area) {
                self.controller.initialize_scroll_events(&self.viewport);
                self.controller.handle_content_resize(area.width, area.height);
                self.controller.set_waiting_for_height(false);
            }
            return;
        }

        if self.viewport.set_area(area) {
            self.controller.handle_content_resize(area.width, area.height);
        }
    }

    /// Per-frame update: tag lines, run the scroll policy, animate
    pub fn on_frame(&mut self, now: Instant) {
        let playback = self.clock.snapshot_at(now);
        self.lyrics.update_statuses(playback.position);

        self.controller
            .scroll_to_active_line(&mut self.viewport, &self.lyrics, &playback, now);
        self.controller.flush(&mut self.viewport, now);
        self.viewport.update(now);

        while let Ok(event) = self.policy_rx.try_recv() {
            let message = format!(
                "{} = {}",
                event.name(),
                if event.value() { "on" } else { "off" }
            );
            self.set_status(message, now);
        }

        if self
            .status_set_at
            .is_some_and(|set_at| now.saturating_duration_since(set_at) >= STATUS_TIMEOUT)
        {
            self.clear_status();
        }
    }

    /// Set a status message, shown until the next key action or timeout
    pub fn set_status(&mut self, message: impl Into<String>, now: Instant) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(now);
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.viewport.needs_update() || self.controller.state().pending_scroll.is_pending()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::None {
            self.clear_status();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.clock.toggle_at(now),
            Action::SeekForward => self.clock.seek_by_at(now, SEEK_STEP_MS),
            Action::SeekBackward => self.clock.seek_by_at(now, -SEEK_STEP_MS),
            Action::ScrollUp => self.manual_scroll(-self.viewport.scroll_lines(), now),
            Action::ScrollDown => self.manual_scroll(self.viewport.scroll_lines(), now),
            Action::ScrollHalfPageUp => self.manual_scroll(-self.viewport.half_page(), now),
            Action::ScrollHalfPageDown => self.manual_scroll(self.viewport.half_page(), now),
            Action::QueueForceScroll => self.controller.queue_force_scroll(),
            Action::QueueSmoothForceScroll => self.controller.queue_smooth_force_scroll(),
            Action::ToggleForceScrolling => {
                let allow = !self.controller.force_scrolling_policy();
                self.controller.set_force_scrolling_policy(allow);
            }
            Action::ToggleCompact => {
                let compact = !self.viewport.is_compact();
                self.viewport.set_compact(compact);
                self.controller.queue_smooth_force_scroll();
            }
            Action::Reset => self.controller.reset_last_line(),
            Action::None => {}
        }
    }

    fn manual_scroll(&mut self, delta: i32, now: Instant) {
        self.viewport.scroll_by(delta);
        self.controller
            .handle_user_scroll(&mut self.viewport, ScrollInput::Wheel, now);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let inside = self.viewport.contains(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.viewport.set_hovered(inside),
            MouseEventKind::ScrollDown if inside => {
                self.manual_scroll(self.viewport.scroll_lines(), now)
            }
            MouseEventKind::ScrollUp if inside => {
                self.manual_scroll(-self.viewport.scroll_lines(), now)
            }
            MouseEventKind::Down(MouseButton::Left)
                if inside && mouse.column == self.viewport.scrollbar_column() =>
            {
                self.viewport.start_drag(mouse.row);
                self.controller
                    .handle_user_scroll(&mut self.viewport, ScrollInput::TouchMove, now);
            }
            MouseEventKind::Drag(MouseButton::Left) if self.viewport.is_dragging() => {
                self.viewport.drag_to(mouse.row);
                self.controller
                    .handle_user_scroll(&mut self.viewport, ScrollInput::TouchMove, now);
            }
            MouseEventKind::Up(MouseButton::Left) => self.viewport.end_drag(),
            _ => {}
        }
    }

    pub fn on_resize(&mut self) {
        self.viewport.recalculate();
        self.controller.handle_window_event(WindowEvent::Resized);
    }

    pub fn on_focus_gained(&mut self) {
        self.controller.handle_window_event(WindowEvent::FocusGained);
    }

    /// Detach scroll handling before the terminal is restored
    pub fn shutdown(&mut self) {
        self.controller.cleanup_scroll_events();
        self.viewport.unmount();
        info!("Lyrics view closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricscroll_core::{LyricsLine, LyricsType};

    fn app() -> App {
        let lines = (0..40)
            .map(|i| {
                let start = i as f64 * 1000.0;
                LyricsLine::new(start, start + 999.0, format!("line {i}"))
            })
            .collect();
        let mut config = AppConfig::default();
        config.scroll.smooth_enabled = false;
        App::new(
            Arc::new(config),
            Lyrics::new(LyricsType::Line, lines),
            Theme::default(),
        )
    }

    #[test]
    fn test_policy_waits_for_layout() {
        let mut app = app();
        let now = Instant::now();
        app.start(20_500.0, now);
        app.on_frame(now);
        assert!(app.controller.is_waiting_for_height());
        assert_eq!(app.viewport.scroll_offset(), 0);

        app.layout(Rect::new(0, 0, 40, 10));
        app.on_frame(now);
        assert!(!app.controller.is_waiting_for_height());
        // Line 20 centered: 20 - (10-1)/2 - (-1) = 17
        assert_eq!(app.viewport.scroll_offset(), 17);
        assert_eq!(app.status_message.as_deref(), Some("policy:waiting-for-height = off"));
    }

    #[test]
    fn test_manual_scroll_holds_auto_scroll() {
        let mut app = app();
        let start = Instant::now();
        app.start(20_500.0, start);
        app.layout(Rect::new(0, 0, 40, 10));
        app.on_frame(start);

        let t1 = start + Duration::from_millis(100);
        app.handle_action(Action::ScrollUp, t1);
        app.on_frame(t1);
        assert_eq!(app.viewport.scroll_offset(), 16);
        assert!(app.viewport.is_suppressed());

        // Next line starts at 21000 but the cooldown still holds
        let t2 = start + Duration::from_millis(600);
        app.on_frame(t2);
        assert_eq!(app.viewport.scroll_offset(), 16);

        let t3 = start + Duration::from_millis(1000);
        app.on_frame(t3);
        assert_eq!(app.viewport.scroll_offset(), 18);
        assert!(!app.viewport.is_suppressed());
    }

    #[test]
    fn test_status_message_clears() {
        let mut app = app();
        let start = Instant::now();
        app.start(5_500.0, start);
        app.layout(Rect::new(0, 0, 40, 10));
        app.on_frame(start);
        assert!(app.status_message.is_some());

        // Any bound key clears it
        app.handle_action(Action::TogglePause, start);
        assert!(app.status_message.is_none());

        let t1 = start + Duration::from_millis(100);
        app.handle_action(Action::ToggleForceScrolling, t1);
        app.on_frame(t1);
        assert_eq!(app.status_message.as_deref(), Some("policy:force-scrolling = off"));

        // Unbound keys leave it alone, the timeout does not
        app.handle_action(Action::None, t1);
        app.on_frame(start + Duration::from_millis(3000));
        assert!(app.status_message.is_some());
        app.on_frame(start + Duration::from_millis(3100));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_last_line_gets_sung() {
        let mut app = app();
        let start = Instant::now();
        app.start(39_500.0, start);
        app.layout(Rect::new(0, 0, 40, 10));
        app.on_frame(start);
        assert_eq!(app.controller.state().last_line_index, Some(39));

        let t1 = start + Duration::from_millis(600);
        app.on_frame(t1);
        assert!(app.lyrics.status_counts().all_sung());
        assert!(app.controller.state().scrolled_to_last_line);
        assert!(app.controller.state().smooth_force_scroll_queued);

        app.on_frame(t1 + Duration::from_millis(50));
        assert!(!app.controller.state().smooth_force_scroll_queued);
        assert!(!app.controller.state().pending_scroll.is_pending());
    }

    #[test]
    fn test_focus_resets_scroll_state() {
        let mut app = app();
        let now = Instant::now();
        app.start(5_500.0, now);
        app.layout(Rect::new(0, 0, 40, 10));
        app.on_frame(now);
        assert!(app.controller.state().last_line_index.is_some());

        app.on_focus_gained();
        assert!(app.controller.state().last_line_index.is_none());
    }

    #[test]
    fn test_shutdown_detaches() {
        let mut app = app();
        app.layout(Rect::new(0, 0, 40, 10));
        app.shutdown();
        assert!(app.controller.interceptor().attached_container().is_none());
        assert!(!app.viewport.is_mounted());
    }
}
