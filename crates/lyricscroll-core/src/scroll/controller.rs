use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::events::{PolicyBroadcaster, PolicyEvent};
use super::interceptor::{ScrollInput, UserScrollInterceptor, WindowEvent};
use super::resolve::resolve_active_line;
use super::state::ScrollPolicyState;
use super::view::{ContainerId, LyricsView, ScrollAlignment, ScrollCommand, ScrollContainer};
use crate::config::PolicyConfig;
use crate::lyrics::{ElementId, EnhancedItem, Lyrics, StatusCounts};
use crate::playback::PlaybackSource;

/// Auto-scroll policy engine for one lyrics view
///
/// Owns the policy state, the user-scroll interceptor and the policy event
/// subscribers. Everything runs on the host's event loop; the controller
/// never blocks or spawns.
#[derive(Debug)]
pub struct ScrollController {
    state: ScrollPolicyState,
    interceptor: UserScrollInterceptor,
    events: PolicyBroadcaster,
    cooldown: Duration,
    drastic_jump_threshold: f64,
    dot_line_delay: Duration,
    center_offset: i32,
    top_offset: i32,
    pip_top_offset: i32,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(&PolicyConfig::default())
    }
}

impl ScrollController {
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            state: ScrollPolicyState::new(config.allow_force_scrolling),
            interceptor: UserScrollInterceptor::new(),
            events: PolicyBroadcaster::new(),
            cooldown: Duration::from_millis(config.user_scroll_cooldown_ms),
            drastic_jump_threshold: config.drastic_jump_threshold_ms,
            dot_line_delay: Duration::from_millis(config.dot_line_delay_ms),
            center_offset: config.center_offset,
            top_offset: config.top_offset,
            pip_top_offset: config.pip_top_offset,
        }
    }

    pub fn state(&self) -> &ScrollPolicyState {
        &self.state
    }

    pub fn interceptor(&self) -> &UserScrollInterceptor {
        &self.interceptor
    }

    /// Receive `policy:*` change notifications
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PolicyEvent> {
        self.events.subscribe()
    }

    // ---- lifecycle ----

    /// Attach manual-scroll detection to a mounted container.
    /// Returns `false` when the container has no scroll element.
    pub fn initialize_scroll_events<C: ScrollContainer + ?Sized>(&mut self, container: &C) -> bool {
        match container.scroll_element() {
            Some(id) => {
                self.interceptor.attach(id);
                true
            }
            None => {
                debug!("Scroll container not mounted, skipping scroll event setup");
                false
            }
        }
    }

    /// Detach all listeners and drop one-shot requests
    pub fn cleanup_scroll_events(&mut self) {
        self.state.pending_scroll.cancel();
        self.interceptor.detach();
        self.state.clear_queues();
        self.state.clear_edge_latches();
    }

    // ---- interceptor entry points ----

    /// Manual wheel or drag input on the view's container
    pub fn handle_user_scroll<V: LyricsView + ?Sized>(
        &mut self,
        view: &mut V,
        input: ScrollInput,
        now: Instant,
    ) -> bool {
        let Some(container) = view.scroll_element() else {
            return false;
        };
        self.interceptor
            .on_input(&mut self.state, container, input, view, now)
    }

    pub fn handle_window_event(&mut self, event: WindowEvent) {
        if self.interceptor.on_window_event(event) {
            self.reset_last_line();
        }
    }

    /// Size measurement of the lyrics content area
    pub fn handle_content_resize(&mut self, width: u16, height: u16) {
        if self.interceptor.on_content_resize(width, height) {
            self.reset_last_line();
        }
    }

    // ---- one-shot triggers and toggles ----

    pub fn queue_force_scroll(&mut self) {
        self.state.force_scroll_queued = true;
    }

    pub fn queue_smooth_force_scroll(&mut self) {
        self.state.smooth_force_scroll_queued = true;
    }

    pub fn reset_last_line(&mut self) {
        debug!("Resetting scroll state");
        self.state.reset();
    }

    pub fn set_force_scrolling_policy(&mut self, allow: bool) {
        self.state.allow_force_scrolling = allow;
        self.events.broadcast(PolicyEvent::ForceScrolling(allow));
    }

    pub fn force_scrolling_policy(&self) -> bool {
        self.state.allow_force_scrolling
    }

    pub fn set_waiting_for_height(&mut self, waiting: bool) {
        self.state.waiting_for_height = waiting;
        self.events.broadcast(PolicyEvent::WaitingForHeight(waiting));
    }

    pub fn is_waiting_for_height(&self) -> bool {
        self.state.waiting_for_height
    }

    // ---- per-tick policy ----

    /// Decide whether, where and how to scroll for the current playback tick
    ///
    /// Schedules at most one scroll write; [`Self::flush`] executes it.
    pub fn scroll_to_active_line<V, P>(
        &mut self,
        view: &mut V,
        lyrics: &Lyrics,
        playback: &P,
        now: Instant,
    ) where
        V: LyricsView + ?Sized,
        P: PlaybackSource + ?Sized,
    {
        if self.state.waiting_for_height {
            return;
        }
        if !lyrics.lyrics_type.supports_scrolling() {
            return;
        }
        let Some(container) = view.scroll_element() else {
            return;
        };
        if lyrics.is_empty() {
            return;
        }

        let position = playback.position();
        let current = resolve_active_line(&lyrics.lines, position);
        let current_index = current.map(|item| item.index);
        let counts = lyrics.status_counts();

        let queued = self.state.force_scroll_queued;
        let first_run = self.state.last_line_index.is_none();
        let paused_and_moved = !playback.is_playing() && self.state.last_position != position;
        let drastic_jump = self.state.last_position != 0.0
            && (position - self.state.last_position).abs() > self.drastic_jump_threshold;

        if queued || first_run || paused_and_moved || drastic_jump {
            if !self.state.allow_force_scrolling {
                self.state.last_position = position;
                return;
            }
            let Some((index, element)) = force_target(lyrics, counts, current) else {
                return;
            };
            let instant = queued || first_run || drastic_jump;
            debug!(
                line = index,
                position,
                instant,
                queued,
                first_run,
                drastic_jump,
                "Force scroll"
            );
            self.state.is_user_scrolling = false;
            self.state.last_line_index = Some(index);
            let command = self.command(view, container, element, index, instant);
            self.state.pending_scroll.schedule(command, now, false);
            self.state.force_scroll_queued = false;
            self.state.last_position = position;
            return;
        }

        self.state.last_position = position;

        if self.state.smooth_force_scroll_queued {
            if !self.state.allow_force_scrolling {
                return;
            }
            let Some((index, element)) = force_target(lyrics, counts, current) else {
                return;
            };
            debug!(line = index, "Smooth force scroll");
            self.state.is_user_scrolling = false;
            self.state.last_line_index = Some(index);
            let command = self.command(view, container, element, index, false);
            self.state.pending_scroll.schedule(command, now, false);
            self.state.smooth_force_scroll_queued = false;
            return;
        }

        if counts.all_not_sung() || counts.one_active_none_sung() {
            if !self.state.scrolled_to_first_line {
                self.state.smooth_force_scroll_queued = true;
                self.state.scrolled_to_first_line = true;
            }
            return;
        }

        if counts.all_sung() {
            if !self.state.scrolled_to_last_line {
                self.state.smooth_force_scroll_queued = true;
                self.state.scrolled_to_last_line = true;
            }
            return;
        }

        if current_index == self.state.last_line_index {
            return;
        }

        let Some(item) = current else {
            return;
        };
        let Some(element) = item.element() else {
            return;
        };

        if let Some(last_scroll) = self.state.last_user_scroll_time {
            let elapsed = now.saturating_duration_since(last_scroll);
            if elapsed <= self.cooldown {
                debug!(
                    line = item.index,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "User scrolled recently, holding auto-scroll"
                );
                return;
            }
        }

        self.state.is_user_scrolling = false;
        if !view.set_scroll_suppressed(false) {
            debug!("No lyrics content to clear the scroll suppression hint from");
        }
        self.state.last_line_index = Some(item.index);

        let follows_dot_line = item
            .index
            .checked_sub(1)
            .and_then(|prev| lyrics.lines.get(prev))
            .is_some_and(|prev| prev.dot_line);
        let not_before = if follows_dot_line {
            now + self.dot_line_delay
        } else {
            now
        };

        debug!(line = item.index, delayed = follows_dot_line, "Scroll to active line");
        let command = self.command(view, container, element, item.index, false);
        self.state.pending_scroll.schedule(command, not_before, true);
    }

    /// Execute the pending scroll write if it is due
    ///
    /// Call once per rendered frame. Returns the executed command.
    pub fn flush<V: LyricsView + ?Sized>(&mut self, view: &mut V, now: Instant) -> Option<ScrollCommand> {
        let pending = self.state.pending_scroll.take_due(now)?;
        if view.scroll_element() != Some(pending.command.container) {
            warn!(
                line = pending.command.line_index,
                "Scroll container changed before pending scroll executed, dropping it"
            );
            return None;
        }

        view.scroll_into_view(&pending.command, now);
        if pending.clears_edge_latches {
            self.state.clear_edge_latches();
        }
        Some(pending.command)
    }

    fn command<V: LyricsView + ?Sized>(
        &self,
        view: &V,
        container: ContainerId,
        element: ElementId,
        line_index: usize,
        instant: bool,
    ) -> ScrollCommand {
        let (alignment, offset) = if view.is_compact() {
            let offset = if view.is_pip() {
                self.pip_top_offset
            } else {
                self.top_offset
            };
            (ScrollAlignment::Top, offset)
        } else {
            (ScrollAlignment::Center, self.center_offset)
        };

        ScrollCommand {
            container,
            element,
            line_index,
            alignment,
            offset,
            instant,
        }
    }
}

/// Last line once everything is sung, otherwise the active line
fn force_target(
    lyrics: &Lyrics,
    counts: StatusCounts,
    current: Option<EnhancedItem<'_>>,
) -> Option<(usize, ElementId)> {
    if counts.all_sung() {
        let index = lyrics.lines.len().checked_sub(1)?;
        let element = lyrics.lines[index].element?;
        Some((index, element))
    } else {
        let item = current?;
        Some((item.index, item.element()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::{LyricsLine, LyricsType};
    use crate::playback::PlaybackSnapshot;
    use crate::scroll::testing::FakeView;

    /// Six back-to-back one-second lines: line i covers [i*1000, i*1000+999]
    fn song() -> Lyrics {
        let lines = (0..6)
            .map(|i| {
                let start = i as f64 * 1000.0;
                LyricsLine::new(start, start + 999.0, format!("line {i}"))
            })
            .collect();
        let mut lyrics = Lyrics::new(LyricsType::Line, lines);
        lyrics.attach_elements();
        lyrics
    }

    struct Harness {
        controller: ScrollController,
        view: FakeView,
        lyrics: Lyrics,
        start: Instant,
    }

    impl Harness {
        fn new(lyrics: Lyrics) -> Self {
            let mut controller = ScrollController::default();
            let view = FakeView::new();
            controller.initialize_scroll_events(&view);
            controller.set_waiting_for_height(false);
            Self {
                controller,
                view,
                lyrics,
                start: Instant::now(),
            }
        }

        fn at(&self, ms: u64) -> Instant {
            self.start + Duration::from_millis(ms)
        }

        /// Tick without flushing
        fn tick_only(&mut self, position: f64, playing: bool, at_ms: u64) {
            self.lyrics.update_statuses(position);
            let playback = PlaybackSnapshot { position, playing };
            let now = self.at(at_ms);
            self.controller
                .scroll_to_active_line(&mut self.view, &self.lyrics, &playback, now);
        }

        /// Tick then flush in the same frame
        fn tick(&mut self, position: f64, at_ms: u64) -> Option<ScrollCommand> {
            self.tick_only(position, true, at_ms);
            self.flush_at(at_ms)
        }

        fn flush_at(&mut self, at_ms: u64) -> Option<ScrollCommand> {
            let now = self.at(at_ms);
            self.controller.flush(&mut self.view, now)
        }

        fn wheel(&mut self, at_ms: u64) {
            let now = self.at(at_ms);
            self.controller
                .handle_user_scroll(&mut self.view, ScrollInput::Wheel, now);
        }
    }

    #[test]
    fn test_waiting_for_height_blocks_everything() {
        let mut controller = ScrollController::default();
        let mut view = FakeView::new();
        let mut lyrics = song();
        lyrics.update_statuses(1500.0);
        assert!(controller.is_waiting_for_height());

        let now = Instant::now();
        controller.scroll_to_active_line(&mut view, &lyrics, &PlaybackSnapshot::playing(1500.0), now);
        assert!(controller.flush(&mut view, now).is_none());
        assert!(controller.state().last_line_index.is_none());
    }

    #[test]
    fn test_first_tick_force_scrolls_instantly() {
        let mut h = Harness::new(song());
        let cmd = h.tick(1500.0, 0).unwrap();
        assert_eq!(cmd.line_index, 1);
        assert!(cmd.instant);
        assert_eq!(cmd.alignment, ScrollAlignment::Center);
        assert_eq!(h.controller.state().last_line_index, Some(1));
    }

    #[test]
    fn test_unchanged_line_is_noop() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        assert!(h.tick(1550.0, 50).is_none());
        assert!(h.tick(1600.0, 100).is_none());
        assert_eq!(h.view.executed.len(), 1);
    }

    #[test]
    fn test_progression_scrolls_smoothly() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        let cmd = h.tick(2100.0, 600).unwrap();
        assert_eq!(cmd.line_index, 2);
        assert!(!cmd.instant);
        assert_eq!(h.controller.state().last_line_index, Some(2));
    }

    #[test]
    fn test_cooldown_respected() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.wheel(100);
        assert!(h.controller.state().is_user_scrolling);
        assert!(h.view.suppressed);

        // 400ms after manual input, new line: hold
        assert!(h.tick(2100.0, 500).is_none());
        assert_eq!(h.controller.state().last_line_index, Some(1));
        assert!(h.controller.state().is_user_scrolling);
    }

    #[test]
    fn test_cooldown_expired() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.wheel(100);

        let cmd = h.tick(2100.0, 900).unwrap();
        assert_eq!(cmd.line_index, 2);
        assert!(!h.controller.state().is_user_scrolling);
        assert!(!h.view.suppressed);
    }

    #[test]
    fn test_drastic_jump_forces_instant_scroll_mid_cooldown() {
        let mut h = Harness::new(song());
        h.tick(1000.0, 0).unwrap();
        h.wheel(50);

        let cmd = h.tick(2200.0, 100).unwrap();
        assert_eq!(cmd.line_index, 2);
        assert!(cmd.instant);
        assert!(!h.controller.state().is_user_scrolling);
    }

    #[test]
    fn test_small_jump_is_not_drastic() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.wheel(50);

        // 800ms delta lands on a new line but stays inside the cooldown
        assert!(h.tick(2300.0, 100).is_none());
        assert_eq!(h.controller.state().last_line_index, Some(1));
    }

    #[test]
    fn test_reset_forces_next_tick() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.wheel(100);

        h.controller.reset_last_line();
        let cmd = h.tick(1600.0, 150).unwrap();
        assert!(cmd.instant);
        assert_eq!(cmd.line_index, 1);
    }

    #[test]
    fn test_reset_cancels_pending_scroll() {
        let mut h = Harness::new(song());
        h.tick_only(1500.0, true, 0);
        assert!(h.controller.state().pending_scroll.is_pending());

        h.controller.reset_last_line();
        assert!(h.flush_at(0).is_none());
        assert!(h.view.executed.is_empty());
    }

    #[test]
    fn test_queued_force_scroll_is_one_shot() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();

        h.controller.queue_force_scroll();
        let cmd = h.tick(1550.0, 50).unwrap();
        assert!(cmd.instant);
        assert!(!h.controller.state().force_scroll_queued);
        assert!(h.tick(1600.0, 100).is_none());
    }

    #[test]
    fn test_queued_smooth_force_scroll() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();

        h.controller.queue_smooth_force_scroll();
        let cmd = h.tick(1550.0, 50).unwrap();
        assert!(!cmd.instant);
        assert_eq!(cmd.line_index, 1);
        assert!(!h.controller.state().smooth_force_scroll_queued);
    }

    #[test]
    fn test_paused_seek_scrolls_smoothly() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();

        h.tick_only(2200.0, false, 100);
        let cmd = h.flush_at(100).unwrap();
        assert_eq!(cmd.line_index, 2);
        assert!(!cmd.instant);
    }

    #[test]
    fn test_force_policy_disallowed() {
        let mut h = Harness::new(song());
        let mut rx = h.controller.subscribe();
        h.controller.set_force_scrolling_policy(false);
        assert_eq!(rx.try_recv().unwrap(), PolicyEvent::ForceScrolling(false));
        assert!(!h.controller.force_scrolling_policy());

        assert!(h.tick(1500.0, 0).is_none());
        assert_eq!(h.controller.state().last_position, 1500.0);
        assert!(h.controller.state().last_line_index.is_none());

        h.controller.set_force_scrolling_policy(true);
        assert!(h.tick(1550.0, 50).is_some());
    }

    #[test]
    fn test_waiting_for_height_event() {
        let mut controller = ScrollController::default();
        let mut rx = controller.subscribe();
        controller.set_waiting_for_height(false);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.name(), "policy:waiting-for-height");
        assert!(!event.value());
    }

    #[test]
    fn test_all_sung_latch_queues_once() {
        let mut h = Harness::new(song());
        h.tick(5500.0, 0).unwrap();

        // Everything sung: latch and queue, no scroll this tick
        assert!(h.tick(6200.0, 700).is_none());
        assert!(h.controller.state().scrolled_to_last_line);

        // Queued smooth force scroll lands on the last line
        let cmd = h.tick(6300.0, 800).unwrap();
        assert_eq!(cmd.line_index, 5);
        assert!(!cmd.instant);

        for step in 1..5 {
            assert!(h.tick(6300.0 + step as f64 * 100.0, 800 + step * 100).is_none());
        }
        assert_eq!(h.view.executed.len(), 2);
    }

    #[test]
    fn test_first_line_latch() {
        let mut lines: Vec<LyricsLine> = (0..4)
            .map(|i| {
                let start = 1000.0 + i as f64 * 1000.0;
                LyricsLine::new(start, start + 999.0, "")
            })
            .collect();
        lines[0].text = "intro".into();
        let mut lyrics = Lyrics::new(LyricsType::Line, lines);
        lyrics.attach_elements();
        let mut h = Harness::new(lyrics);

        // Before the first line nothing is active: the forced target is missing
        assert!(h.tick(100.0, 0).is_none());
        assert!(h.controller.state().last_line_index.is_none());

        // First line becomes active: first-run force scroll
        assert_eq!(h.tick(1100.0, 1000).unwrap().line_index, 0);

        // One active, none sung: latch + queue, then one smooth scroll
        assert!(h.tick(1200.0, 1100).is_none());
        let cmd = h.tick(1300.0, 1200).unwrap();
        assert!(!cmd.instant);
        assert!(h.tick(1400.0, 1300).is_none());
        assert!(h.tick(1500.0, 1400).is_none());
        assert_eq!(h.view.executed.len(), 2);
    }

    #[test]
    fn test_progression_clears_edge_latches() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.controller.state.scrolled_to_last_line = true;
        h.controller.state.scrolled_to_first_line = true;

        h.tick(2100.0, 600).unwrap();
        assert!(!h.controller.state().scrolled_to_last_line);
        assert!(!h.controller.state().scrolled_to_first_line);
    }

    #[test]
    fn test_dot_line_delays_scroll() {
        let mut lyrics = song();
        lyrics.lines[1].dot_line = true;
        let mut h = Harness::new(lyrics);
        h.tick(1500.0, 0).unwrap();

        assert!(h.tick(2100.0, 600).is_none());
        assert_eq!(h.controller.state().last_line_index, Some(2));
        assert!(h.flush_at(839).is_none());

        let cmd = h.flush_at(840).unwrap();
        assert_eq!(cmd.line_index, 2);
        // The view is handed the frame time of the flush, not wall time
        let executed_at = h.view.executed.last().map(|(_, at)| *at);
        assert_eq!(executed_at, Some(h.at(840)));
    }

    #[test]
    fn test_normal_scroll_without_anchor_still_scrolls() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();
        h.wheel(100);
        assert!(h.view.suppressed);

        h.view.anchor_present = false;
        let cmd = h.tick(2100.0, 900).unwrap();
        assert_eq!(cmd.line_index, 2);
        assert!(!h.controller.state().is_user_scrolling);
        // The hint could not be cleared without its anchor
        assert!(h.view.suppressed);
    }

    #[test]
    fn test_newer_scroll_supersedes_delayed_one() {
        let mut lyrics = song();
        lyrics.lines[1].dot_line = true;
        let mut h = Harness::new(lyrics);
        h.tick(1500.0, 0).unwrap();

        // Delayed scroll to line 2 pending, then a seek lands on line 4
        h.tick_only(2100.0, true, 600);
        let cmd = h.tick(4200.0, 700).unwrap();
        assert_eq!(cmd.line_index, 4);

        assert!(h.flush_at(1000).is_none());
        let lines: Vec<_> = h.view.executed.iter().map(|(c, _)| c.line_index).collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn test_compact_and_pip_alignment() {
        let mut h = Harness::new(song());
        h.view.compact = true;
        let cmd = h.tick(1500.0, 0).unwrap();
        assert_eq!(cmd.alignment, ScrollAlignment::Top);
        assert_eq!(cmd.offset, PolicyConfig::default().top_offset);

        h.view.pip = true;
        h.controller.queue_force_scroll();
        let cmd = h.tick(1550.0, 50).unwrap();
        assert_eq!(cmd.offset, PolicyConfig::default().pip_top_offset);
    }

    #[test]
    fn test_disabled_lyrics_types_and_missing_collaborators() {
        let mut h = Harness::new(song());
        h.lyrics.lyrics_type = LyricsType::Static;
        assert!(h.tick(1500.0, 0).is_none());

        h.lyrics.lyrics_type = LyricsType::Line;
        h.view.container = None;
        assert!(h.tick(1500.0, 0).is_none());

        h.view.container = Some(ContainerId(0));
        h.lyrics.detach_elements();
        assert!(h.tick(1500.0, 0).is_none());
        assert!(h.controller.state().last_line_index.is_none());

        let mut empty = Harness::new(Lyrics::new(LyricsType::Line, Vec::new()));
        assert!(empty.tick(0.0, 0).is_none());
    }

    #[test]
    fn test_pending_scroll_dropped_when_container_changes() {
        let mut h = Harness::new(song());
        h.tick_only(1500.0, true, 0);
        h.view.container = Some(ContainerId(9));
        assert!(h.flush_at(0).is_none());
        assert!(h.view.executed.is_empty());
    }

    #[test]
    fn test_window_and_content_events_reset() {
        let mut h = Harness::new(song());
        h.tick(1500.0, 0).unwrap();

        h.controller.handle_window_event(WindowEvent::FocusGained);
        assert!(h.controller.state().last_line_index.is_none());

        h.tick(1500.0, 10).unwrap();
        h.controller.handle_content_resize(80, 20);
        assert!(h.controller.state().last_line_index.is_none());

        h.tick(1500.0, 20).unwrap();
        h.controller.handle_content_resize(80, 20);
        assert_eq!(h.controller.state().last_line_index, Some(1));
    }

    #[test]
    fn test_cleanup_detaches_and_clears() {
        let mut h = Harness::new(song());
        h.tick_only(1500.0, true, 0);
        h.controller.queue_force_scroll();
        h.controller.queue_smooth_force_scroll();

        h.controller.cleanup_scroll_events();
        assert!(!h.controller.state().pending_scroll.is_pending());
        assert!(!h.controller.state().force_scroll_queued);
        assert!(!h.controller.state().smooth_force_scroll_queued);
        assert!(h.controller.interceptor().attached_container().is_none());

        // Input no longer reaches the policy
        let now = h.at(10);
        assert!(!h
            .controller
            .handle_user_scroll(&mut h.view, ScrollInput::Wheel, now));
        h.controller.handle_window_event(WindowEvent::Resized);
        assert_eq!(h.controller.state().last_line_index, Some(1));
    }

    #[test]
    fn test_initialize_requires_mounted_container() {
        let mut controller = ScrollController::default();
        let mut view = FakeView::new();
        view.container = None;
        assert!(!controller.initialize_scroll_events(&view));

        view.container = Some(ContainerId(3));
        assert!(controller.initialize_scroll_events(&view));
        assert_eq!(controller.interceptor().attached_container(), Some(ContainerId(3)));
    }
}
