use std::time::Instant;

use super::deferral::DeferredScroll;

/// Mutable bookkeeping of one lyrics view's auto-scroll policy
#[derive(Debug)]
pub struct ScrollPolicyState {
    /// Line last scrolled to; `None` until the first scroll after a reset
    pub last_line_index: Option<usize>,
    /// A manual-scroll cooldown window is active
    pub is_user_scrolling: bool,
    /// Most recent manual scroll input
    pub last_user_scroll_time: Option<Instant>,
    /// Playback position seen on the previous tick
    pub last_position: f64,
    /// One-shot: instant unconditional scroll on the next tick
    pub force_scroll_queued: bool,
    /// One-shot: animated unconditional scroll on the next tick
    pub smooth_force_scroll_queued: bool,
    pub scrolled_to_first_line: bool,
    pub scrolled_to_last_line: bool,
    /// When false every force-scroll path is suppressed
    pub allow_force_scrolling: bool,
    /// When true the engine does nothing (layout not measured yet)
    pub waiting_for_height: bool,
    /// The single outstanding scroll write
    pub pending_scroll: DeferredScroll,
}

impl Default for ScrollPolicyState {
    fn default() -> Self {
        Self {
            last_line_index: None,
            is_user_scrolling: false,
            last_user_scroll_time: None,
            last_position: 0.0,
            force_scroll_queued: false,
            smooth_force_scroll_queued: false,
            scrolled_to_first_line: false,
            scrolled_to_last_line: false,
            allow_force_scrolling: true,
            waiting_for_height: true,
            pending_scroll: DeferredScroll::new(),
        }
    }
}

impl ScrollPolicyState {
    pub fn new(allow_force_scrolling: bool) -> Self {
        Self {
            allow_force_scrolling,
            ..Default::default()
        }
    }

    /// Forget all scroll bookkeeping; the policy toggles are left alone
    pub fn reset(&mut self) {
        self.last_line_index = None;
        self.is_user_scrolling = false;
        self.last_user_scroll_time = None;
        self.last_position = 0.0;
        self.force_scroll_queued = false;
        self.smooth_force_scroll_queued = false;
        self.clear_edge_latches();
        self.pending_scroll.cancel();
    }

    pub fn clear_edge_latches(&mut self) {
        self.scrolled_to_first_line = false;
        self.scrolled_to_last_line = false;
    }

    pub fn clear_queues(&mut self) {
        self.force_scroll_queued = false;
        self.smooth_force_scroll_queued = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::ElementId;
    use crate::scroll::view::{ContainerId, ScrollAlignment, ScrollCommand};

    #[test]
    fn test_reset_keeps_policy_toggles() {
        let mut state = ScrollPolicyState::new(false);
        state.waiting_for_height = false;
        state.last_line_index = Some(4);
        state.is_user_scrolling = true;
        state.last_user_scroll_time = Some(Instant::now());
        state.last_position = 1234.0;
        state.force_scroll_queued = true;
        state.scrolled_to_last_line = true;
        state.pending_scroll.schedule(
            ScrollCommand {
                container: ContainerId(0),
                element: ElementId(4),
                line_index: 4,
                alignment: ScrollAlignment::Center,
                offset: 0,
                instant: true,
            },
            Instant::now(),
            false,
        );

        state.reset();

        assert!(state.last_line_index.is_none());
        assert!(!state.is_user_scrolling);
        assert!(state.last_user_scroll_time.is_none());
        assert_eq!(state.last_position, 0.0);
        assert!(!state.force_scroll_queued);
        assert!(!state.scrolled_to_last_line);
        assert!(!state.pending_scroll.is_pending());
        assert!(!state.allow_force_scrolling);
        assert!(!state.waiting_for_height);
    }
}
