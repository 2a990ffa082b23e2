use std::time::Instant;

use super::view::{ContainerId, LyricsView, ScrollCommand, ScrollContainer};

/// Recording view adapter for policy tests
#[derive(Debug)]
pub struct FakeView {
    pub container: Option<ContainerId>,
    pub compact: bool,
    pub pip: bool,
    pub anchor_present: bool,
    pub suppressed: bool,
    /// Executed commands with the frame time they ran at
    pub executed: Vec<(ScrollCommand, Instant)>,
}

impl FakeView {
    pub fn new() -> Self {
        Self {
            container: Some(ContainerId(0)),
            compact: false,
            pip: false,
            anchor_present: true,
            suppressed: false,
            executed: Vec::new(),
        }
    }
}

impl ScrollContainer for FakeView {
    fn scroll_element(&self) -> Option<ContainerId> {
        self.container
    }

    fn recalculate(&mut self) {}

    fn is_dragging(&self) -> bool {
        false
    }
}

impl LyricsView for FakeView {
    fn scroll_into_view(&mut self, command: &ScrollCommand, now: Instant) {
        self.executed.push((*command, now));
    }

    fn set_scroll_suppressed(&mut self, suppressed: bool) -> bool {
        if !self.anchor_present {
            return false;
        }
        self.suppressed = suppressed;
        true
    }

    fn is_compact(&self) -> bool {
        self.compact
    }

    fn is_pip(&self) -> bool {
        self.pip
    }
}
