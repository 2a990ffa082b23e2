use std::time::Instant;

use crate::lyrics::ElementId;

/// Opaque handle to the scrollable element of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub usize);

/// Where the target line lands inside the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    Center,
    Top,
}

/// A resolved scroll write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub container: ContainerId,
    pub element: ElementId,
    /// Index of the line the element belongs to
    pub line_index: usize,
    pub alignment: ScrollAlignment,
    /// Alignment offset in view units
    pub offset: i32,
    /// Jump without animation
    pub instant: bool,
}

/// The scrollable container wrapping the lyrics content
pub trait ScrollContainer {
    /// Handle of the scrollable element, `None` while unmounted
    fn scroll_element(&self) -> Option<ContainerId>;

    /// Re-measure content after a layout change
    fn recalculate(&mut self);

    /// The scrollbar thumb is being dragged
    fn is_dragging(&self) -> bool;
}

/// View adapter the policy engine drives
pub trait LyricsView: ScrollContainer {
    /// Place the command's element inside its container; `now` is the frame
    /// time the write executes at
    fn scroll_into_view(&mut self, command: &ScrollCommand, now: Instant);

    /// Toggle the "user is scrolling" visual hint on the lyrics content.
    /// Returns `false` when the content anchor does not exist.
    fn set_scroll_suppressed(&mut self, suppressed: bool) -> bool;

    /// Compact layout scrolls lines to the top instead of the center
    fn is_compact(&self) -> bool;

    /// Picture-in-picture layout
    fn is_pip(&self) -> bool {
        false
    }
}
