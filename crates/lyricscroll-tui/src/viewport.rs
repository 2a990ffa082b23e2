use std::time::Instant;

use lyricscroll_core::scroll::{ContainerId, LyricsView, ScrollAlignment, ScrollCommand, ScrollContainer};
use lyricscroll_core::{Lyrics, ScrollConfig};
use ratatui::layout::Rect;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::scroll::ScrollAnimator;

/// Text shown for dot (instrumental) lines
pub const DOT_LINE_TEXT: &str = "• • •";

/// Scrollable lyrics area of the terminal
///
/// Plays the part of the scroll container: it measures wrapped line heights,
/// owns the row offset, and executes the policy engine's scroll commands.
#[derive(Debug)]
pub struct LyricsViewport {
    id: ContainerId,
    mounted: bool,
    area: Rect,
    /// Display text per lyric line
    texts: Vec<String>,
    /// Wrapped rows per lyric line for the current width
    rows: Vec<Vec<String>>,
    /// First row of each lyric line
    line_tops: Vec<u16>,
    total_height: u16,
    animator: ScrollAnimator,
    /// "User is scrolling" hint: render every line at full brightness
    suppressed: bool,
    compact: bool,
    pip: bool,
    dragging: bool,
    hovered: bool,
}

impl LyricsViewport {
    pub fn new(id: ContainerId, config: ScrollConfig) -> Self {
        Self {
            id,
            mounted: false,
            area: Rect::default(),
            texts: Vec::new(),
            rows: Vec::new(),
            line_tops: Vec::new(),
            total_height: 0,
            animator: ScrollAnimator::new(config),
            suppressed: false,
            compact: false,
            pip: false,
            dragging: false,
            hovered: false,
        }
    }

    pub fn with_layout(mut self, compact: bool, pip: bool) -> Self {
        self.compact = compact;
        self.pip = pip;
        self
    }

    /// Take the display text of every line
    pub fn set_lines(&mut self, lyrics: &Lyrics) {
        self.texts = lyrics
            .lines
            .iter()
            .map(|line| {
                if line.dot_line {
                    DOT_LINE_TEXT.to_string()
                } else {
                    line.display_text()
                }
            })
            .collect();
        self.animator.reset();
        self.measure();
    }

    /// Mount into a laid-out area. Fails when the area has no room.
    pub fn mount(&mut self, area: Rect) -> bool {
        if area.width == 0 || area.height == 0 {
            warn!("Cannot mount lyrics viewport: lyrics area is empty");
            return false;
        }
        self.mounted = true;
        self.area = area;
        self.measure();
        debug!(width = area.width, height = area.height, "Lyrics viewport mounted");
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.hovered = false;
        self.dragging = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Update the area; returns `true` when the size changed
    pub fn set_area(&mut self, area: Rect) -> bool {
        let resized = area.width != self.area.width || area.height != self.area.height;
        self.area = area;
        if resized {
            self.measure();
        }
        resized
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn measure(&mut self) {
        let width = self.area.width.max(1) as usize;
        self.rows = self.texts.iter().map(|t| wrap_text(t, width)).collect();
        self.line_tops.clear();
        let mut top = 0u16;
        for rows in &self.rows {
            self.line_tops.push(top);
            top = top.saturating_add(rows.len() as u16);
        }
        self.total_height = top;
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.area.height)
    }

    pub fn scroll_offset(&self) -> u16 {
        self.animator.current_scroll()
    }

    pub fn needs_update(&self) -> bool {
        self.animator.needs_update()
    }

    /// Advance the scroll animation for this frame
    pub fn update(&mut self, now: Instant) -> u16 {
        let max = self.max_scroll();
        self.animator.update(max, now)
    }

    /// Manual scroll by rows (positive = down)
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.animator.scroll_by(delta, max);
    }

    pub fn scroll_lines(&self) -> i32 {
        self.animator.config().scroll_lines.max(1) as i32
    }

    pub fn half_page(&self) -> i32 {
        (self.area.height / 2).max(1) as i32
    }

    /// Row offset that places `line_index` per alignment and offset
    pub fn target_for(&self, line_index: usize, alignment: ScrollAlignment, offset: i32) -> u16 {
        let Some(&top) = self.line_tops.get(line_index) else {
            return self.scroll_offset();
        };
        let height = self.rows.get(line_index).map_or(1, |r| r.len()) as i32;
        let view = self.area.height as i32;

        let desired_row = match alignment {
            ScrollAlignment::Center => (view - height) / 2 + offset,
            ScrollAlignment::Top => offset,
        };
        (top as i32 - desired_row).clamp(0, self.max_scroll() as i32) as u16
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    // ---- scrollbar ----

    /// Column the scrollbar occupies
    pub fn scrollbar_column(&self) -> u16 {
        self.area.right().saturating_sub(1)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.mounted
            && column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Scrollbar shows while hovered or dragged
    pub fn scrollbar_visible(&self) -> bool {
        self.mounted && (self.hovered || self.dragging)
    }

    pub fn start_drag(&mut self, row: u16) {
        self.dragging = true;
        self.drag_to(row);
    }

    /// Map a terminal row on the scrollbar track to a scroll offset
    pub fn drag_to(&mut self, row: u16) {
        if !self.dragging || self.area.height == 0 {
            return;
        }
        let track = self.area.height.saturating_sub(1).max(1) as f64;
        let ratio = (row.saturating_sub(self.area.y) as f64 / track).clamp(0.0, 1.0);
        let target = (ratio * self.max_scroll() as f64).round() as u16;
        self.animator.set_scroll(target);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl ScrollContainer for LyricsViewport {
    fn scroll_element(&self) -> Option<ContainerId> {
        self.mounted.then_some(self.id)
    }

    fn recalculate(&mut self) {
        self.measure();
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl LyricsView for LyricsViewport {
    fn scroll_into_view(&mut self, command: &ScrollCommand, now: Instant) {
        // Elements are handed out one per line, in order
        let line_index = command.element.0;
        let target = self.target_for(line_index, command.alignment, command.offset);
        let max = self.max_scroll();
        self.animator.scroll_to(target, max, command.instant, now);
    }

    fn set_scroll_suppressed(&mut self, suppressed: bool) -> bool {
        if !self.mounted {
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

/// Hard-wrap text to `width` display columns; always at least one row
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
