//! L3 Molecular Layer: Viewport scroll animator
//!
//! Holds the current row offset of the lyrics viewport and eases it toward a
//! target. Auto-scroll targets come from the policy engine; manual wheel and
//! key scrolling arrive as batched deltas.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: u16,
    /// Manual deltas accumulated until the next update
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame should come early
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the running animation settles
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Jump immediately, dropping any animation or pending delta
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Move to `target`; animated unless `instant` or smooth scrolling is off
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, instant: bool, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if instant || !self.config.is_smooth() {
            self.set_scroll(target);
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down); batched until the next update
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set_scroll(new_scroll);
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the row offset to render
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let new_target = (self.target_scroll() as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let eased = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.current_scroll = lerp_u16(anim.from, anim.to, eased).min(max_scroll);
            }
        }

        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }

    pub fn reset(&mut self) {
        self.animation = None;
        self.current_scroll = 0;
        self.pending_delta = 0;
    }
}
