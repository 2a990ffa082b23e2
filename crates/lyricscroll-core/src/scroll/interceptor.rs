use std::time::Instant;

use tracing::{debug, info, warn};

use super::state::ScrollPolicyState;
use super::view::{ContainerId, LyricsView};

/// Manual scroll input on the scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollInput {
    Wheel,
    /// Touch drag, or dragging the scrollbar thumb
    TouchMove,
}

/// Window-level events that invalidate scroll bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    FocusGained,
    Resized,
}

/// Detects manual scrolling and layout changes
///
/// The interceptor never scrolls. It only marks the policy state as
/// user-scrolling (with a timestamp) and tells its owner when bookkeeping
/// has gone stale.
#[derive(Debug, Default)]
pub struct UserScrollInterceptor {
    /// Container whose input listeners are installed
    attached: Option<ContainerId>,
    /// Lyrics content size observer is connected
    observing_content: bool,
    last_content_size: Option<(u16, u16)>,
    /// Window focus/resize listeners are installed
    window_listeners: bool,
}

impl UserScrollInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install listeners on a container. Re-attaching drops the previous
    /// container's listeners first.
    pub fn attach(&mut self, container: ContainerId) {
        if let Some(previous) = self.attached.take() {
            debug!(container = previous.0, "Detached scroll listeners before re-attach");
        }
        self.attached = Some(container);
        self.observing_content = true;
        self.last_content_size = None;
        self.window_listeners = true;
        info!(container = container.0, "Scroll events initialized");
    }

    /// Remove every listener and disconnect the size observer
    pub fn detach(&mut self) {
        if let Some(container) = self.attached.take() {
            info!(container = container.0, "Scroll events cleaned up");
        }
        self.observing_content = false;
        self.last_content_size = None;
        self.window_listeners = false;
    }

    pub fn attached_container(&self) -> Option<ContainerId> {
        self.attached
    }

    pub fn is_observing_content(&self) -> bool {
        self.observing_content
    }

    pub fn has_window_listeners(&self) -> bool {
        self.window_listeners
    }

    /// Record manual input coming from `container`
    ///
    /// Returns `false` when no listener is installed on that container.
    pub fn on_input<V: LyricsView + ?Sized>(
        &self,
        state: &mut ScrollPolicyState,
        container: ContainerId,
        input: ScrollInput,
        view: &mut V,
        now: Instant,
    ) -> bool {
        if self.attached != Some(container) {
            return false;
        }

        if !state.is_user_scrolling {
            state.is_user_scrolling = true;
            debug!(?input, "User scroll started");
            if !view.set_scroll_suppressed(true) {
                warn!("Could not find lyrics content to apply the scroll suppression hint");
            }
        }
        state.last_user_scroll_time = Some(now);
        true
    }

    /// Whether a window event should reset the scroll bookkeeping
    pub fn on_window_event(&self, event: WindowEvent) -> bool {
        if self.window_listeners {
            debug!(?event, "Window event invalidates scroll state");
        }
        self.window_listeners
    }

    /// Feed a size measurement of the lyrics content.
    /// Returns `true` when the size changed while observed.
    pub fn on_content_resize(&mut self, width: u16, height: u16) -> bool {
        if !self.observing_content {
            return false;
        }
        let size = (width, height);
        if self.last_content_size == Some(size) {
            return false;
        }
        self.last_content_size = Some(size);
        debug!(width, height, "Lyrics content resized");
        true
    }
}
