//! Auto-scroll policy for a lyrics view
//!
//! The controller reconciles three scroll triggers into at most one scroll
//! write at a time:
//! - playback-driven progression to the active line
//! - manual user scrolling, which suspends auto-scroll for a cooldown window
//! - force-scroll requests (seek, reset, explicit queue)
//!
//! The host calls [`ScrollController::scroll_to_active_line`] once per
//! playback tick and [`ScrollController::flush`] at each rendering
//! opportunity; manual input and window events go through the interceptor
//! entry points on the same controller.

mod controller;
mod deferral;
mod events;
mod interceptor;
mod resolve;
mod state;
mod view;

#[cfg(test)]
mod testing;

pub use controller::ScrollController;
pub use deferral::{DeferredScroll, PendingScroll};
pub use events::{PolicyBroadcaster, PolicyEvent};
pub use interceptor::{ScrollInput, UserScrollInterceptor, WindowEvent};
pub use resolve::resolve_active_line;
pub use state::ScrollPolicyState;
pub use view::{ContainerId, LyricsView, ScrollAlignment, ScrollCommand, ScrollContainer};
