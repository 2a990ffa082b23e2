use std::time::Instant;

use tracing::debug;

use super::view::ScrollCommand;

/// A scroll write waiting for the next rendering opportunity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScroll {
    pub command: ScrollCommand,
    /// Earliest time the write may execute (dot-line delay)
    pub not_before: Instant,
    /// Normal progression clears the first/last line latches when it lands
    pub clears_edge_latches: bool,
}

/// Single-slot holder for the outstanding scroll write
///
/// Scheduling replaces whatever is pending, so the latest decision wins and a
/// delayed write can never land after a newer one.
#[derive(Debug, Default)]
pub struct DeferredScroll {
    pending: Option<PendingScroll>,
}

impl DeferredScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a write, cancelling any pending one
    pub fn schedule(&mut self, command: ScrollCommand, not_before: Instant, clears_edge_latches: bool) {
        if let Some(previous) = self.pending.take() {
            debug!(line = previous.command.line_index, "Cancelled pending scroll");
        }

        self.pending = Some(PendingScroll {
            command,
            not_before,
            clears_edge_latches,
        });
    }

    /// Drop the pending write, if any
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending write if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<PendingScroll> {
        match &self.pending {
            Some(pending) if pending.not_before <= now => self.pending.take(),
            _ => None,
        }
    }
}
