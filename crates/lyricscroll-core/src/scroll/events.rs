use tokio::sync::mpsc;
use tracing::debug;

const POLICY_EVENT_PREFIX: &str = "policy:";

/// Change notifications for the policy toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyEvent {
    /// Force scrolling was allowed (`true`) or disallowed
    ForceScrolling(bool),
    /// The view started or stopped waiting for its height to be measured
    WaitingForHeight(bool),
}

impl PolicyEvent {
    /// Stable event name, e.g. `policy:force-scrolling`
    pub fn name(&self) -> String {
        let suffix = match self {
            PolicyEvent::ForceScrolling(_) => "force-scrolling",
            PolicyEvent::WaitingForHeight(_) => "waiting-for-height",
        };
        format!("{POLICY_EVENT_PREFIX}{suffix}")
    }

    pub fn value(&self) -> bool {
        match self {
            PolicyEvent::ForceScrolling(v) | PolicyEvent::WaitingForHeight(v) => *v,
        }
    }
}

/// Fan-out of policy events to subscribers
#[derive(Debug, Default)]
pub struct PolicyBroadcaster {
    subscribers: Vec<mpsc::UnboundedSender<PolicyEvent>>,
}

impl PolicyBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PolicyEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Send to every live subscriber, pruning the ones that hung up
    pub fn broadcast(&mut self, event: PolicyEvent) {
        debug!(event = %event.name(), value = event.value(), "Policy changed");
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
