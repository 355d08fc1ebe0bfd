//! Events emitted by the orchestrator for observers.
//!
//! Decouples the state machine from any rendering technology: a UI layer
//! subscribes and re-renders on whatever events it cares about.

use crate::notify::NotificationKind;
use crate::orchestrator::BurnerState;
use cinder_types::ChainAddress;

#[derive(Clone, Debug)]
pub enum BurnerEvent {
    /// The state machine moved.
    StateChanged {
        from: BurnerState,
        to: BurnerState,
    },
    /// A fresh balance list was adopted (initial load or post-burn refresh).
    TokensRefreshed {
        count: usize,
    },
    /// One token's burn transfer was accepted by the chain.
    TokenBurned {
        token: ChainAddress,
        symbol: String,
        tx: String,
    },
    /// One token's burn transfer failed; the batch continues.
    TokenBurnFailed {
        token: ChainAddress,
        symbol: String,
        reason: String,
    },
    /// A notification became visible.
    NotificationPushed {
        kind: NotificationKind,
        message: String,
    },
}

/// Synchronous fan-out bus. Listeners run inline on the emitting thread;
/// keep handlers fast.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&BurnerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&BurnerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &BurnerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn emit_reaches_every_listener() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let c1 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        }));
        let c2 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c2.fetch_add(10, Ordering::SeqCst);
        }));

        bus.emit(&BurnerEvent::TokensRefreshed { count: 3 });
        assert_eq!(counter.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn emit_with_no_listeners_is_noop() {
        let bus = EventBus::new();
        bus.emit(&BurnerEvent::TokensRefreshed { count: 0 });
    }
}
