use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};

use crate::domain::logger::Logger;

/// Signals broadcast after the local store changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The cart was mutated by this process.
    CartChanged,
    /// A stored key was changed by someone else (another process or tab).
    StorageChanged { key: String },
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        match self {
            StoreEvent::CartChanged => Topic::CartChanged,
            StoreEvent::StorageChanged { .. } => Topic::StorageChanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    CartChanged,
    StorageChanged,
}

/// Receives store events. Listeners run synchronously inside `publish`.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &StoreEvent) -> anyhow::Result<()>;
}

impl<F> EventListener for F
where
    F: Fn(&StoreEvent) -> anyhow::Result<()> + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent) -> anyhow::Result<()> {
        self(event)
    }
}

struct Subscription {
    topic: Topic,
    listener: Arc<dyn EventListener>,
}

/// Publish/subscribe hub shared by everything that mutates or displays the cart.
///
/// Delivery is best-effort: a listener that fails or panics is logged and
/// skipped, the remaining listeners still run and the publisher never sees
/// the failure.
pub struct EventBus {
    subscriptions: RwLock<Vec<Subscription>>,
    logger: Arc<dyn Logger>,
}

impl EventBus {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            logger,
        }
    }

    pub fn subscribe(&self, topic: Topic, listener: Arc<dyn EventListener>) {
        let mut subscriptions = self
            .subscriptions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscriptions.push(Subscription { topic, listener });
    }

    /// Delivers `event` to every listener of its topic and returns how many
    /// of them handled it without error.
    pub fn publish(&self, event: StoreEvent) -> usize {
        let topic = event.topic();
        // Snapshot first so listeners may subscribe while running.
        let listeners: Vec<Arc<dyn EventListener>> = self
            .subscriptions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|subscription| subscription.topic == topic)
            .map(|subscription| subscription.listener.clone())
            .collect();

        let mut delivered = 0;
        for listener in listeners {
            match catch_unwind(AssertUnwindSafe(|| listener.on_event(&event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => self
                    .logger
                    .warn(&format!("Listener failed on {:?}: {}", event, err)),
                Err(_) => self
                    .logger
                    .error(&format!("Listener panicked on {:?}", event)),
            }
        }
        delivered
    }
}
