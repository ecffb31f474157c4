use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use business::domain::events::{EventBus, StoreEvent, Topic};
use persistence::store::StorageKey;

/// Tracks whether the cart badge needs to be redrawn.
///
/// Marked by carts changed in this process and by external writes to the
/// `cart` key; `take_dirty` clears the mark.
#[derive(Default)]
pub struct CartBadge {
    dirty: AtomicBool,
}

impl CartBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self, event: &StoreEvent) {
        let affects_cart = match event {
            StoreEvent::CartChanged => true,
            StoreEvent::StorageChanged { key } => *key == StorageKey::Cart.to_string(),
        };
        if affects_cart {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Subscribes the badge to both cart topics on `events`.
    pub fn attach(self: &Arc<Self>, events: &EventBus) {
        for topic in [Topic::CartChanged, Topic::StorageChanged] {
            let badge = Arc::clone(self);
            events.subscribe(
                topic,
                Arc::new(move |event: &StoreEvent| -> anyhow::Result<()> {
                    badge.mark(event);
                    Ok(())
                }),
            );
        }
    }
}
