//! Named event subscriptions with per-listener handles.
//!
//! Every `subscribe` call gets its own `SubscriptionId`; `unsubscribe` removes exactly that
//! listener, so several consumers may listen to the same event name independently.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, MutexGuard};

new_key_type! { pub struct SubscriptionId; }

pub type EventHandler = Arc<dyn Fn() + Send + Sync>;

struct Subscription {
    event: String,
    handler: EventHandler,
}

#[derive(Default)]
pub struct EventHub {
    subscriptions: Mutex<SlotMap<SubscriptionId, Subscription>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, SlotMap<SubscriptionId, Subscription>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe(&self, event: &str, handler: EventHandler) -> SubscriptionId {
        self.table().insert(Subscription {
            event: event.to_string(),
            handler,
        })
    }

    /// Returns false when the handle was already released.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.table().remove(id).is_some()
    }

    /// Delivers `event` to every live listener and returns how many were called.
    ///
    /// Handlers run outside the table lock, so a handler may subscribe or unsubscribe.
    pub fn emit(&self, event: &str) -> usize {
        let handlers: Vec<EventHandler> = self
            .table()
            .values()
            .filter(|sub| sub.event == event)
            .map(|sub| Arc::clone(&sub.handler))
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.table().values().filter(|sub| sub.event == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("subscriptions", &self.table().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event_hub.rs"]
mod tests;
