//! Kind-based synchronous event bus.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::types::{Event, EventKind};

/// Token identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

type Handler = Box<dyn FnMut(&Event)>;

struct Subscriber {
    handle: SubscriptionHandle,
    active: Cell<bool>,
    handler: RefCell<Handler>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    channels: HashMap<EventKind, Vec<Rc<Subscriber>>>,
}

/// In-process publish/subscribe hub.
///
/// Delivery is synchronous: [`EventBus::publish`] returns once every handler
/// subscribed to the event's kind has run, in subscription order. There is no
/// buffering and no replay, so a handler only sees events published after it
/// subscribed.
///
/// Handlers may subscribe, unsubscribe or publish from inside a delivery. A
/// handler removed mid-delivery is not called again; one added mid-delivery
/// starts with the next publish.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every current subscriber of its kind.
    ///
    /// Returns the number of handlers that ran.
    pub fn publish(&self, event: Event) -> usize {
        let kind = event.kind();

        // Snapshot so handlers can touch the registry while we iterate.
        let subscribers = self
            .registry
            .borrow()
            .channels
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        let mut delivered = 0;
        for subscriber in subscribers {
            if !subscriber.active.get() {
                continue;
            }
            match subscriber.handler.try_borrow_mut() {
                Ok(mut handler) => {
                    handler(&event);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!(
                        "Skipping re-entrant delivery of {:?} to {:?}",
                        kind,
                        subscriber.handle
                    );
                }
            }
        }

        if delivered == 0 {
            tracing::trace!("No subscribers for {:?}", kind);
        }
        delivered
    }

    /// Registers `handler` for every future event of `kind`.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&Event) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let handle = SubscriptionHandle(registry.next_id);

        registry
            .channels
            .entry(kind)
            .or_default()
            .push(Rc::new(Subscriber {
                handle,
                active: Cell::new(true),
                handler: RefCell::new(Box::new(handler)),
            }));

        tracing::trace!("Subscribed {:?} to {:?}", handle, kind);
        handle
    }

    /// Removes a subscription.
    ///
    /// Unknown or already-removed handles are ignored; returns whether
    /// anything was removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut registry = self.registry.borrow_mut();
        for subscribers in registry.channels.values_mut() {
            if let Some(position) = subscribers.iter().position(|s| s.handle == handle) {
                let removed = subscribers.remove(position);
                removed.active.set(false);
                tracing::trace!("Unsubscribed {:?}", handle);
                return true;
            }
        }
        false
    }

    /// Number of live subscriptions for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .channels
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("asset_changed", &self.subscriber_count(EventKind::AssetChanged))
            .field("score_changed", &self.subscriber_count(EventKind::ScoreChanged))
            .finish()
    }
}
