//! Notification bus shared with the surrounding web client
//!
//! Single-threaded publish/subscribe keyed by [`Topic`]. Handles are cheap
//! `Rc` clones; every clone talks to the same subscriber table.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Named topics carried on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    AppChanged,
    NavigationUpdated,
    FavoritesChanged,
    PinsChanged,
    LauncherToggled,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::AppChanged => "nova:app-changed",
            Topic::NavigationUpdated => "nova:navigation-updated",
            Topic::FavoritesChanged => "nova:favorites-changed",
            Topic::PinsChanged => "nova:pins-changed",
            Topic::LauncherToggled => "nova:toggle-launcher",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(Topic)>;

struct Subscriber {
    id: SubscriptionId,
    topic: Topic,
    callback: Callback,
}

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
}

#[derive(Clone, Default)]
pub struct NotificationBus {
    inner: Rc<BusInner>,
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: Topic, callback: impl Fn(Topic) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            topic,
            callback: Rc::new(callback),
        });
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Deliver `topic` to every current subscriber.
    ///
    /// The subscriber list is snapshotted first, so callbacks are free to
    /// subscribe, unsubscribe or publish again.
    pub fn publish(&self, topic: Topic) {
        let targets: Vec<Callback> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Rc::clone(&s.callback))
            .collect();

        tracing::trace!(topic = topic.as_str(), receivers = targets.len(), "Publishing notification");

        for callback in targets {
            callback(topic);
        }
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}
