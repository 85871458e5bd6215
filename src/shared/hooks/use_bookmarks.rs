use dioxus::prelude::*;

use crate::domain::models::Pin;
use crate::domain::services::load_pins;
use crate::infrastructure::storage::{platform_store, BookmarkStore, PlatformStore};
use crate::shared::events::{NotificationBus, Topic};

fn bookmark_store() -> BookmarkStore<PlatformStore> {
    BookmarkStore::new(platform_store())
}

/// Signal mirroring a stored list, re-read whenever `topic` is published.
/// The subscription is dropped with the component.
fn use_store_mirror<T: 'static>(
    bus: NotificationBus,
    topic: Topic,
    read: fn(&BookmarkStore<PlatformStore>) -> T,
) -> Signal<T> {
    let mirror = use_signal(|| read(&bookmark_store()));

    let subscription = use_hook(move || {
        let id = bus.subscribe(topic, move |_| {
            let mut mirror = mirror;
            mirror.set(read(&bookmark_store()));
        });
        (bus, id)
    });

    use_drop(move || {
        let (bus, id) = subscription;
        bus.unsubscribe(id);
    });

    mirror
}

/// Favorite app ids, in favorite order
pub fn use_favorite_ids(bus: NotificationBus) -> Signal<Vec<i64>> {
    use_store_mirror(bus, Topic::FavoritesChanged, |store| store.get_favorite_app_ids())
}

/// Pinned pages, legacy records already keyed
pub fn use_pinned_pages(bus: NotificationBus) -> Signal<Vec<Pin>> {
    use_store_mirror(bus, Topic::PinsChanged, |store| load_pins(store))
}
