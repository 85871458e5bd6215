//! Favorite apps
//!
//! The stored id list is the source of truth for "was favorited". Ids whose
//! app has disappeared stay in storage and are only skipped when resolving.

use std::collections::HashMap;

use crate::domain::host::AppDirectory;
use crate::domain::models::App;
use crate::infrastructure::storage::{BookmarkStore, KeyValueStore};
use crate::shared::events::{NotificationBus, Topic};
use crate::shared::logging;

pub struct FavoriteApps<S> {
    store: BookmarkStore<S>,
    ids: Vec<i64>,
    bus: NotificationBus,
}

impl<S: KeyValueStore> FavoriteApps<S> {
    pub fn load(store: BookmarkStore<S>, bus: NotificationBus) -> Self {
        let ids = store.get_favorite_app_ids();
        Self { store, ids, bus }
    }

    pub fn reload(&mut self) {
        self.ids = self.store.get_favorite_app_ids();
    }

    /// Ids in the order they were favorited
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn is_favorite(&self, app_id: i64) -> bool {
        self.ids.contains(&app_id)
    }

    /// Add `app_id` at the end, or remove its first occurrence.
    /// Returns whether the app is a favorite afterwards.
    pub fn toggle(&mut self, app_id: i64) -> bool {
        // Start from the stored list; another tab may have changed it
        let mut ids = self.store.get_favorite_app_ids();
        let favorited = match ids.iter().position(|id| *id == app_id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(app_id);
                true
            }
        };

        self.store.set_favorite_app_ids(&ids);
        self.ids = ids;
        logging::log_favorite_toggled(app_id, favorited, self.ids.len());
        self.bus.publish(Topic::FavoritesChanged);
        favorited
    }

    /// Favorite apps that still exist, in favorite order.
    pub fn resolve(&self, apps: &[App]) -> Vec<App> {
        let by_id: HashMap<i64, &App> = apps.iter().map(|app| (app.id, app)).collect();
        let resolved: Vec<App> = self
            .ids
            .iter()
            .filter_map(|id| by_id.get(id).map(|app| (*app).clone()))
            .collect();
        logging::log_stale_favorites(self.ids.len() - resolved.len());
        resolved
    }

    pub fn resolve_from<H: AppDirectory + ?Sized>(&self, host: &H) -> Vec<App> {
        self.resolve(&host.list_apps())
    }
}
