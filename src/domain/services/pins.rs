//! Pinned pages
//!
//! In-memory mirror of the stored pin list plus the commands that change
//! it. The mirror is an immutable `Rc<[Pin]>` swapped wholesale on every
//! mutation, so snapshots handed out earlier never change under the reader.

use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::resolver::resolve_current_page;
use crate::domain::host::{ActionRequest, ActionState, AppDirectory, DocumentState, RouterState, WebClientHost};
use crate::domain::models::{find_menu_by_action, MenuNode, PageInfo, Pin, PinKey};
use crate::infrastructure::storage::{BookmarkStore, KeyValueStore};
use crate::shared::events::{NotificationBus, Topic};
use crate::shared::logging::{self, LogOperation};

/// Title up to the last spaced " - " / " – " separator
static TITLE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*\S)\s+[-–]\s+\S.*$").expect("valid title suffix pattern"));

pub struct PinBoard<S> {
    store: BookmarkStore<S>,
    pins: Rc<[Pin]>,
    bus: NotificationBus,
}

impl<S: KeyValueStore> PinBoard<S> {
    /// Load pins from the store, computing keys for legacy records.
    /// Migrated keys reach the store with the next mutation.
    pub fn load(store: BookmarkStore<S>, bus: NotificationBus) -> Self {
        let pins = Self::read_migrated(&store);
        Self { store, pins, bus }
    }

    fn read_migrated(store: &BookmarkStore<S>) -> Rc<[Pin]> {
        load_pins(store).into()
    }

    /// Re-read the store, e.g. after another tab changed it.
    pub fn reload(&mut self) {
        self.pins = Self::read_migrated(&self.store);
    }

    pub fn pins(&self) -> Rc<[Pin]> {
        Rc::clone(&self.pins)
    }

    pub fn store(&self) -> &BookmarkStore<S> {
        &self.store
    }

    pub fn is_pinned(&self, page: &PageInfo) -> bool {
        self.contains(&page.key())
    }

    pub fn contains(&self, key: &PinKey) -> bool {
        self.pins.iter().any(|pin| pin.key() == *key)
    }

    pub fn find(&self, key: &PinKey) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.key() == *key)
    }

    pub fn is_current_page_pinned<H>(&self, host: &H) -> bool
    where
        H: ActionState + RouterState + ?Sized,
    {
        resolve_current_page(host).is_some_and(|page| self.is_pinned(&page))
    }

    /// Whether `pin` points at the page on screen.
    pub fn is_active<H>(&self, pin: &Pin, host: &H) -> bool
    where
        H: ActionState + RouterState + ?Sized,
    {
        resolve_current_page(host).is_some_and(|page| page.key() == pin.key())
    }

    /// Pin the current page. Returns false when nothing is open or the page
    /// is already pinned; neither case writes or notifies.
    pub fn pin<H: WebClientHost>(&mut self, host: &H) -> bool {
        let Some(page) = resolve_current_page(host) else {
            logging::log_pin_noop("pin", "no current page");
            return false;
        };
        let key = page.key();
        if self.contains(&key) {
            logging::log_pin_noop("pin", "already pinned");
            return false;
        }

        let name = resolve_pin_name(&page, host);
        let app = host.current_app();
        let pin = Pin::from_page(&page, name, app.as_ref().map(|a| a.id), app.map(|a| a.name));

        let mut next = self.pins.to_vec();
        next.push(pin);
        self.commit("pin", &key, next);
        true
    }

    pub fn unpin(&mut self, pin: &Pin) -> bool {
        self.unpin_key(&pin.key())
    }

    /// Remove every pin with `key`. Unknown keys leave the store untouched.
    pub fn unpin_key(&mut self, key: &PinKey) -> bool {
        if !self.contains(key) {
            logging::log_pin_noop("unpin", "key not pinned");
            return false;
        }
        let next: Vec<Pin> = self.pins.iter().filter(|pin| pin.key() != *key).cloned().collect();
        self.commit("unpin", key, next);
        true
    }

    /// Star button: pin the current page, or unpin it when already pinned.
    /// Returns whether the page ends up pinned.
    pub fn toggle_current<H: WebClientHost>(&mut self, host: &H) -> bool {
        let Some(page) = resolve_current_page(host) else {
            return false;
        };
        let key = page.key();
        if self.contains(&key) {
            self.unpin_key(&key);
            false
        } else {
            self.pin(host)
        }
    }

    /// Navigate to a pinned page.
    pub fn open<H: ActionState + ?Sized>(&self, pin: &Pin, host: &H) -> bool {
        let request = ActionRequest {
            action: pin.action_id.clone(),
            view_type: pin.view_type.clone(),
            res_id: pin.res_id,
        };
        match host.do_action(request) {
            Ok(()) => true,
            Err(e) => {
                logging::log_host_error(LogOperation::Pinning, "do_action", &e.to_string());
                false
            }
        }
    }

    fn commit(&mut self, change: &str, key: &PinKey, next: Vec<Pin>) {
        // The mirror follows the user's intent even if the write is rejected
        self.store.set_pinned_pages(&next);
        self.pins = next.into();
        logging::log_pin_change(change, key.as_str(), self.pins.len());
        self.bus.publish(Topic::PinsChanged);
    }
}

/// Stored pins with keys computed for legacy records
pub fn load_pins<S: KeyValueStore>(store: &BookmarkStore<S>) -> Vec<Pin> {
    let mut pins = store.get_pinned_pages();
    let mut migrated = 0;
    for pin in pins.iter_mut() {
        if pin.migrate() {
            migrated += 1;
        }
    }
    logging::log_pins_migrated(migrated, pins.len());
    pins
}

/// Label for a new pin, in order of preference:
/// the record name on a single-record page, the matching menu entry of the
/// current app, the page's own display name, the document title without
/// its site suffix, and finally `"Page {action}"`.
pub fn resolve_pin_name<H>(page: &PageInfo, host: &H) -> String
where
    H: AppDirectory + DocumentState + ?Sized,
{
    let display_name = page.display_name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    if let (Some(_), Some(name)) = (page.res_id, display_name) {
        return name.to_string();
    }

    if let Some(name) = menu_label(page, host) {
        return name;
    }

    if let Some(name) = display_name {
        return name.to_string();
    }

    if let Some(title) = host.title().as_deref().and_then(strip_site_suffix) {
        return title;
    }

    format!("Page {}", page.action_id)
}

fn menu_label<H: AppDirectory + ?Sized>(page: &PageInfo, host: &H) -> Option<String> {
    let app = host.current_app()?;
    let tree = match host.menu_tree(app.id) {
        Ok(tree) => tree,
        Err(e) => {
            logging::log_host_error(LogOperation::Pinning, "menu_tree", &e.to_string());
            return None;
        }
    };
    find_menu_by_action(Some(&tree), &page.action_id)
        .and_then(|node| node.label())
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// `"Quotations - Acme"` → `"Quotations"`. Blank titles yield `None`.
pub fn strip_site_suffix(title: &str) -> Option<String> {
    let title = title.trim();
    let stripped = TITLE_SUFFIX
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or(title, |m| m.as_str());
    (!stripped.is_empty()).then(|| stripped.to_string())
}
