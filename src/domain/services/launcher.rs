//! Full-screen app launcher overlay

use crate::config::LauncherConfig;
use crate::domain::models::App;
use crate::shared::events::{NotificationBus, SubscriptionId, Topic};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppLauncher {
    is_open: bool,
    query: String,
}

impl AppLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open or close; the search box always starts empty.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.query.clear();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }

    /// Escape closes the overlay; other keys are left to the input.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// The configured launcher hotkey opens or closes the overlay.
    pub fn on_hotkey(&mut self, key: &str, config: &LauncherConfig) -> bool {
        if key.eq_ignore_ascii_case(&config.hotkey) {
            self.toggle();
            return true;
        }
        false
    }

    pub fn filtered_apps<'a>(&self, apps: &'a [App]) -> Vec<&'a App> {
        if self.query.is_empty() {
            return apps.iter().collect();
        }
        apps.iter()
            .filter(|app| app.name.to_lowercase().contains(&self.query))
            .collect()
    }
}

/// Icon URL served by the web client for an app's root menu
pub fn icon_url(app: &App) -> String {
    format!("/web/image?model=ir.ui.menu&id={}&field=web_icon_data", app.id)
}

/// Ask every mounted launcher to toggle (navbar "apps" button, hotkey).
pub fn request_toggle(bus: &NotificationBus) {
    bus.publish(Topic::LauncherToggled);
}

/// Wire a toggle callback to the bus; keep the id to unsubscribe on unmount.
pub fn on_toggle_requested(bus: &NotificationBus, callback: impl Fn() + 'static) -> SubscriptionId {
    bus.subscribe(Topic::LauncherToggled, move |_| callback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn apps() -> Vec<App> {
        vec![App::new(1, "Sales"), App::new(2, "Inventory"), App::new(3, "Point of Sale")]
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let apps = apps();
        assert_eq!(AppLauncher::new().filtered_apps(&apps).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let apps = apps();
        let mut launcher = AppLauncher::new();
        launcher.set_query("  SAL ");

        let names: Vec<&str> = launcher.filtered_apps(&apps).iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Point of Sale"]);
    }

    #[test]
    fn test_toggle_and_escape_reset_query() {
        let mut launcher = AppLauncher::new();
        launcher.toggle();
        launcher.set_query("inv");
        assert!(launcher.is_open());

        assert!(launcher.on_key("Escape"));
        assert!(!launcher.is_open());
        assert_eq!(launcher.query(), "");
        assert!(!launcher.on_key("Enter"));
    }

    #[test]
    fn test_hotkey_toggles() {
        let config = LauncherConfig::default();
        let mut launcher = AppLauncher::new();

        assert!(launcher.on_hotkey("H", &config));
        assert!(launcher.is_open());
        assert!(!launcher.on_hotkey("k", &config));
        assert!(launcher.is_open());
        assert!(launcher.on_hotkey("h", &config));
        assert!(!launcher.is_open());

        let custom = LauncherConfig { hotkey: "a".into() };
        assert!(!launcher.on_hotkey("h", &custom));
        assert!(launcher.on_hotkey("a", &custom));
    }

    #[test]
    fn test_toggle_over_bus() {
        let bus = NotificationBus::new();
        let launcher = Rc::new(RefCell::new(AppLauncher::new()));
        let l = Rc::clone(&launcher);
        let id = on_toggle_requested(&bus, move || l.borrow_mut().toggle());

        request_toggle(&bus);
        assert!(launcher.borrow().is_open());

        bus.unsubscribe(id);
        request_toggle(&bus);
        assert!(launcher.borrow().is_open());
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(icon_url(&App::new(7, "CRM")), "/web/image?model=ir.ui.menu&id=7&field=web_icon_data");
    }
}
