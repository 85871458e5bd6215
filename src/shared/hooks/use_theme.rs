use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::{DarkModeToggle, ThemeMode, ThemeSettings};
use crate::infrastructure::dom::{self, PatchTarget};
use crate::infrastructure::storage::{platform_store, KeyValueStore};
use crate::shared::logging::LogOperation;

/// Local override of the configured theme mode
pub const THEME_MODE_KEY: &str = "nova_theme_mode";

/// Dark mode state shared by the systray toggle
#[derive(Clone, Copy, PartialEq)]
pub struct DarkModeState {
    pub toggle: Signal<DarkModeToggle>,
}

impl DarkModeState {
    pub fn is_dark(&self) -> bool {
        self.toggle.read().is_dark()
    }

    pub fn mode(&self) -> ThemeMode {
        self.toggle.read().mode()
    }

    /// Flip light/dark and remember the choice in this browser
    pub fn toggle(&mut self) {
        self.toggle.write().toggle();
        let mode = self.mode();
        dom::set_root_attribute(ThemeSettings::MODE_ATTR, mode.as_str());
        save_theme_mode(mode);
    }

    /// Forward a `prefers-color-scheme` change
    pub fn system_changed(&mut self, prefers_dark: bool) {
        self.toggle.write().system_changed(prefers_dark);
    }
}

/// Theme hook: resolves the mode from the locally saved choice, falling
/// back to the page's `data-nova-mode`, and keeps the root class in sync.
pub fn use_dark_mode() -> DarkModeState {
    let toggle = use_signal(|| {
        let settings = dom::theme_settings();
        let mode = load_theme_mode().unwrap_or(settings.mode);
        DarkModeToggle::new(mode, dom::prefers_dark())
    });

    // Re-applied whenever the toggle changes
    use_effect(move || {
        dom::apply_patch(PatchTarget::Root, &toggle.read().patch());
    });

    // OS scheme changes only matter in auto mode
    let watch = use_hook(move || {
        let watch = dom::watch_color_scheme(move |prefers_dark| {
            let mut state = DarkModeState { toggle };
            if state.mode() == ThemeMode::Auto {
                state.system_changed(prefers_dark);
            }
        });
        Rc::new(RefCell::new(Some(watch)))
    });

    use_drop(move || {
        watch.borrow_mut().take();
    });

    DarkModeState { toggle }
}

/// Saved theme mode, if any
pub fn load_theme_mode() -> Option<ThemeMode> {
    saved_theme_mode(&platform_store())
}

/// Theme mode saved in `store`. Unknown values are ignored so the page's
/// configured mode applies.
pub fn saved_theme_mode<S: KeyValueStore + ?Sized>(store: &S) -> Option<ThemeMode> {
    match store.get_item(THEME_MODE_KEY) {
        Ok(saved) => saved.and_then(|v| v.parse().ok()),
        Err(e) => {
            tracing::warn!(
                operation = LogOperation::Theme.as_str(),
                error = %e,
                "Could not read saved theme mode"
            );
            None
        }
    }
}

/// Save theme mode locally
pub fn save_theme_mode(mode: ThemeMode) {
    if let Err(e) = platform_store().set_item(THEME_MODE_KEY, mode.as_str()) {
        // The toggle still works for this page
        tracing::warn!(
            operation = LogOperation::Theme.as_str(),
            error = %e,
            "Could not persist theme mode"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    #[test]
    fn test_saved_theme_mode() {
        let store = MemoryStore::new();
        assert_eq!(saved_theme_mode(&store), None);

        store.set_item(THEME_MODE_KEY, "dark").unwrap();
        assert_eq!(saved_theme_mode(&store), Some(ThemeMode::Dark));

        store.set_item(THEME_MODE_KEY, "midnight").unwrap();
        assert_eq!(saved_theme_mode(&store), None);
    }
}
