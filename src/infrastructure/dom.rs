//! Document adapter
//!
//! Applies class patches to `<html>`/`<body>` and reads page-level state.
//! Everything is a no-op (or a default) outside the browser.

use crate::domain::host::DocumentState;
use crate::domain::models::{ClassPatch, ThemeSettings};

/// Which element a patch targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    Root,
    Body,
}

/// `document.title` of the running page
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl DocumentState for BrowserDocument {
    fn title(&self) -> Option<String> {
        document_title()
    }
}

/// Theme settings injected on `<html>`
pub fn theme_settings() -> ThemeSettings {
    ThemeSettings::from_attributes(root_attribute)
}

#[cfg(target_arch = "wasm32")]
pub fn apply_patch(target: PatchTarget, patch: &ClassPatch) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let element: Option<web_sys::Element> = match target {
        PatchTarget::Root => document.document_element(),
        PatchTarget::Body => document.body().map(Into::into),
    };
    let Some(element) = element else {
        return;
    };

    let classes = element.class_list();
    for class in &patch.remove {
        let _ = classes.remove_1(class);
    }
    for class in &patch.add {
        let _ = classes.add_1(class);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_patch(_target: PatchTarget, _patch: &ClassPatch) {
    // No document outside the browser
}

#[cfg(target_arch = "wasm32")]
pub fn root_attribute(name: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(name))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn root_attribute(_name: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(name, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_attribute(_name: &str, _value: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn document_title() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.title())
        .filter(|title| !title.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_title() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
fn prefers_dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
}

/// `prefers-color-scheme: dark`
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark() -> bool {
    prefers_dark_query().map(|mql| mql.matches()).unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> bool {
    false
}

/// Registered `prefers-color-scheme` change listener, removed on drop
#[derive(Default)]
pub struct ColorSchemeWatch {
    #[cfg(target_arch = "wasm32")]
    listener: Option<(
        web_sys::MediaQueryList,
        wasm_bindgen::closure::Closure<dyn FnMut()>,
    )>,
}

/// Call `on_change` with the new preference whenever the OS scheme flips.
#[cfg(target_arch = "wasm32")]
pub fn watch_color_scheme(mut on_change: impl FnMut(bool) + 'static) -> ColorSchemeWatch {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(mql) = prefers_dark_query() else {
        return ColorSchemeWatch::default();
    };
    let query = mql.clone();
    let callback = Closure::<dyn FnMut()>::new(move || on_change(query.matches()));
    if mql
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .is_err()
    {
        return ColorSchemeWatch::default();
    }
    ColorSchemeWatch {
        listener: Some((mql, callback)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_color_scheme(_on_change: impl FnMut(bool) + 'static) -> ColorSchemeWatch {
    ColorSchemeWatch::default()
}

#[cfg(target_arch = "wasm32")]
impl Drop for ColorSchemeWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some((mql, callback)) = self.listener.take() {
            let _ = mql.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        }
    }
}
