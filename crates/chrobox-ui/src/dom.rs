//! Browser glue: durable preference storage, locale detection, and anchor
//! scrolling.
//!
//! Everything here is behind `cfg(target_arch = "wasm32")` with inert
//! fallbacks so the crate (and its unit tests) compiles on the native
//! target. Storage failures are swallowed: a blocked localStorage degrades
//! to the detected-locale default, never to an error.

use chrobox_core::PreferenceStore;

/// `PreferenceStore` backed by the browser's localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage_get(key)
    }

    fn set(&self, key: &str, value: &str) {
        storage_set(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) else {
        log::warn!("localStorage unavailable, language preference not persisted");
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("failed to persist preference '{key}'");
    }
}

/// The locale the runtime reports for the user, e.g. `ko-KR`.
#[cfg(target_arch = "wasm32")]
pub fn system_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// Smooth-scroll the element with the given id into view.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll the window back to the top.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// The current location hash without the leading `#`, if any.
#[cfg(target_arch = "wasm32")]
pub fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let anchor = hash.strip_prefix('#').unwrap_or(&hash);
    if anchor.is_empty() {
        None
    } else {
        Some(anchor.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_locale() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_anchor(_id: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_hash() -> Option<String> {
    None
}
