//! Language preference resolution and persistence.
//!
//! The active language is read once at startup: a stored preference wins if
//! it is a supported code, otherwise the runtime's reported locale decides.
//! The preference only changes through an explicit switch, which writes it
//! back through the store.

use crate::lang::Lang;

/// Storage key for the persisted language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Seam over the durable key-value store holding the preference
/// (localStorage in the browser, an in-memory map in tests).
pub trait PreferenceStore {
    /// Read the raw stored preference, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the preference. Best effort; storage may be unavailable.
    fn set(&self, key: &str, value: &str);
}

/// Resolve the initial language from a raw stored value and the runtime's
/// reported locale. Malformed or unsupported stored values are treated as
/// absent, never as an error.
pub fn resolve_initial_language(stored: Option<&str>, system_locale: Option<&str>) -> Lang {
    if let Some(code) = stored {
        if let Some(lang) = Lang::from_code(code) {
            return lang;
        }
        log::warn!("ignoring unsupported stored language '{code}'");
    }
    system_locale.map(Lang::detect).unwrap_or_default()
}

/// Resolve the initial language through a preference store.
pub fn resolve<S: PreferenceStore>(store: &S, system_locale: Option<&str>) -> Lang {
    resolve_initial_language(store.get(LANGUAGE_KEY).as_deref(), system_locale)
}

/// Persist an explicit language switch.
pub fn persist<S: PreferenceStore>(store: &S, lang: Lang) {
    store.set(LANGUAGE_KEY, lang.code());
}
