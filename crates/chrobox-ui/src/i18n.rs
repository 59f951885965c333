//! Reactive localization state.
//!
//! The active language is a single process-wide signal behind a Leptos
//! context: initialized once from the persisted preference (falling back to
//! the detected browser locale), mutated only by the language switcher, and
//! read reactively by every component so a switch re-renders everything
//! without a reload.

use chrobox_core::{Lang, Translations, locale};
use leptos::prelude::*;

use crate::dom::{self, LocalStorage};

/// Process-wide active-language state.
#[derive(Debug, Clone, Copy)]
pub struct LocaleState {
    lang: RwSignal<Lang>,
}

impl LocaleState {
    /// Resolve the initial language from storage and the browser locale.
    pub fn init() -> Self {
        let lang = locale::resolve(&LocalStorage, dom::system_locale().as_deref());
        Self {
            lang: RwSignal::new(lang),
        }
    }

    /// The active language (reactive read).
    pub fn get(&self) -> Lang {
        self.lang.get()
    }

    /// Switch the active language and persist the preference. Consumers
    /// re-render through the signal; no reload is required.
    pub fn set(&self, lang: Lang) {
        self.lang.set(lang);
        locale::persist(&LocalStorage, lang);
    }
}

/// Install the locale state into context; called once from the app root.
pub fn provide_locale() -> LocaleState {
    let state = LocaleState::init();
    provide_context(state);
    state
}

/// The locale state installed by the app root.
pub fn use_locale() -> LocaleState {
    expect_context::<LocaleState>()
}

/// Dictionaries joined to the active language, the `t`-function components
/// call for every display string.
#[derive(Clone, Copy)]
pub struct I18n {
    translations: StoredValue<Translations>,
    locale: LocaleState,
}

impl I18n {
    fn new(locale: LocaleState) -> Self {
        let translations = Translations::bundled().unwrap_or_else(|err| {
            log::error!("translation dictionaries failed to load: {err}");
            Translations::empty()
        });
        Self {
            translations: StoredValue::new(translations),
            locale,
        }
    }

    /// The active language (reactive read).
    pub fn lang(&self) -> Lang {
        self.locale.get()
    }

    /// Resolve a scalar translation for the active language.
    pub fn t(&self, key: &str) -> String {
        let lang = self.locale.get();
        self.translations.with_value(|tr| tr.text(key, lang))
    }

    /// Resolve a scalar translation with `{{name}}` interpolation.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let lang = self.locale.get();
        self.translations.with_value(|tr| tr.text_with(key, lang, params))
    }

    /// Resolve a list-valued translation for the active language.
    pub fn t_list(&self, key: &str) -> Vec<String> {
        let lang = self.locale.get();
        self.translations.with_value(|tr| tr.list(key, lang))
    }
}

/// Load the dictionaries and install the `t`-function into context.
pub fn provide_i18n(locale: LocaleState) -> I18n {
    let i18n = I18n::new(locale);
    provide_context(i18n);
    i18n
}

/// The i18n context installed by the app root.
pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}
