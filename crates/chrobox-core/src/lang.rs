//! Supported UI/content languages.

use serde::{Deserialize, Serialize};

/// The closed set of languages the site ships content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English (default and fallback language).
    En,
    /// Korean.
    Ko,
}

impl Lang {
    /// All supported languages, English first (it is the fallback).
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ko];

    /// The fallback language used when a translation is missing.
    pub const FALLBACK: Lang = Lang::En;

    /// Two-letter code used for storage, routing and asset paths.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ko => "ko",
        }
    }

    /// Parse an exact language code. Anything outside the closed set,
    /// including region-qualified locales, is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "ko" => Some(Lang::Ko),
            _ => None,
        }
    }

    /// Map a runtime-reported locale onto the closed set: `ko`-prefixed
    /// locales become Korean, everything else English.
    pub fn detect(locale: &str) -> Self {
        if locale.starts_with("ko") {
            Lang::Ko
        } else {
            Lang::En
        }
    }

    /// Native display name, shown in the language switcher.
    pub fn display_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ko => "한국어",
        }
    }

}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_exact() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("ko"), Some(Lang::Ko));
        assert_eq!(Lang::from_code("ko-KR"), None);
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code(""), None);
        assert_eq!(Lang::from_code("ja"), None);
    }

    #[test]
    fn test_detect_prefix() {
        assert_eq!(Lang::detect("ko"), Lang::Ko);
        assert_eq!(Lang::detect("ko-KR"), Lang::Ko);
        assert_eq!(Lang::detect("en-US"), Lang::En);
        assert_eq!(Lang::detect("ja-JP"), Lang::En);
        assert_eq!(Lang::detect(""), Lang::En);
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }
}
