//! Translation dictionaries.
//!
//! One dictionary per supported language, loaded fully at startup from JSON
//! documents embedded in the binary. Nested objects are flattened to dotted
//! key paths (`pricing.monthly.name`); leaf values are either a string or a
//! list of strings, validated once at load rather than at each call site.
//!
//! Lookup degrades rather than fails: a key missing from the active language
//! falls back to English, and a key missing everywhere comes back verbatim
//! so the gap is visible on screen and in the console.

use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::lang::Lang;

/// A dictionary value: scalar string or ordered list of strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    List(Vec<String>),
}

/// A single language's dictionary, keyed by dotted path.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Message>,
}

impl Dictionary {
    /// Parse and shape-validate a dictionary from its JSON source.
    pub fn from_json(lang: Lang, source: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|source| CoreError::DictionaryParse {
                lang: lang.code().to_string(),
                source,
            })?;
        let serde_json::Value::Object(root) = value else {
            return Err(CoreError::dictionary(
                lang.code(),
                "",
                "dictionary root must be an object",
            ));
        };
        let mut entries = HashMap::new();
        for (key, value) in root {
            flatten(lang, &key, &value, &mut entries)?;
        }
        Ok(Self { entries })
    }

    fn get(&self, key: &str) -> Option<&Message> {
        self.entries.get(key)
    }

    /// Number of leaf entries, used by load-time sanity checks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys present in this dictionary, for drift checks between languages.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten(
    lang: Lang,
    key: &str,
    value: &serde_json::Value,
    out: &mut HashMap<String, Message>,
) -> Result<()> {
    match value {
        serde_json::Value::String(text) => {
            out.insert(key.to_string(), Message::Text(text.clone()));
            Ok(())
        }
        serde_json::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(text) => list.push(text.clone()),
                    _ => {
                        return Err(CoreError::dictionary(
                            lang.code(),
                            key,
                            "lists may only contain strings",
                        ));
                    }
                }
            }
            out.insert(key.to_string(), Message::List(list));
            Ok(())
        }
        serde_json::Value::Object(map) => {
            for (child, value) in map {
                flatten(lang, &format!("{key}.{child}"), value, out)?;
            }
            Ok(())
        }
        _ => Err(CoreError::dictionary(
            lang.code(),
            key,
            "expected a string, a list of strings, or a nested table",
        )),
    }
}

/// The full set of dictionaries, one per supported language.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    en: Dictionary,
    ko: Dictionary,
}

impl Translations {
    /// Load and validate the dictionaries shipped with the build.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            en: Dictionary::from_json(Lang::En, include_str!("../locales/en.json"))?,
            ko: Dictionary::from_json(Lang::Ko, include_str!("../locales/ko.json"))?,
        })
    }

    /// An empty set; every lookup degrades to the raw key.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dictionary(&self, lang: Lang) -> &Dictionary {
        match lang {
            Lang::En => &self.en,
            Lang::Ko => &self.ko,
        }
    }

    fn lookup(&self, key: &str, lang: Lang) -> Option<&Message> {
        self.dictionary(lang).get(key).or_else(|| {
            if lang != Lang::FALLBACK {
                self.dictionary(Lang::FALLBACK).get(key)
            } else {
                None
            }
        })
    }

    /// Resolve a scalar string for the active language, falling back to
    /// English and then to the raw key.
    pub fn text(&self, key: &str, lang: Lang) -> String {
        match self.lookup(key, lang) {
            Some(Message::Text(text)) => text.clone(),
            Some(Message::List(_)) => {
                log::warn!("translation key '{key}' holds a list, expected text");
                key.to_string()
            }
            None => {
                log::warn!("missing translation key '{key}' ({})", lang.code());
                key.to_string()
            }
        }
    }

    /// Resolve a scalar string and substitute `{{name}}` placeholders.
    pub fn text_with(&self, key: &str, lang: Lang, params: &[(&str, &str)]) -> String {
        interpolate(&self.text(key, lang), params)
    }

    /// Resolve a list-valued key for the active language, falling back to
    /// English and then to an empty list.
    pub fn list(&self, key: &str, lang: Lang) -> Vec<String> {
        match self.lookup(key, lang) {
            Some(Message::List(items)) => items.clone(),
            Some(Message::Text(_)) => {
                log::warn!("translation key '{key}' holds text, expected a list");
                Vec::new()
            }
            None => {
                log::warn!("missing translation key '{key}' ({})", lang.code());
                Vec::new()
            }
        }
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        result = result.replace(&format!("{{{{{name}}}}}"), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations() -> Translations {
        let en = r#"{
            "nav": { "features": "Features", "pricing": "Pricing" },
            "hero": { "greeting": "Hello, {{name}}!" },
            "pricing": { "monthly": { "features": ["Unlimited time boxes", "All features included"] } },
            "english_only": "Only in English"
        }"#;
        let ko = r#"{
            "nav": { "features": "기능", "pricing": "가격" },
            "hero": { "greeting": "안녕하세요, {{name}}님!" },
            "pricing": { "monthly": { "features": ["무제한 타임박스", "모든 기능 포함"] } }
        }"#;
        Translations {
            en: Dictionary::from_json(Lang::En, en).expect("en parses"),
            ko: Dictionary::from_json(Lang::Ko, ko).expect("ko parses"),
        }
    }

    #[test]
    fn test_dotted_key_lookup() {
        let tr = translations();
        assert_eq!(tr.text("nav.features", Lang::En), "Features");
        assert_eq!(tr.text("nav.features", Lang::Ko), "기능");
    }

    #[test]
    fn test_fallback_to_english() {
        let tr = translations();
        assert_eq!(tr.text("english_only", Lang::Ko), "Only in English");
    }

    #[test]
    fn test_missing_key_returns_raw_key() {
        let tr = translations();
        assert_eq!(tr.text("nav.does_not_exist", Lang::Ko), "nav.does_not_exist");
        assert_eq!(tr.text("nav.does_not_exist", Lang::En), "nav.does_not_exist");
    }

    #[test]
    fn test_list_values() {
        let tr = translations();
        let en = tr.list("pricing.monthly.features", Lang::En);
        assert_eq!(en.len(), 2);
        assert_eq!(en[0], "Unlimited time boxes");
        let ko = tr.list("pricing.monthly.features", Lang::Ko);
        assert_eq!(ko[0], "무제한 타임박스");
    }

    #[test]
    fn test_shape_mismatch_degrades() {
        let tr = translations();
        assert_eq!(tr.text("pricing.monthly.features", Lang::En), "pricing.monthly.features");
        assert!(tr.list("nav.features", Lang::En).is_empty());
        assert!(tr.list("nav.missing", Lang::En).is_empty());
    }

    #[test]
    fn test_interpolation() {
        let tr = translations();
        assert_eq!(
            tr.text_with("hero.greeting", Lang::En, &[("name", "Dana")]),
            "Hello, Dana!"
        );
        assert_eq!(
            tr.text_with("hero.greeting", Lang::Ko, &[("name", "다나")]),
            "안녕하세요, 다나님!"
        );
    }

    #[test]
    fn test_interpolation_leaves_unknown_placeholders() {
        assert_eq!(interpolate("Hi {{who}}", &[("name", "x")]), "Hi {{who}}");
    }

    #[test]
    fn test_invalid_shape_rejected_at_load() {
        let err = Dictionary::from_json(Lang::En, r#"{ "count": 3 }"#).unwrap_err();
        assert!(err.to_string().contains("count"));

        let err = Dictionary::from_json(Lang::En, r#"{ "mixed": ["a", 1] }"#).unwrap_err();
        assert!(err.to_string().contains("mixed"));

        let err = Dictionary::from_json(Lang::En, r#"["not", "an", "object"]"#).unwrap_err();
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn test_invalid_json_rejected_at_load() {
        let err = Dictionary::from_json(Lang::Ko, "{ nope").unwrap_err();
        assert!(err.to_string().contains("'ko'"));
    }

    #[test]
    fn test_bundled_dictionaries_load_and_agree() {
        let tr = Translations::bundled().expect("bundled dictionaries are valid");
        assert!(!tr.dictionary(Lang::En).is_empty());
        assert!(!tr.dictionary(Lang::Ko).is_empty());
        // the key set is a fixed contract between dictionaries and components
        for key in tr.dictionary(Lang::En).keys() {
            assert!(
                tr.dictionary(Lang::Ko).get(key).is_some(),
                "key '{key}' missing from ko dictionary"
            );
        }
        for key in tr.dictionary(Lang::Ko).keys() {
            assert!(
                tr.dictionary(Lang::En).get(key).is_some(),
                "key '{key}' missing from en dictionary"
            );
        }
    }

    #[test]
    fn test_bundled_card_strings_resolve() {
        let tr = Translations::bundled().expect("bundled dictionaries are valid");
        assert_eq!(tr.text("blog.readMore", Lang::En), "Read more");
        assert_eq!(tr.text("blog.readMore", Lang::Ko), "읽기");
        assert_eq!(tr.text("blog.minRead", Lang::En), "min read");
        assert_eq!(tr.text("blog.minRead", Lang::Ko), "분 읽기");
    }

    #[test]
    fn test_empty_translations_degrade() {
        let tr = Translations::empty();
        assert_eq!(tr.text("hero.title", Lang::Ko), "hero.title");
        assert!(tr.list("pricing.monthly.features", Lang::En).is_empty());
    }
}
