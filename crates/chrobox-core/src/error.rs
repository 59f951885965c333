//! Error types for the Chrobox core library.
//!
//! The error surface is deliberately narrow: catalog and translation lookups
//! never fail (absence is an `Option` or an empty value), so errors only
//! arise when authored data itself is malformed.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for the Chrobox site.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A translation dictionary failed shape validation at load.
    #[error("Dictionary error for '{lang}' at key '{key}': {message}")]
    Dictionary {
        lang: String,
        key: String,
        message: String,
    },

    /// A translation dictionary is not valid JSON.
    #[error("Dictionary parse error for '{lang}': {source}")]
    DictionaryParse {
        lang: String,
        #[source]
        source: serde_json::Error,
    },

    /// The bundled catalog violates a content invariant.
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl CoreError {
    /// Create a new dictionary shape error.
    pub fn dictionary(
        lang: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Dictionary {
            lang: lang.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error() {
        let err = CoreError::dictionary("ko", "pricing.monthly", "expected string");
        assert!(err.to_string().contains("'ko'"));
        assert!(err.to_string().contains("pricing.monthly"));
        assert!(err.to_string().contains("expected string"));
    }

    #[test]
    fn test_catalog_error() {
        let err = CoreError::catalog("slug 'c' missing for 'ko'");
        assert!(err.to_string().contains("Catalog error"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_parse_error_source() {
        let bad: serde_json::Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::DictionaryParse {
            lang: "en".into(),
            source: bad,
        };
        assert!(err.to_string().contains("parse error"));
    }
}
