//! The blog content catalog.
//!
//! Static, build-time-authored tables of post metadata and markdown bodies,
//! keyed by language and slug. All lookups are infallible: an unknown slug
//! is an expected outcome (stale link), surfaced as `None` or an empty body,
//! never as an error.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::lang::Lang;

/// Metadata for one (post, language) entry.
///
/// The slug is an opaque, stable identifier shared by the language variants
/// of the same conceptual post; it pairs translations across catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostMeta {
    /// Stable identifier, unique within a language.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Short teaser shown on cards.
    pub excerpt: String,

    /// Display category.
    pub category: String,

    /// Display author.
    pub author: String,

    /// Publication date as an ISO-8601 calendar date string.
    pub date: String,

    /// Ordered tags, may be empty.
    pub tags: Vec<String>,

    /// Static asset path for the card/hero image.
    pub image: String,

    /// Estimated reading time in minutes.
    pub read_time: u32,

    /// Language this entry belongs to.
    pub lang: Lang,
}

/// The static catalog of posts and bodies.
///
/// Posts are kept in declaration order per language; the catalog never
/// re-sorts them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    en: Vec<BlogPostMeta>,
    ko: Vec<BlogPostMeta>,
    bodies: HashMap<(Lang, String), String>,
}

impl Catalog {
    /// Build a catalog from a flat list of entries, partitioned per language
    /// in declaration order.
    pub fn new(posts: Vec<BlogPostMeta>) -> Self {
        let mut catalog = Self::default();
        for post in posts {
            match post.lang {
                Lang::En => catalog.en.push(post),
                Lang::Ko => catalog.ko.push(post),
            }
        }
        catalog
    }

    /// Register a markdown body for a (language, slug) pair.
    pub fn with_body(mut self, lang: Lang, slug: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert((lang, slug.into()), body.into());
        self
    }

    /// All posts for a language, in declaration order.
    pub fn posts(&self, lang: Lang) -> &[BlogPostMeta] {
        match lang {
            Lang::En => &self.en,
            Lang::Ko => &self.ko,
        }
    }

    /// Exact-match slug lookup within a language. Case-sensitive, no
    /// trimming: slugs are opaque identifiers.
    pub fn post(&self, slug: &str, lang: Lang) -> Option<&BlogPostMeta> {
        self.posts(lang).iter().find(|post| post.slug == slug)
    }

    /// Markdown body for a (slug, language) pair; empty string when no body
    /// is registered.
    pub fn body(&self, slug: &str, lang: Lang) -> &str {
        self.bodies
            .get(&(lang, slug.to_string()))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Validate the content invariants the runtime tolerates silently:
    /// every slug exists in every supported language and every body has
    /// matching metadata.
    ///
    /// Run from the test suite so a content gap fails the build instead of
    /// degrading to a not-found redirect in production.
    pub fn verify(&self) -> Result<()> {
        for lang in Lang::ALL {
            for post in self.posts(lang) {
                for other in Lang::ALL {
                    if self.post(&post.slug, other).is_none() {
                        return Err(CoreError::catalog(format!(
                            "slug '{}' has no '{}' translation",
                            post.slug,
                            other.code()
                        )));
                    }
                }
            }
        }
        for (lang, slug) in self.bodies.keys() {
            if self.post(slug, *lang).is_none() {
                return Err(CoreError::catalog(format!(
                    "body registered for '{}' ({}) without metadata",
                    slug,
                    lang.code()
                )));
            }
        }
        Ok(())
    }
}

/// Format an ISO-8601 date for display in the given language.
///
/// Falls back to the raw string when the date does not parse; dates are
/// display data, not a failure surface.
pub fn format_date(iso: &str, lang: Lang) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") else {
        return iso.to_string();
    };
    match lang {
        Lang::En => date.format("%B %-d, %Y").to_string(),
        Lang::Ko => date.format("%Y년 %-m월 %-d일").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, lang: Lang) -> BlogPostMeta {
        BlogPostMeta {
            slug: slug.to_string(),
            title: format!("Title {slug}"),
            excerpt: String::new(),
            category: "Productivity".to_string(),
            author: "Chrobox Team".to_string(),
            date: "2024-12-01".to_string(),
            tags: vec!["time-boxing".to_string()],
            image: format!("/screenshots/{}/1.png", lang.code()),
            read_time: 5,
            lang,
        }
    }

    fn asymmetric_catalog() -> Catalog {
        // en: a, b, c / ko: a, b
        Catalog::new(vec![
            meta("a", Lang::En),
            meta("b", Lang::En),
            meta("c", Lang::En),
            meta("a", Lang::Ko),
            meta("b", Lang::Ko),
        ])
    }

    #[test]
    fn test_posts_declaration_order() {
        let catalog = asymmetric_catalog();
        let slugs: Vec<_> = catalog.posts(Lang::En).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_every_listed_slug_resolves() {
        let catalog = asymmetric_catalog();
        for lang in Lang::ALL {
            for post in catalog.posts(lang) {
                let found = catalog.post(&post.slug, lang).expect("listed slug resolves");
                assert_eq!(found.slug, post.slug);
            }
        }
    }

    #[test]
    fn test_missing_translation_is_not_found() {
        let catalog = asymmetric_catalog();
        assert_eq!(catalog.posts(Lang::Ko).len(), 2);
        assert!(catalog.post("c", Lang::Ko).is_none());
        assert!(catalog.post("c", Lang::En).is_some());
    }

    #[test]
    fn test_slug_match_is_exact() {
        let catalog = asymmetric_catalog();
        assert!(catalog.post("A", Lang::En).is_none());
        assert!(catalog.post(" a", Lang::En).is_none());
        assert!(catalog.post("a ", Lang::En).is_none());
    }

    #[test]
    fn test_body_empty_when_missing() {
        let catalog = asymmetric_catalog().with_body(Lang::En, "a", "# Hello");
        assert_eq!(catalog.body("a", Lang::En), "# Hello");
        assert_eq!(catalog.body("a", Lang::Ko), "");
        assert_eq!(catalog.body("does-not-exist", Lang::En), "");
    }

    #[test]
    fn test_verify_flags_missing_translation() {
        let err = asymmetric_catalog().verify().unwrap_err();
        assert!(err.to_string().contains("'c'"));
        assert!(err.to_string().contains("ko"));
    }

    #[test]
    fn test_verify_flags_one_sided_post() {
        let catalog = Catalog::new(vec![meta("a", Lang::Ko)]);
        assert!(catalog.verify().is_err());
    }

    #[test]
    fn test_verify_flags_orphan_body() {
        let catalog = Catalog::new(vec![
            meta("a", Lang::En),
            meta("a", Lang::Ko),
        ])
        .with_body(Lang::En, "ghost", "# Orphan");
        let err = catalog.verify().unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_verify_passes_for_paired_catalog() {
        let catalog = Catalog::new(vec![
            meta("a", Lang::En),
            meta("a", Lang::Ko),
        ])
        .with_body(Lang::En, "a", "body")
        .with_body(Lang::Ko, "a", "본문");
        assert!(catalog.verify().is_ok());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-12-01", Lang::En), "December 1, 2024");
        assert_eq!(format_date("2024-12-01", Lang::Ko), "2024년 12월 1일");
        assert_eq!(format_date("2025-01-15", Lang::En), "January 15, 2025");
    }

    #[test]
    fn test_format_date_degrades_to_raw() {
        assert_eq!(format_date("soon", Lang::En), "soon");
        assert_eq!(format_date("2024-13-90", Lang::Ko), "2024-13-90");
    }
}
