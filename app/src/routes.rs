//! Slug resolution for the blog post route.

use chrobox_core::{BlogPostMeta, Catalog, Lang};

/// Outcome of resolving a `/blog/:slug` request against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogRoute {
    /// The slug resolved in the active language; render the post.
    Post(BlogPostMeta),
    /// Unknown slug; replace-redirect to the blog index so the dead URL
    /// does not linger in history.
    BackToList,
}

/// Resolve a slug for the active language. Exact match only.
pub fn blog_route(catalog: &Catalog, lang: Lang, slug: &str) -> BlogRoute {
    match catalog.post(slug, lang) {
        Some(post) => BlogRoute::Post(post.clone()),
        None => BlogRoute::BackToList,
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
            tags: vec![],
            image: "/screenshots/en/1.png".to_string(),
            read_time: 5,
            lang,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            meta("what-is-time-boxing", Lang::En),
            meta("what-is-time-boxing", Lang::Ko),
            meta("en-only", Lang::En),
        ])
    }

    #[test]
    fn test_known_slug_resolves_to_post() {
        let route = blog_route(&catalog(), Lang::En, "what-is-time-boxing");
        match route {
            BlogRoute::Post(post) => assert_eq!(post.lang, Lang::En),
            BlogRoute::BackToList => panic!("known slug should resolve"),
        }
    }

    #[test]
    fn test_unknown_slug_redirects_to_list() {
        let route = blog_route(&catalog(), Lang::En, "does-not-exist");
        assert_eq!(route, BlogRoute::BackToList);
    }

    #[test]
    fn test_slug_missing_in_active_language_redirects() {
        assert!(matches!(
            blog_route(&catalog(), Lang::En, "en-only"),
            BlogRoute::Post(_)
        ));
        assert_eq!(blog_route(&catalog(), Lang::Ko, "en-only"), BlogRoute::BackToList);
    }

    #[test]
    fn test_slug_match_is_exact() {
        assert_eq!(
            blog_route(&catalog(), Lang::En, "What-Is-Time-Boxing"),
            BlogRoute::BackToList
        );
        assert_eq!(
            blog_route(&catalog(), Lang::En, "what-is-time-boxing "),
            BlogRoute::BackToList
        );
    }

    #[test]
    fn test_bundled_catalog_slugs_resolve_in_both_languages() {
        let catalog = Catalog::bundled();
        for lang in Lang::ALL {
            for post in catalog.posts(lang).to_vec() {
                assert!(matches!(
                    blog_route(&catalog, lang, &post.slug),
                    BlogRoute::Post(_)
                ));
            }
        }
    }
}
