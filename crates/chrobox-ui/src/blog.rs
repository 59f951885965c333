//! Blog catalog context and the landing-page blog section.
//!
//! The catalog is immutable content, so it lives in a [`StoredValue`]
//! rather than a signal; only the active language drives re-rendering.

use chrobox_core::{BlogPostMeta, Catalog, format_date};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

/// Install the content catalog into context; called once from the app root.
pub fn provide_catalog(catalog: Catalog) -> StoredValue<Catalog> {
    let stored = StoredValue::new(catalog);
    provide_context(stored);
    stored
}

/// The catalog installed by the app root.
pub fn use_catalog() -> StoredValue<Catalog> {
    expect_context::<StoredValue<Catalog>>()
}

/// One post card, shared by the landing-page section and the blog index.
#[component]
pub fn PostCard(post: BlogPostMeta) -> impl IntoView {
    let i18n = use_i18n();
    let href = format!("/blog/{}", post.slug);
    let date = format_date(&post.date, post.lang);
    let read_time = post.read_time;

    view! {
      <article class="post-card">
        <A href=href attr:class="post-card-link">
          <div class="post-card-image">
            <img src=post.image.clone() alt=post.title.clone() />
            <span class="post-card-category">{post.category.clone()}</span>
          </div>
          <div class="post-card-body">
            <h3 class="post-card-title">{post.title.clone()}</h3>
            <p class="post-card-excerpt">{post.excerpt.clone()}</p>
            <div class="post-card-meta">
              <span class="post-card-date">{date}</span>
              <span class="post-card-read-time">
                {read_time} " " {move || i18n.t("blog.minRead")}
              </span>
            </div>
            <span class="post-card-read-more">{move || i18n.t("blog.readMore")}</span>
          </div>
        </A>
      </article>
    }
}

/// Landing-page blog teaser: the posts for the active language plus a
/// view-all link into the blog index.
#[component]
pub fn BlogSection() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = use_catalog();

    view! {
      <section class="blog-section" id="blog">
        <header class="section-header">
          <span class="section-eyebrow">{move || i18n.t("blog.eyebrow")}</span>
          <h2>{move || i18n.t("blog.title")}</h2>
          <p>{move || i18n.t("blog.subtitle")}</p>
        </header>

        <div class="post-grid">
          <For
            each=move || catalog.with_value(|c| c.posts(i18n.lang()).to_vec())
            key=|post| (post.slug.clone(), post.lang)
            children=move |post| view! { <PostCard post=post /> }
          />
        </div>

        <div class="blog-section-footer">
          <A href="/blog" attr:class="view-all-link">
            {move || i18n.t("blog.viewAll")}
          </A>
        </div>
      </section>
    }
}
