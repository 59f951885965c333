//! The blog index: every post for the active language.

use chrobox_ui::{Footer, Navbar, PostCard, use_catalog, use_i18n};
use leptos::prelude::*;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = use_catalog();

    view! {
      <Navbar />
      <main class="blog-list-page">
        <header class="page-hero">
          <h1>{move || i18n.t("blog.title")}</h1>
          <p>{move || i18n.t("blog.subtitle")}</p>
        </header>

        <div class="post-grid">
          <For
            each=move || catalog.with_value(|c| c.posts(i18n.lang()).to_vec())
            key=|post| (post.slug.clone(), post.lang)
            children=move |post| view! { <PostCard post=post /> }
          />
        </div>
      </main>
      <Footer />
    }
}
