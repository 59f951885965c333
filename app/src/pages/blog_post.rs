//! One blog post, resolved from the `:slug` route param against the
//! catalog for the active language. An unknown slug replace-redirects to
//! the index; switching the language re-resolves the same slug in place.

use chrobox_core::format_date;
use chrobox_markdown::render_html;
use chrobox_ui::{Footer, Navbar, dom, use_catalog, use_i18n};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_params_map;

use crate::routes::{BlogRoute, blog_route};

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = use_catalog();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    // Jump back to the top when navigating between posts.
    Effect::new(move |_| {
        slug.track();
        dom::scroll_to_top();
    });

    move || {
        let slug = slug.get();
        let lang = i18n.lang();
        match catalog.with_value(|c| blog_route(c, lang, &slug)) {
            BlogRoute::BackToList => view! {
              <Redirect
                path="/blog"
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
              />
            }
            .into_any(),
            BlogRoute::Post(post) => {
                let body = catalog.with_value(|c| render_html(c.body(&post.slug, lang)));
                let date = format_date(&post.date, lang);
                let read_time = post.read_time;

                view! {
                  <Navbar />
                  <main class="blog-post-page">
                    <header class="post-hero">
                      <A href="/blog" attr:class="back-link">
                        {move || i18n.t("blog.backToBlog")}
                      </A>

                      <span class="post-category">{post.category.clone()}</span>
                      <h1 class="post-title">{post.title.clone()}</h1>

                      <div class="post-meta">
                        <span class="post-author">{post.author.clone()}</span>
                        <span class="post-date">{date}</span>
                        <span class="post-read-time">
                          {read_time} " " {move || i18n.t("blog.minRead")}
                        </span>
                      </div>
                    </header>

                    <figure class="post-featured-image">
                      <img src=post.image.clone() alt=post.title.clone() />
                    </figure>

                    <article class="post-body" inner_html=body></article>

                    <div class="post-tags">
                      {post
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="post-tag">"#" {tag.clone()}</span> })
                        .collect_view()}
                    </div>

                    <aside class="post-cta">
                      <h2>{move || i18n.t("blog.cta.title")}</h2>
                      <p>{move || i18n.t("blog.cta.subtitle")}</p>
                      <A href="/#download" attr:class="cta-primary">
                        {move || i18n.t("blog.cta.button")}
                      </A>
                    </aside>
                  </main>
                  <Footer />
                }
                .into_any()
            }
        }
    }
}
