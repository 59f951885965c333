//! Application shell: context setup and the route table.

use chrobox_core::Catalog;
use chrobox_ui::{provide_catalog, provide_i18n, provide_locale};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

pub mod pages;
pub mod routes;

use pages::{BlogListPage, BlogPostPage, HomePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Locale first: the i18n layer and every page read it.
    let locale = provide_locale();
    provide_i18n(locale);
    provide_catalog(Catalog::bundled());

    view! {
      <Title text="Chrobox - Time-Boxing Planner" />

      <Router>
        <Routes fallback=|| view! { <Redirect path="/" /> }>
          <Route path=StaticSegment("") view=HomePage />
          <Route path=StaticSegment("blog") view=BlogListPage />
          <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage />
        </Routes>
      </Router>
    }
}
