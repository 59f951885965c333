//! The six-card feature grid.

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Dictionary key stems for the feature cards, in display order.
const FEATURE_KEYS: [&str; 6] = [
    "planning",
    "timeline",
    "analytics",
    "sync",
    "retrospective",
    "widget",
];

#[component]
pub fn Features() -> impl IntoView {
    let i18n = use_i18n();

    view! {
      <section class="features" id="features">
        <header class="section-header">
          <h2>{move || i18n.t("features.title")}</h2>
          <p>{move || i18n.t("features.subtitle")}</p>
        </header>

        <div class="feature-grid">
          {FEATURE_KEYS
            .into_iter()
            .map(|key| {
              view! {
                <article class="feature-card">
                  <h3>{move || i18n.t(&format!("features.{key}.title"))}</h3>
                  <p>{move || i18n.t(&format!("features.{key}.description"))}</p>
                </article>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}
