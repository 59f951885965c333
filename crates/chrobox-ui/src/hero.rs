//! Landing-page hero: headline, CTAs, stat row, and the rotating phone
//! screenshots.

use std::time::Duration;

use leptos::prelude::*;

use crate::carousel::use_rotation;
use crate::dom;
use crate::i18n::use_i18n;

/// Language-independent app screenshots, in rotation order.
pub(crate) const APP_SCREENSHOTS: [&str; 3] = ["/IMG_8137.PNG", "/IMG_8138.PNG", "/IMG_8136.PNG"];

const STATS: [(&str, &str); 3] = [
    ("25,000+", "hero.stats.users"),
    ("1.2M+", "hero.stats.tasks"),
    ("4.8", "hero.stats.rating"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let frame = use_rotation(APP_SCREENSHOTS.len(), Duration::from_secs(3));

    view! {
      <section class="hero" id="hero">
        <div class="hero-copy">
          <span class="hero-badge">{move || i18n.t("hero.badge")}</span>

          <h1 class="hero-title">
            {move || i18n.t("hero.title")} " "
            <span class="hero-highlight">{move || i18n.t("hero.titleHighlight")}</span>
          </h1>

          <p class="hero-subtitle">{move || i18n.t("hero.subtitle")}</p>

          <div class="hero-actions">
            <button class="cta-primary" on:click=move |_| dom::scroll_to_anchor("download")>
              {move || i18n.t("hero.cta")}
            </button>
            <button class="cta-secondary" on:click=move |_| dom::scroll_to_anchor("how-it-works")>
              {move || i18n.t("hero.ctaSecondary")}
            </button>
          </div>

          <dl class="hero-stats">
            {STATS
              .into_iter()
              .map(|(value, key)| {
                view! {
                  <div class="hero-stat">
                    <dt>{value}</dt>
                    <dd>{move || i18n.t(key)}</dd>
                  </div>
                }
              })
              .collect_view()}
          </dl>
        </div>

        <div class="hero-screenshots">
          {APP_SCREENSHOTS
            .into_iter()
            .enumerate()
            .map(|(i, src)| {
              view! {
                <img
                  src=src
                  alt="Chrobox app screenshot"
                  class="hero-screenshot"
                  class:active=move || frame.get() == i
                />
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}
