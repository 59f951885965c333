//! How-it-works section with the per-language screenshot carousel.
//!
//! Screenshots are localized assets: the folder is keyed by the active
//! language (`/screenshots/<lang>/<n>.png`), so the images switch together
//! with the copy.

use std::time::Duration;

use chrobox_core::Lang;
use leptos::prelude::*;

use crate::carousel::use_rotation;
use crate::i18n::use_i18n;

/// Two alternating screenshot sets.
const SCREENSHOT_SETS: [[u8; 3]; 2] = [[1, 2, 3], [4, 5, 6]];

/// Path of a numbered app screenshot for a language.
pub fn screenshot_path(lang: Lang, number: u8) -> String {
    format!("/screenshots/{}/{}.png", lang.code(), number)
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let i18n = use_i18n();
    let set = use_rotation(SCREENSHOT_SETS.len(), Duration::from_secs(4));

    view! {
      <section class="how-it-works" id="how-it-works">
        <header class="section-header">
          <h2>{move || i18n.t("howItWorks.title")}</h2>
          <p>{move || i18n.t("howItWorks.subtitle")}</p>
        </header>

        <div class="screenshot-strip">
          {move || {
            let lang = i18n.lang();
            SCREENSHOT_SETS[set.get()]
              .into_iter()
              .map(|number| {
                view! {
                  <img
                    src=screenshot_path(lang, number)
                    alt=format!("App screenshot {number}")
                    class="strip-screenshot"
                  />
                }
              })
              .collect_view()
          }}
        </div>
      </section>
    }
}
