//! Shared top navigation.
//!
//! Section links scroll in place when the landing page is already showing
//! and route home (carrying the anchor) otherwise. The mobile-menu flag is
//! local to this component; the language switcher writes through
//! [`LocaleState`](crate::i18n::LocaleState).

use chrobox_core::Lang;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::dom;
use crate::i18n::{use_i18n, use_locale};

/// Section anchors shown in the main navigation, in display order.
const NAV_ITEMS: [(&str, &str); 3] = [
    ("nav.features", "features"),
    ("nav.howItWorks", "how-it-works"),
    ("nav.pricing", "pricing"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let menu_open = RwSignal::new(false);

    let navigate = use_navigate();
    let location = use_location();
    let go_to_section = Callback::new(move |anchor: &'static str| {
        if location.pathname.get_untracked() == "/" {
            dom::scroll_to_anchor(anchor);
        } else {
            navigate(&format!("/#{anchor}"), Default::default());
        }
        menu_open.set(false);
    });

    let navigate_home = use_navigate();
    let home_location = use_location();
    let go_home = move |_| {
        if home_location.pathname.get_untracked() == "/" {
            dom::scroll_to_top();
        } else {
            navigate_home("/", Default::default());
        }
    };

    view! {
      <header class="site-header">
        <div class="site-header-inner">
          <button class="site-logo" on:click=go_home>
            "Chrobox"
          </button>

          <nav class="site-nav" aria-label="Main navigation">
            {NAV_ITEMS
              .into_iter()
              .map(|(key, anchor)| {
                view! {
                  <button class="site-nav-link" on:click=move |_| go_to_section.run(anchor)>
                    {move || i18n.t(key)}
                  </button>
                }
              })
              .collect_view()}
          </nav>

          <div class="site-header-actions">
            <LanguageSwitcher />

            <button class="download-button" on:click=move |_| go_to_section.run("download")>
              {move || i18n.t("nav.download")}
            </button>

            <button
              class="menu-toggle"
              aria-expanded=move || menu_open.get().to_string()
              on:click=move |_| menu_open.update(|open| *open = !*open)
            >
              {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
          </div>
        </div>

        <Show when=move || menu_open.get()>
          <nav class="mobile-menu" aria-label="Mobile navigation">
            {NAV_ITEMS
              .into_iter()
              .map(|(key, anchor)| {
                view! {
                  <button class="mobile-menu-link" on:click=move |_| go_to_section.run(anchor)>
                    {move || i18n.t(key)}
                  </button>
                }
              })
              .collect_view()}
            <button class="mobile-menu-link" on:click=move |_| go_to_section.run("download")>
              {move || i18n.t("nav.download")}
            </button>
          </nav>
        </Show>
      </header>
    }
}

/// Two-way language switcher; the only writer of the locale preference.
#[component]
fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();

    view! {
      <div class="lang-switcher" role="group" aria-label="Language">
        {Lang::ALL
          .into_iter()
          .map(|lang| {
            view! {
              <button
                class="lang-option"
                class:active=move || locale.get() == lang
                on:click=move |_| locale.set(lang)
              >
                {lang.display_name()}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}
