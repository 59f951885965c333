//! Download call-to-action, the target of every "download" scroll.

use std::time::Duration;

use leptos::prelude::*;

use crate::carousel::use_rotation;
use crate::hero::APP_SCREENSHOTS;
use crate::i18n::use_i18n;

const APP_STORE_URL: &str =
    "https://apps.apple.com/kr/app/%ED%81%AC%EB%A1%9C%EB%B0%95%EC%8A%A4-%ED%83%80%EC%9E%84%EB%B0%95%EC%8A%A4-%ED%94%8C%EB%9E%98%EB%84%88/id6755880209";
const PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.richjunproject.chrobox";

#[component]
fn StoreButton(
    href: &'static str,
    sublabel: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
      <a class="store-button" href=href target="_blank" rel="noreferrer">
        <span class="store-button-sublabel">{sublabel}</span>
        <span class="store-button-label">{label}</span>
      </a>
    }
}

#[component]
pub fn Download() -> impl IntoView {
    let i18n = use_i18n();
    // The center phone mockup cycles through the screenshots; the side
    // phones stay static.
    let frame = use_rotation(APP_SCREENSHOTS.len(), Duration::from_millis(2500));

    view! {
      <section class="download" id="download">
        <h2>{move || i18n.t("download.title")}</h2>
        <p class="download-subtitle">{move || i18n.t("download.subtitle")}</p>

        <div class="store-buttons">
          <StoreButton href=APP_STORE_URL sublabel="Download on the" label="App Store" />
          <StoreButton href=PLAY_STORE_URL sublabel="Get it on" label="Google Play" />
        </div>

        <div class="phone-mockups">
          <div class="phone-frame side">
            <img src=APP_SCREENSHOTS[0] alt="App screenshot" />
          </div>
          <div class="phone-frame center">
            <img
              src=move || APP_SCREENSHOTS[frame.get()]
              alt="App screenshot"
            />
          </div>
          <div class="phone-frame side">
            <img src=APP_SCREENSHOTS[2] alt="App screenshot" />
          </div>
        </div>
      </section>
    }
}
