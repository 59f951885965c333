//! Pricing tiers.
//!
//! The three tiers are dictionary-driven: names, prices, periods, badges
//! and the per-tier feature bullets (a list-valued key) all come from the
//! translation layer, so the section needs no per-language branches.

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Static shape of one pricing tier; display strings live in the
/// dictionaries under `pricing.<key>.*`.
struct TierSpec {
    key: &'static str,
    highlighted: bool,
    has_badge: bool,
    has_monthly_price: bool,
}

static TIERS: [TierSpec; 3] = [
    TierSpec {
        key: "monthly",
        highlighted: false,
        has_badge: false,
        has_monthly_price: false,
    },
    TierSpec {
        key: "yearly",
        highlighted: true,
        has_badge: true,
        has_monthly_price: true,
    },
    TierSpec {
        key: "lifetime",
        highlighted: false,
        has_badge: true,
        has_monthly_price: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    let i18n = use_i18n();

    view! {
      <section class="pricing" id="pricing">
        <header class="section-header">
          <h2>{move || i18n.t("pricing.title")}</h2>
          <p>{move || i18n.t("pricing.subtitle")}</p>
        </header>

        <div class="trial-banner">
          <strong>{move || i18n.t("pricing.trialBadge")}</strong>
          <p>{move || i18n.t("pricing.trialDescription")}</p>
        </div>

        <div class="pricing-grid">
          {TIERS.iter().map(|tier| pricing_card(tier)).collect_view()}
        </div>
      </section>
    }
}

fn pricing_card(tier: &'static TierSpec) -> impl IntoView {
    let i18n = use_i18n();
    let key = tier.key;

    view! {
      <article class="pricing-card" class:highlighted=tier.highlighted>
        <Show when=move || tier.has_badge>
          <span class="pricing-badge">{move || i18n.t(&format!("pricing.{key}.badge"))}</span>
        </Show>

        <h3 class="pricing-name">{move || i18n.t(&format!("pricing.{key}.name"))}</h3>

        <p class="pricing-price">{move || i18n.t(&format!("pricing.{key}.price"))}</p>
        <p class="pricing-period">{move || i18n.t(&format!("pricing.{key}.period"))}</p>

        <Show when=move || tier.has_monthly_price>
          <p class="pricing-monthly">
            {move || i18n.t(&format!("pricing.{key}.monthlyPrice"))}
          </p>
        </Show>

        <ul class="pricing-features">
          <For
            each=move || i18n.t_list(&format!("pricing.{key}.features"))
            key=|feature| feature.clone()
            children=move |feature| {
              view! { <li>{feature}</li> }
            }
          />
        </ul>
      </article>
    }
}
