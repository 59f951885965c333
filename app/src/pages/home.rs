//! The landing page: fixed section order plus anchor handling for `/#id`
//! arrivals from other pages.

use chrobox_ui::{
    BlogSection, Download, Features, Footer, Hero, HowItWorks, Navbar, Pricing, dom,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    // A navigation to `/#anchor` lands here before the sections exist;
    // resolve the hash once after the first render.
    Effect::new(move |_| {
        if let Some(anchor) = dom::location_hash() {
            dom::scroll_to_anchor(&anchor);
        }
    });

    view! {
      <Navbar />
      <main class="landing">
        <Hero />
        <Features />
        <HowItWorks />
        <Pricing />
        <BlogSection />
        <Download />
      </main>
      <Footer />
    }
}
