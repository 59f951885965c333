//! Chrobox UI Components
//!
//! Leptos components for the Chrobox marketing site.
//!
//! # Components
//!
//! ## Landing sections
//! - [`Hero`] - Headline, CTAs, stats, rotating screenshots
//! - [`Features`] - Six-card feature grid
//! - [`HowItWorks`] - Localized screenshot carousel
//! - [`Pricing`] - Three dictionary-driven tiers
//! - [`BlogSection`] - Blog teaser with view-all link
//! - [`Download`] - Store badges and phone mockups
//!
//! ## Chrome
//! - [`Navbar`] - Top navigation with language switcher
//! - [`Footer`] - Company details and legal links
//!
//! ## Blog
//! - [`PostCard`] - One post card, shared by teaser and index
//!
//! # Context
//!
//! The app root installs three contexts before rendering any component:
//! the locale state ([`provide_locale`]), the translation layer
//! ([`provide_i18n`]), and the content catalog ([`provide_catalog`]).

pub mod blog;
pub mod carousel;
pub mod dom;
pub mod download;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod i18n;
pub mod navbar;
pub mod pricing;

pub use blog::{BlogSection, PostCard, provide_catalog, use_catalog};
pub use download::Download;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use i18n::{I18n, LocaleState, provide_i18n, provide_locale, use_i18n, use_locale};
pub use navbar::Navbar;
pub use pricing::Pricing;
