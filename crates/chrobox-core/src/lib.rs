//! Chrobox Core Library
//!
//! Content catalog, localization and shared types for the Chrobox marketing
//! site. Everything here is pure, synchronous lookup over in-memory tables
//! authored at build time; there is no I/O and no framework dependency, so
//! the crate tests on the native target.

pub mod catalog;
pub mod data;
pub mod error;
pub mod i18n;
pub mod lang;
pub mod locale;

pub use catalog::{BlogPostMeta, Catalog, format_date};
pub use error::{CoreError, Result};
pub use i18n::{Message, Translations};
pub use lang::Lang;
pub use locale::{PreferenceStore, resolve_initial_language};
