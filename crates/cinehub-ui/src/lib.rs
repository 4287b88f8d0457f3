#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! CineHub web UI.
//!
//! This crate holds the Yew front-end entrypoint plus the DOM-free core it is
//! built on. Everything under [`core`], [`features`] state modules and
//! [`i18n`] compiles natively so `cargo test` exercises the catalog, library
//! and view-state logic without a browser; the `app`, `components`, view and
//! `services` layers are wasm32-only.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nav.home", "Inicio"), "Home");
        assert_eq!(bundle.text("nav.missing_key", "Default"), "Default");
    }

    #[test]
    fn default_locale_is_spanish() {
        assert_eq!(crate::i18n::DEFAULT_LOCALE, LocaleCode::Es);
    }
}
