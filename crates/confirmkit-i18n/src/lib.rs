#![forbid(unsafe_code)]

//! Localization primitives for confirmkit.
//!
//! - [`catalog`]: exact-locale string catalog and the [`TranslationStore`] seam.
//! - [`locale`]: locale tag normalization and the per-session override store.
//! - [`captions`]: bundled button caption tables.

pub mod captions;
pub mod catalog;
pub mod locale;

pub use captions::{BUNDLED_LOCALES, bundled_button_captions};
pub use catalog::{I18nError, LocaleStrings, StringCatalog, TranslationStore};
pub use locale::{
    BASE_LOCALE, Locale, SessionId, SessionLocales, language_of, normalize_locale,
};
