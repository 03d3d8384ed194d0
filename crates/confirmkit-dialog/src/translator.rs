#![forbid(unsafe_code)]

//! Button caption translation with locale fallback.
//!
//! # Resolution order
//!
//! 1. The session locale override, if present, else the fallback locale.
//! 2. That exact locale's table.
//! 3. The language-only parent (`pt-BR` -> `pt`), when it differs.
//! 4. The base locale ([`BASE_LOCALE`]).
//!
//! A miss at any stage silently moves to the next. Custom buttons
//! (`kind = None`) always translate to the empty string.

use std::fmt;
use std::sync::Arc;

use confirmkit_i18n::{
    BASE_LOCALE, Locale, TranslationStore, bundled_button_captions, language_of,
    normalize_locale,
};

use crate::button::ButtonType;

/// Resolves button captions for a locale.
pub trait CaptionTranslator: Send + Sync {
    /// Caption for `kind`, preferring `session_locale` over `fallback_locale`.
    fn translate(
        &self,
        kind: Option<ButtonType>,
        session_locale: Option<&str>,
        fallback_locale: &str,
    ) -> String;
}

/// Translator backed by a [`TranslationStore`].
#[derive(Clone)]
pub struct CatalogCaptionTranslator {
    store: Arc<dyn TranslationStore>,
}

impl CatalogCaptionTranslator {
    /// Translator over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn TranslationStore>) -> Self {
        Self { store }
    }

    /// Translator over the bundled caption tables.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Arc::new(bundled_button_captions()))
    }

    fn candidates(locale: &str) -> Vec<Locale> {
        let mut chain: Vec<Locale> = Vec::with_capacity(3);
        if let Some(exact) = normalize_locale(locale) {
            let parent = language_of(&exact).to_string();
            chain.push(exact);
            if !chain.contains(&parent) {
                chain.push(parent);
            }
        }
        if !chain.iter().any(|l| l == BASE_LOCALE) {
            chain.push(BASE_LOCALE.to_string());
        }
        chain
    }
}

impl Default for CatalogCaptionTranslator {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Debug for CatalogCaptionTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCaptionTranslator").finish_non_exhaustive()
    }
}

impl CaptionTranslator for CatalogCaptionTranslator {
    fn translate(
        &self,
        kind: Option<ButtonType>,
        session_locale: Option<&str>,
        fallback_locale: &str,
    ) -> String {
        let Some(kind) = kind else {
            return String::new();
        };
        let locale = session_locale
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(fallback_locale);

        for candidate in Self::candidates(locale) {
            match self.store.lookup(&candidate, kind.key()) {
                Ok(caption) => return caption.to_string(),
                Err(err) => tracing::trace!(%err, locale = %candidate, "caption lookup miss"),
            }
        }

        tracing::warn!(
            key = kind.key(),
            locale,
            "no caption in base locale, using symbolic name"
        );
        kind.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confirmkit_i18n::{LocaleStrings, StringCatalog};

    #[test]
    fn custom_button_is_empty() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(translator.translate(None, None, "en"), "");
        assert_eq!(translator.translate(None, Some("fr"), "de"), "");
    }

    #[test]
    fn exact_locale() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(translator.translate(Some(ButtonType::Yes), None, "fr"), "Oui");
        assert_eq!(translator.translate(Some(ButtonType::No), None, "pt_BR"), "Não");
    }

    #[test]
    fn session_locale_wins() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(
            translator.translate(Some(ButtonType::Cancel), Some("es"), "fr"),
            "Cancelar"
        );
    }

    #[test]
    fn blank_session_locale_is_ignored() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(translator.translate(Some(ButtonType::Yes), Some(""), "fr"), "Oui");
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(translator.translate(Some(ButtonType::Ok), None, "xx"), "OK");
        assert_eq!(translator.translate(Some(ButtonType::Help), Some("zz-ZZ"), "en"), "Help");
    }

    #[test]
    fn region_falls_back_to_language() {
        let translator = CatalogCaptionTranslator::bundled();
        assert_eq!(translator.translate(Some(ButtonType::Close), None, "fr_CA"), "Fermer");
    }

    #[test]
    fn missing_key_falls_back_to_base() {
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", [("SAVE", "Save")].into_iter().collect());
        let mut de = LocaleStrings::new();
        de.insert("OK", "OK");
        catalog.add_locale("de", de);
        let translator = CatalogCaptionTranslator::new(Arc::new(catalog));
        assert_eq!(translator.translate(Some(ButtonType::Save), None, "de"), "Save");
    }

    #[test]
    fn missing_everywhere_uses_symbolic_name() {
        let translator = CatalogCaptionTranslator::new(Arc::new(StringCatalog::new()));
        assert_eq!(translator.translate(Some(ButtonType::Retry), None, "fr"), "RETRY");
    }

    #[test]
    fn candidate_chain() {
        assert_eq!(
            CatalogCaptionTranslator::candidates("pt_BR"),
            vec!["pt-BR".to_string(), "pt".to_string(), "en".to_string()]
        );
        assert_eq!(CatalogCaptionTranslator::candidates("en-GB"), vec!["en-GB", "en"]);
        assert_eq!(CatalogCaptionTranslator::candidates(""), vec!["en"]);
    }
}
