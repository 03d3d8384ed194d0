//! String catalog with exact-locale lookup.
//!
//! # Invariants
//!
//! 1. **Lookups are exact**: [`TranslationStore::lookup`] never walks a
//!    fallback chain. Fallback policy belongs to the caller, which keeps the
//!    store an opaque key to string table.
//!
//! 2. **Tags are normalized on insert and lookup**: `pt_BR` and `pt-BR` name
//!    the same table.
//!
//! 3. **Thread safety**: `StringCatalog` is `Send + Sync` (all data is
//!    immutable after construction).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing locale | No table for the tag | `Err(I18nError::MissingLocale)` |
//! | Missing key | Table exists, key absent | `Err(I18nError::MissingKey)` |
//! | Invalid tag | Empty or blank tag | `Err(I18nError::InvalidLocale)` |

use std::collections::HashMap;

use crate::locale::{Locale, normalize_locale};

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale string was malformed.
    InvalidLocale(String),
    /// No table is registered for the locale.
    MissingLocale(Locale),
    /// The locale table has no entry for the key.
    MissingKey { locale: Locale, key: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l:?}"),
            Self::MissingLocale(l) => write!(f, "no translation table for locale '{l}'"),
            Self::MissingKey { locale, key } => {
                write!(f, "key '{key}' not found in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Read access to translated strings, keyed by locale tag and symbolic key.
pub trait TranslationStore: Send + Sync {
    /// Look up `key` in the table for exactly `locale`.
    fn lookup(&self, locale: &str, key: &str) -> Result<&str, I18nError>;

    /// Whether a table exists for exactly `locale`.
    fn has_locale(&self, locale: &str) -> bool;
}

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut strings = Self::new();
        for (key, value) in iter {
            strings.insert(key, value);
        }
        strings
    }
}

/// In-memory catalog of locale tables.
///
/// # Example
///
/// ```
/// use confirmkit_i18n::catalog::{LocaleStrings, StringCatalog, TranslationStore};
///
/// let mut catalog = StringCatalog::new();
/// let mut fr = LocaleStrings::new();
/// fr.insert("YES", "Oui");
/// catalog.add_locale("fr_FR", fr);
///
/// assert_eq!(catalog.lookup("fr-FR", "YES"), Ok("Oui"));
/// assert!(catalog.lookup("fr", "YES").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for a locale, merging into an existing table.
    ///
    /// Entries in `strings` replace existing entries with the same key.
    /// Blank tags are ignored.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) {
        let Some(locale) = normalize_locale(locale) else {
            return;
        };
        let table = self.locales.entry(locale).or_default();
        for (key, value) in strings.strings {
            table.insert(key, value);
        }
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// The table for a locale, if registered.
    #[must_use]
    pub fn table(&self, locale: &str) -> Option<&LocaleStrings> {
        let locale = normalize_locale(locale)?;
        self.locales.get(&locale)
    }
}

impl TranslationStore for StringCatalog {
    fn lookup(&self, locale: &str, key: &str) -> Result<&str, I18nError> {
        let tag =
            normalize_locale(locale).ok_or_else(|| I18nError::InvalidLocale(locale.to_string()))?;
        let table = self
            .locales
            .get(&tag)
            .ok_or_else(|| I18nError::MissingLocale(tag.clone()))?;
        table.get(key).ok_or_else(|| I18nError::MissingKey {
            locale: tag,
            key: key.to_string(),
        })
    }

    fn has_locale(&self, locale: &str) -> bool {
        self.table(locale).is_some()
    }
}
