#![forbid(unsafe_code)]

//! Locale tags and the per-session locale override store.
//!
//! Tags are normalized to BCP-47-like form (`pt_BR.UTF-8` becomes `pt-BR`) so
//! that catalogs and lookups agree on spelling. The [`SessionLocales`] store
//! keeps one override per [`SessionId`]; dialogs never read it implicitly,
//! callers resolve the override for their session and pass it along.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Locale identifier (e.g., `"en"`, `"pt-BR"`, `"sr"`).
pub type Locale = String;

/// Locale every lookup eventually falls back to.
pub const BASE_LOCALE: &str = "en";

/// Normalize a raw locale tag.
///
/// Accepts POSIX spellings (`fr_FR.UTF-8`, `de_DE@euro`) and BCP-47 tags.
/// The language subtag is lowercased, two-letter region subtags are
/// uppercased, and `C`/`POSIX` map to [`BASE_LOCALE`]. Returns `None` for
/// empty input.
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return Some(BASE_LOCALE.to_string());
    }

    let mut normalized = String::with_capacity(raw.len());
    for (i, subtag) in raw.split(['_', '-']).filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            normalized.push_str(&subtag.to_ascii_lowercase());
            continue;
        }
        normalized.push('-');
        if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            normalized.push_str(&subtag.to_ascii_uppercase());
        } else {
            normalized.push_str(subtag);
        }
    }
    (!normalized.is_empty()).then_some(normalized)
}

/// The language subtag of a normalized locale (`"pt-BR"` -> `"pt"`).
#[must_use]
pub fn language_of(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Identifier of a user session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-session locale overrides.
///
/// Clones share the same underlying map. Entries are keyed by session, so an
/// override set for one session is never visible to another.
#[derive(Debug, Clone, Default)]
pub struct SessionLocales {
    inner: Arc<RwLock<HashMap<SessionId, Locale>>>,
}

impl SessionLocales {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale override for a session.
    ///
    /// An empty or unparseable tag removes the override instead.
    pub fn set(&self, session: SessionId, locale: &str) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match normalize_locale(locale) {
            Some(locale) => {
                map.insert(session, locale);
            }
            None => {
                map.remove(&session);
            }
        }
    }

    /// Remove the override for a session, returning the previous value.
    pub fn clear(&self, session: &SessionId) -> Option<Locale> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session)
    }

    /// The override for a session, if any.
    #[must_use]
    pub fn get(&self, session: &SessionId) -> Option<Locale> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session)
            .cloned()
    }

    /// Number of sessions with an override.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no session has an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
