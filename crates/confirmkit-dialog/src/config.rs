#![forbid(unsafe_code)]

//! Dialog defaults and pluggable collaborators.
//!
//! A [`DialogConfig`] is an explicit value handed to every factory call. It
//! is `Send + Sync` and cheap to clone: collaborators are shared through
//! `Arc`. Hosts that prefer process-wide defaults can store one in
//! [`defaults`](crate::defaults).
//!
//! # Example
//!
//! ```
//! use confirmkit_dialog::{ButtonType, DialogConfig};
//!
//! let config = DialogConfig::default().with_default_locale("fr_FR.UTF-8");
//! assert_eq!(config.default_locale(), "fr-FR");
//! assert_eq!(config.caption(Some(ButtonType::Yes)), "Oui");
//! ```

use std::fmt;
use std::sync::Arc;

use confirmkit_i18n::{BASE_LOCALE, Locale, SessionId, SessionLocales, normalize_locale};
use confirmkit_style::{Alignment, DialogIcon};

use crate::button::ButtonType;
use crate::icons::{
    ButtonIconFactory, DialogIconFactory, Severity, StandardButtonIcons, StandardDialogIcons,
};
use crate::resolver::{ButtonPresentation, ButtonTypeResolver, ThemedButtonResolver};
use crate::settings::DialogSettings;
use crate::transition::TransitionGate;
use crate::translator::{CaptionTranslator, CatalogCaptionTranslator};

/// Size applied to dialog icons when none is given.
pub const DEFAULT_ICON_SIZE: &str = "48px";

/// Defaults and collaborators shared by dialogs.
#[derive(Clone)]
pub struct DialogConfig {
    default_locale: Locale,
    session_locale: Option<Locale>,
    dialog_icons: Arc<dyn DialogIconFactory>,
    dialog_icon_size: String,
    button_alignment: Alignment,
    translator: Arc<dyn CaptionTranslator>,
    resolver: Arc<dyn ButtonTypeResolver>,
    button_icons: Arc<dyn ButtonIconFactory>,
    button_icons_visible: bool,
    add_close_by_default: bool,
    gate: Option<Arc<dyn TransitionGate>>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            default_locale: BASE_LOCALE.to_string(),
            session_locale: None,
            dialog_icons: Arc::new(StandardDialogIcons),
            dialog_icon_size: DEFAULT_ICON_SIZE.to_string(),
            button_alignment: Alignment::End,
            translator: Arc::new(CatalogCaptionTranslator::bundled()),
            resolver: Arc::new(ThemedButtonResolver),
            button_icons: Arc::new(StandardButtonIcons::new()),
            button_icons_visible: true,
            add_close_by_default: true,
            gate: None,
        }
    }
}

impl fmt::Debug for DialogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogConfig")
            .field("default_locale", &self.default_locale)
            .field("session_locale", &self.session_locale)
            .field("dialog_icon_size", &self.dialog_icon_size)
            .field("button_alignment", &self.button_alignment)
            .field("button_icons_visible", &self.button_icons_visible)
            .field("add_close_by_default", &self.add_close_by_default)
            .field("gate", &self.gate.is_some())
            .finish_non_exhaustive()
    }
}

impl DialogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder -----------------------------------------------------------

    /// Locale used when no session override is present.
    ///
    /// Tags that do not normalize (empty, malformed) leave the value unchanged.
    #[must_use]
    pub fn with_default_locale(mut self, locale: &str) -> Self {
        if let Some(locale) = normalize_locale(locale) {
            self.default_locale = locale;
        }
        self
    }

    /// Per-session locale override. `None` removes the override.
    #[must_use]
    pub fn with_session_locale(mut self, locale: Option<&str>) -> Self {
        self.session_locale = locale.and_then(normalize_locale);
        self
    }

    #[must_use]
    pub fn with_dialog_icon_factory(mut self, icons: Arc<dyn DialogIconFactory>) -> Self {
        self.dialog_icons = icons;
        self
    }

    /// Width and height of severity icons. Blank sizes are ignored.
    #[must_use]
    pub fn with_dialog_icon_size(mut self, size: &str) -> Self {
        let size = size.trim();
        if !size.is_empty() {
            self.dialog_icon_size = size.to_string();
        }
        self
    }

    #[must_use]
    pub fn with_button_alignment(mut self, alignment: Alignment) -> Self {
        self.button_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_caption_translator(mut self, translator: Arc<dyn CaptionTranslator>) -> Self {
        self.translator = translator;
        self
    }

    #[must_use]
    pub fn with_button_resolver(mut self, resolver: Arc<dyn ButtonTypeResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Icon factory handed to the resolver. The resolver itself is kept.
    #[must_use]
    pub fn with_button_icon_factory(mut self, icons: Arc<dyn ButtonIconFactory>) -> Self {
        self.button_icons = icons;
        self
    }

    #[must_use]
    pub fn with_button_icons_visible(mut self, visible: bool) -> Self {
        self.button_icons_visible = visible;
        self
    }

    /// Whether `open()` adds a Close button to dialogs without buttons.
    #[must_use]
    pub fn with_add_close_by_default(mut self, add: bool) -> Self {
        self.add_close_by_default = add;
        self
    }

    /// Gate consulted on every open and close. `None` removes it.
    #[must_use]
    pub fn with_transition_gate(mut self, gate: Option<Arc<dyn TransitionGate>>) -> Self {
        self.gate = gate;
        self
    }

    /// This config with the locale override stored for `session`.
    ///
    /// Sessions without a stored locale get no override.
    #[must_use]
    pub fn for_session(&self, sessions: &SessionLocales, session: &SessionId) -> Self {
        let mut config = self.clone();
        config.session_locale = sessions.get(session);
        config
    }

    /// Overlay the fields present in `settings`.
    #[must_use]
    pub fn apply_settings(mut self, settings: &DialogSettings) -> Self {
        if let Some(locale) = &settings.default_locale {
            self = self.with_default_locale(locale);
        }
        if let Some(size) = &settings.dialog_icon_size {
            self = self.with_dialog_icon_size(size);
        }
        if let Some(alignment) = settings.button_alignment {
            self.button_alignment = alignment;
        }
        if let Some(visible) = settings.button_icons_visible {
            self.button_icons_visible = visible;
        }
        if let Some(add) = settings.add_close_by_default {
            self.add_close_by_default = add;
        }
        self
    }

    // --- Accessors ---------------------------------------------------------

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    #[must_use]
    pub fn session_locale(&self) -> Option<&str> {
        self.session_locale.as_deref()
    }

    /// Session override if present, else the default locale.
    #[must_use]
    pub fn effective_locale(&self) -> &str {
        self.session_locale().unwrap_or(&self.default_locale)
    }

    #[must_use]
    pub fn dialog_icon_size(&self) -> &str {
        &self.dialog_icon_size
    }

    #[must_use]
    pub fn button_alignment(&self) -> Alignment {
        self.button_alignment
    }

    #[must_use]
    pub fn button_icons_visible(&self) -> bool {
        self.button_icons_visible
    }

    #[must_use]
    pub fn add_close_by_default(&self) -> bool {
        self.add_close_by_default
    }

    #[must_use]
    pub fn transition_gate(&self) -> Option<&Arc<dyn TransitionGate>> {
        self.gate.as_ref()
    }

    /// Lead icon for `severity` from the configured factory.
    #[must_use]
    pub fn dialog_icon(&self, severity: Severity) -> DialogIcon {
        self.dialog_icons.icon(severity)
    }

    /// Caption for `kind` in this config's locale.
    #[must_use]
    pub fn caption(&self, kind: Option<ButtonType>) -> String {
        self.translator
            .translate(kind, self.session_locale(), &self.default_locale)
    }

    /// Theme and icon for `kind`, with the icon dropped when icons are hidden.
    #[must_use]
    pub fn presentation(&self, kind: ButtonType) -> ButtonPresentation {
        let mut presentation = self.resolver.resolve(kind, &*self.button_icons);
        if !self.button_icons_visible {
            presentation.icon = None;
        }
        presentation
    }
}
