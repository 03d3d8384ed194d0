#![forbid(unsafe_code)]

//! Plain-data dialog settings, loadable from TOML or JSON with the
//! `settings` feature.
//!
//! ```toml
//! default_locale = "pt_BR"
//! dialog_icon_size = "32px"
//! button_alignment = "center"
//! button_icons_visible = false
//! add_close_by_default = true
//! ```

use confirmkit_style::Alignment;

/// Overrides for a [`DialogConfig`](crate::DialogConfig).
///
/// Absent fields keep the config's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "settings", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "settings", serde(default, deny_unknown_fields))]
pub struct DialogSettings {
    pub default_locale: Option<String>,
    pub dialog_icon_size: Option<String>,
    pub button_alignment: Option<Alignment>,
    pub button_icons_visible: Option<bool>,
    pub add_close_by_default: Option<bool>,
}

/// Errors from loading [`DialogSettings`].
#[cfg(feature = "settings")]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid locale tag {0:?}")]
    InvalidLocale(String),
    #[error("dialog icon size must not be blank")]
    BlankIconSize,
}

#[cfg(feature = "settings")]
impl DialogSettings {
    pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the config setters would silently ignore.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(locale) = &self.default_locale {
            if confirmkit_i18n::normalize_locale(locale).is_none() {
                return Err(SettingsError::InvalidLocale(locale.clone()));
            }
        }
        if self
            .dialog_icon_size
            .as_deref()
            .is_some_and(|size| size.trim().is_empty())
        {
            return Err(SettingsError::BlankIconSize);
        }
        Ok(())
    }
}
