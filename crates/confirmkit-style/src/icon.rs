#![forbid(unsafe_code)]

//! Opaque icon handles.
//!
//! The core never loads icon assets. An [`IconHandle`] names an icon from the
//! host's icon set; the surface decides how to draw it.

use std::borrow::Cow;
use std::fmt;

use crate::color::Rgb;

/// Identifier of an icon in the host's icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconHandle {
    Check,
    Exit,
    Download,
    QuestionCircle,
    Bold,
    Refresh,
    SignOut,
    Question,
    Info,
    Warning,
    InfoCircle,
    ExclamationCircle,
    CloseCircle,
    /// Any other icon, by host-specific name.
    Named(Cow<'static, str>),
}

impl IconHandle {
    /// Icon by host-specific name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }

    /// Stable kebab-case name of the icon.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Check => "check",
            Self::Exit => "exit",
            Self::Download => "download-alt",
            Self::QuestionCircle => "question-circle-o",
            Self::Bold => "bold",
            Self::Refresh => "refresh",
            Self::SignOut => "sign-out",
            Self::Question => "question",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::InfoCircle => "info-circle",
            Self::ExclamationCircle => "exclamation-circle",
            Self::CloseCircle => "close-circle",
            Self::Named(name) => name,
        }
    }

    /// Single-cell glyph for text surfaces.
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Self::Check => '✔',
            Self::Exit | Self::SignOut => '⏏',
            Self::Download => '↓',
            Self::QuestionCircle | Self::Question => '?',
            Self::Bold => 'B',
            Self::Refresh => '↻',
            Self::Info | Self::InfoCircle => 'i',
            Self::Warning | Self::ExclamationCircle => '!',
            Self::CloseCircle => '✖',
            Self::Named(_) => '•',
        }
    }
}

impl fmt::Display for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dialog-level icon with an optional tint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogIcon {
    pub icon: IconHandle,
    pub color: Option<Rgb>,
}

impl DialogIcon {
    /// Untinted icon.
    #[must_use]
    pub fn new(icon: IconHandle) -> Self {
        Self { icon, color: None }
    }

    /// Set the tint.
    #[must_use]
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<IconHandle> for DialogIcon {
    fn from(icon: IconHandle) -> Self {
        Self::new(icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_icon_keeps_name() {
        let icon = IconHandle::named("lumo:cog");
        assert_eq!(icon.name(), "lumo:cog");
        assert_eq!(icon.to_string(), "lumo:cog");
    }

    #[test]
    fn dialog_icon_builder() {
        let icon = DialogIcon::new(IconHandle::InfoCircle).color(Rgb::new(0, 0x7b, 0xff));
        assert_eq!(icon.icon, IconHandle::InfoCircle);
        assert_eq!(icon.color.map(|c| c.to_string()).as_deref(), Some("#007bff"));
    }

    #[test]
    fn from_handle_is_untinted() {
        let icon: DialogIcon = IconHandle::Warning.into();
        assert_eq!(icon.color, None);
    }
}
