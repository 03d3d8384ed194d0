#![forbid(unsafe_code)]

//! Button identities and button descriptors.

use std::fmt;

use confirmkit_style::{ButtonTheme, IconHandle};
use unicode_width::UnicodeWidthStr;

/// Semantic role of a dialog button.
///
/// The role drives the default caption, icon, and theme of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ButtonType {
    Ok,
    Abort,
    Cancel,
    Yes,
    No,
    Close,
    Save,
    Retry,
    Ignore,
    /// Clicking a help button does not close the dialog unless told otherwise.
    Help,
}

impl ButtonType {
    /// Every button type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Ok,
        Self::Abort,
        Self::Cancel,
        Self::Yes,
        Self::No,
        Self::Close,
        Self::Save,
        Self::Retry,
        Self::Ignore,
        Self::Help,
    ];

    /// Symbolic name, used as the translation key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Abort => "ABORT",
            Self::Cancel => "CANCEL",
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Close => "CLOSE",
            Self::Save => "SAVE",
            Self::Retry => "RETRY",
            Self::Ignore => "IGNORE",
            Self::Help => "HELP",
        }
    }

    /// Whether a button of this type closes the dialog when clicked by default.
    #[must_use]
    pub const fn closes_by_default(self) -> bool {
        !matches!(self, Self::Help)
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Handle of a button inside one dialog's button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(usize);

impl ButtonId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the button in the row.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A button in the dialog's button row.
///
/// Buttons are plain data; the surface draws them and the dialog routes
/// clicks back through [`ConfirmDialog::click`](crate::ConfirmDialog::click).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Semantic role, `None` for custom buttons.
    pub kind: Option<ButtonType>,
    /// Display label.
    pub caption: String,
    pub icon: Option<IconHandle>,
    pub theme: ButtonTheme,
    /// Explicit width in host units (`"120px"`, `"12ch"`).
    pub width: Option<String>,
    pub enabled: bool,
    /// Extra style class names.
    pub class_names: Vec<String>,
    /// Whether the button holds input focus when shown.
    pub focused: bool,
    pub vertically_centered: bool,
    /// Whether clicking the button closes the dialog.
    pub close_on_click: bool,
}

impl Button {
    /// Create an enabled custom button.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            kind: None,
            caption: caption.into(),
            icon: None,
            theme: ButtonTheme::empty(),
            width: None,
            enabled: true,
            class_names: Vec::new(),
            focused: false,
            vertically_centered: false,
            close_on_click: false,
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: ButtonTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Add a style class name.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    /// Text drawn for the button on text surfaces: `[ ✔ OK ]`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) if self.caption.is_empty() => format!("[ {} ]", icon.glyph()),
            Some(icon) => format!("[ {} {} ]", icon.glyph(), self.caption),
            None => format!("[ {} ]", self.caption),
        }
    }

    /// Display width of [`Button::label`] in terminal cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.label().width()
    }
}
