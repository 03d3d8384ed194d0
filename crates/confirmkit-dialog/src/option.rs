#![forbid(unsafe_code)]

//! Post-construction button customizations.
//!
//! Options are applied once, in the order given, right after a button joins
//! the row. Different kinds are independent of each other; repeating a kind
//! applies each occurrence in turn, so the last one wins.

use confirmkit_style::IconHandle;

use crate::button::ButtonId;
use crate::layout::DialogLayout;

/// A customization applied to a freshly added button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonOption {
    /// Give the button input focus. Focus moves away from any other button.
    Focus,
    /// Add a style class name.
    Style(String),
    /// Set an explicit width.
    Width(String),
    /// Replace the caption.
    Caption(String),
    /// Disable the button.
    Disable,
    /// Replace the icon; `None` removes it.
    Icon(Option<IconHandle>),
    /// Whether clicking the button closes the dialog.
    ///
    /// When no option of this kind is supplied the button closes the dialog.
    CloseOnClick(bool),
}

impl ButtonOption {
    #[must_use]
    pub fn focus() -> Self {
        Self::Focus
    }

    pub fn style(class_name: impl Into<String>) -> Self {
        Self::Style(class_name.into())
    }

    pub fn width(width: impl Into<String>) -> Self {
        Self::Width(width.into())
    }

    pub fn caption(caption: impl Into<String>) -> Self {
        Self::Caption(caption.into())
    }

    #[must_use]
    pub fn disable() -> Self {
        Self::Disable
    }

    pub fn icon(icon: impl Into<Option<IconHandle>>) -> Self {
        Self::Icon(icon.into())
    }

    #[must_use]
    pub fn close_on_click(close: bool) -> Self {
        Self::CloseOnClick(close)
    }

    /// Whether this option decides the close-on-click behavior.
    #[must_use]
    pub fn is_close_on_click(&self) -> bool {
        matches!(self, Self::CloseOnClick(_))
    }

    /// Apply the option to the button `id` of `layout`.
    ///
    /// Unknown ids are ignored.
    pub fn apply(&self, layout: &mut DialogLayout, id: ButtonId) {
        if id.index() >= layout.buttons.len() {
            return;
        }
        tracing::trace!(button = %id, option = ?self, "apply button option");

        if let Self::Focus = self {
            for button in &mut layout.buttons {
                button.focused = false;
            }
        }

        let button = &mut layout.buttons[id.index()];
        match self {
            Self::Focus => button.focused = true,
            Self::Style(class_name) => button.class_names.push(class_name.clone()),
            Self::Width(width) => button.width = Some(width.clone()),
            Self::Caption(caption) => button.caption.clone_from(caption),
            Self::Disable => button.enabled = false,
            Self::Icon(icon) => button.icon.clone_from(icon),
            Self::CloseOnClick(close) => button.close_on_click = *close,
        }
    }
}
