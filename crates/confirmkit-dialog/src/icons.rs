#![forbid(unsafe_code)]

//! Icon factories for dialogs and buttons.
//!
//! Both factories are swappable through [`DialogConfig`](crate::DialogConfig):
//! dialog icons via `with_dialog_icon_factory`, button icons via
//! `with_button_icon_factory`.

use confirmkit_style::{DialogIcon, IconHandle, Rgb};

use crate::button::ButtonType;

/// Severity of a dialog, selecting its lead icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Question,
    Warning,
    Error,
}

/// Supplies the lead icon for each dialog severity.
pub trait DialogIconFactory: Send + Sync {
    fn icon(&self, severity: Severity) -> DialogIcon;
}

/// Supplies the default icon for each button type.
pub trait ButtonIconFactory: Send + Sync {
    fn icon(&self, kind: ButtonType) -> Option<IconHandle>;
}

/// Colored circle icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDialogIcons;

impl DialogIconFactory for StandardDialogIcons {
    fn icon(&self, severity: Severity) -> DialogIcon {
        match severity {
            Severity::Question => {
                DialogIcon::new(IconHandle::QuestionCircle).color(Rgb::new(0xff, 0xc1, 0x07))
            }
            Severity::Info => {
                DialogIcon::new(IconHandle::InfoCircle).color(Rgb::new(0x00, 0x7b, 0xff))
            }
            Severity::Warning => {
                DialogIcon::new(IconHandle::ExclamationCircle).color(Rgb::new(0xfd, 0x7e, 0x14))
            }
            Severity::Error => {
                DialogIcon::new(IconHandle::CloseCircle).color(Rgb::new(0xdc, 0x35, 0x45))
            }
        }
    }
}

/// Untinted glyph icons; errors reuse the warning icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDialogIcons;

impl DialogIconFactory for PlainDialogIcons {
    fn icon(&self, severity: Severity) -> DialogIcon {
        let icon = match severity {
            Severity::Question => IconHandle::Question,
            Severity::Info => IconHandle::Info,
            Severity::Warning | Severity::Error => IconHandle::Warning,
        };
        DialogIcon::new(icon)
    }
}

/// Default button icon table.
///
/// Cancel shares the exit icon with abort and no unless configured otherwise
/// with [`StandardButtonIcons::cancel_icon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardButtonIcons {
    cancel: Option<IconHandle>,
}

impl Default for StandardButtonIcons {
    fn default() -> Self {
        Self {
            cancel: Some(IconHandle::Exit),
        }
    }
}

impl StandardButtonIcons {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the cancel icon; `None` leaves cancel buttons without an icon.
    #[must_use]
    pub fn cancel_icon(mut self, icon: Option<IconHandle>) -> Self {
        self.cancel = icon;
        self
    }
}

impl ButtonIconFactory for StandardButtonIcons {
    fn icon(&self, kind: ButtonType) -> Option<IconHandle> {
        match kind {
            ButtonType::Abort | ButtonType::No => Some(IconHandle::Exit),
            ButtonType::Cancel => self.cancel.clone(),
            ButtonType::Ok | ButtonType::Yes => Some(IconHandle::Check),
            ButtonType::Save => Some(IconHandle::Download),
            ButtonType::Help => Some(IconHandle::QuestionCircle),
            ButtonType::Ignore => Some(IconHandle::Bold),
            ButtonType::Retry => Some(IconHandle::Refresh),
            ButtonType::Close => Some(IconHandle::SignOut),
        }
    }
}
