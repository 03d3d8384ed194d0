#![forbid(unsafe_code)]

//! Errors surfaced by the dialog builder.

use crate::button::ButtonId;

/// Errors returned by [`ConfirmDialog`](crate::ConfirmDialog) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// A structural change was requested after the dialog was opened.
    #[error("{}", immutable_message(.operation))]
    Immutable { operation: Operation },
    /// A click was delivered for a button this dialog never issued.
    #[error("unknown button id {0}")]
    UnknownButton(ButtonId),
}

impl DialogError {
    pub(crate) fn immutable(operation: Operation) -> Self {
        Self::Immutable { operation }
    }

    /// Whether this is the illegal-state error raised after opening.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Immutable { .. })
    }
}

/// Structural operations guarded by the open transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddButton,
    ButtonWidth,
    Icon,
    Caption,
    Message,
}

fn immutable_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::AddButton => {
            "The dialog cannot be enhanced with a button after it has been opened."
        }
        Operation::ButtonWidth => {
            "The width for all buttons cannot be modified after the dialog has been opened."
        }
        Operation::Icon => "The dialog icon cannot be changed after the dialog has been opened.",
        Operation::Caption => {
            "The dialog cannot be enhanced with a caption after it has been opened."
        }
        Operation::Message => "The message cannot be changed after the dialog has been opened.",
    }
}
