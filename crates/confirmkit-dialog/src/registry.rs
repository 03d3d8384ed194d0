#![forbid(unsafe_code)]

//! Lookup of typed buttons by their role.

use std::collections::HashMap;

use crate::button::{ButtonId, ButtonType};

/// Tracks the button created for each [`ButtonType`] in one dialog.
///
/// Registering a type twice replaces the earlier entry; the earlier button
/// stays in the row but is no longer reachable by type. Custom buttons are
/// never registered.
#[derive(Debug, Clone, Default)]
pub struct ButtonRegistry {
    buttons: HashMap<ButtonType, ButtonId>,
}

impl ButtonRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as the button for `kind`, returning the replaced id.
    pub fn register(&mut self, kind: ButtonType, id: ButtonId) -> Option<ButtonId> {
        self.buttons.insert(kind, id)
    }

    #[must_use]
    pub fn get(&self, kind: ButtonType) -> Option<ButtonId> {
        self.buttons.get(&kind).copied()
    }

    #[must_use]
    pub fn contains(&self, kind: ButtonType) -> bool {
        self.buttons.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
