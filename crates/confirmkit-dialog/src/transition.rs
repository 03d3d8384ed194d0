#![forbid(unsafe_code)]

//! Interception of the open and close transitions.
//!
//! A [`TransitionGate`] sees every `open()` and `close()` request before the
//! surface does. Returning `true` lets the default effect run; returning
//! `false` means the gate already performed the effect (for example after an
//! animation) through [`ConfirmDialog::show_surface`] or
//! [`ConfirmDialog::hide_surface`], and the default is skipped.
//!
//! Gates are synchronous decision points. They must not call `open()` or
//! `close()` on the dialog they are handed.

use std::fmt;

use crate::dialog::ConfirmDialog;

/// Intercepts dialog show/close transitions.
pub trait TransitionGate: Send + Sync {
    /// Called before the dialog is shown. `false` skips the default show.
    fn before_show(&self, dialog: &mut ConfirmDialog) -> bool;

    /// Called before the dialog is closed. `false` skips the default hide.
    fn before_close(&self, dialog: &mut ConfirmDialog) -> bool;
}

type GateFn = Box<dyn Fn(&mut ConfirmDialog) -> bool + Send + Sync>;

/// A gate assembled from closures. Missing hooks always proceed.
#[derive(Default)]
pub struct FnGate {
    show: Option<GateFn>,
    close: Option<GateFn>,
}

impl FnGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook for the show transition.
    #[must_use]
    pub fn on_show(
        mut self,
        hook: impl Fn(&mut ConfirmDialog) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.show = Some(Box::new(hook));
        self
    }

    /// Hook for the close transition.
    #[must_use]
    pub fn on_close(
        mut self,
        hook: impl Fn(&mut ConfirmDialog) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.close = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for FnGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGate")
            .field("show", &self.show.is_some())
            .field("close", &self.close.is_some())
            .finish()
    }
}

impl TransitionGate for FnGate {
    fn before_show(&self, dialog: &mut ConfirmDialog) -> bool {
        self.show.as_ref().is_none_or(|hook| hook(dialog))
    }

    fn before_close(&self, dialog: &mut ConfirmDialog) -> bool {
        self.close.as_ref().is_none_or(|hook| hook(dialog))
    }
}
