#![forbid(unsafe_code)]

//! Process-wide default [`DialogConfig`].
//!
//! Readers take a lock-free snapshot; writers replace the whole config.
//! Dialogs copy the snapshot at creation, so later updates never reach an
//! existing dialog.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::config::DialogConfig;

static GLOBAL: OnceLock<ArcSwap<DialogConfig>> = OnceLock::new();

fn slot() -> &'static ArcSwap<DialogConfig> {
    GLOBAL.get_or_init(|| ArcSwap::from_pointee(DialogConfig::default()))
}

/// Current process-wide defaults.
#[must_use]
pub fn global() -> Arc<DialogConfig> {
    slot().load_full()
}

/// Replace the process-wide defaults.
pub fn set_global(config: DialogConfig) {
    slot().store(Arc::new(config));
}

/// Derive new process-wide defaults from the current ones.
///
/// Concurrent updates are retried, so `update` may run more than once.
pub fn update_global(update: impl Fn(DialogConfig) -> DialogConfig) {
    slot().rcu(|current| update(DialogConfig::clone(current)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ConfirmDialog;
    use crate::surface::RecordingSurface;
    use confirmkit_style::Alignment;

    // One test owns the global slot so parallel tests never race on it.
    #[test]
    fn set_update_and_snapshot() {
        let before = global();
        assert_eq!(before.default_locale(), "en");

        set_global(DialogConfig::default().with_default_locale("da"));
        assert_eq!(global().default_locale(), "da");

        update_global(|config| config.with_button_alignment(Alignment::Start));
        let current = global();
        assert_eq!(current.default_locale(), "da");
        assert_eq!(current.button_alignment(), Alignment::Start);

        // Snapshots taken earlier are unaffected.
        assert_eq!(before.default_locale(), "en");

        let dialog = ConfirmDialog::create_with_defaults(RecordingSurface::new())
            .with_yes_button(None, &[])
            .unwrap();
        assert_eq!(dialog.layout().buttons[0].caption, "Ja");
        assert_eq!(dialog.layout().button_alignment, Alignment::Start);

        set_global(DialogConfig::default());
    }
}
