#![forbid(unsafe_code)]

//! confirmkit: fluent confirmation dialogs for any widget host.
//!
//! This facade re-exports the member crates:
//! - [`dialog`]: the [`ConfirmDialog`](dialog::ConfirmDialog) builder and its collaborators
//! - [`i18n`]: locale handling and bundled button captions
//! - [`style`]: colors, icons, themes and alignment
//!
//! # Example
//!
//! ```
//! use confirmkit::prelude::*;
//!
//! let config = DialogConfig::default().with_default_locale("sv");
//! let surface = RecordingSurface::new();
//! let mut dialog = ConfirmDialog::create_warning(&config, surface.clone())
//!     .with_caption("Discard draft?")?
//!     .with_yes_button(None, &[])?
//!     .with_no_button(None, &[ButtonOption::focus()])?;
//! dialog.open();
//!
//! let shown = surface.last_shown().expect("dialog shown");
//! let captions: Vec<_> = shown.buttons.iter().map(|b| b.caption.as_str()).collect();
//! assert_eq!(captions, ["Ja", "Nej"]);
//! # Ok::<(), DialogError>(())
//! ```

pub use confirmkit_dialog as dialog;
pub use confirmkit_i18n as i18n;
pub use confirmkit_style as style;

/// Common imports.
pub mod prelude {
    pub use confirmkit_dialog::{
        Button, ButtonId, ButtonOption, ButtonType, ClickHandler, ConfirmDialog, DialogConfig,
        DialogError, DialogLayout, DialogSurface, FnGate, Message, RecordingSurface, Severity,
        TextSurface, TransitionGate,
    };
    pub use confirmkit_i18n::{SessionId, SessionLocales};
    pub use confirmkit_style::{Alignment, ButtonTheme, DialogIcon, IconHandle};
}
