#![forbid(unsafe_code)]

//! Fluent configuration core for modal confirmation dialogs.
//!
//! # Role in confirmkit
//! `confirmkit-dialog` assembles a [`ConfirmDialog`]: headings, a lead icon,
//! a message and a row of typed or custom buttons. The result is a plain
//! [`DialogLayout`] handed to a [`DialogSurface`], so any widget host can
//! present it.
//!
//! # Key pieces
//! - [`ConfirmDialog`]: the builder, its lifecycle and click dispatch.
//! - [`ButtonOption`]: per-button adjustments applied in order.
//! - [`ButtonTypeResolver`] and [`CaptionTranslator`]: default presentation
//!   and localized captions for typed buttons.
//! - [`TransitionGate`]: interception of open and close.
//! - [`DialogConfig`] and [`defaults`]: shared defaults and collaborators.
//!
//! # Feature flags
//! - `settings`: load [`DialogSettings`] from TOML or JSON.

pub mod button;
pub mod config;
pub mod defaults;
pub mod dialog;
pub mod error;
pub mod icons;
pub mod layout;
pub mod option;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod surface;
pub mod text;
pub mod transition;
pub mod translator;

pub use button::{Button, ButtonId, ButtonType};
pub use config::{DEFAULT_ICON_SIZE, DialogConfig};
pub use dialog::{ClickHandler, ConfirmDialog};
pub use error::{DialogError, Operation};
pub use icons::{
    ButtonIconFactory, DialogIconFactory, PlainDialogIcons, Severity, StandardButtonIcons,
    StandardDialogIcons,
};
pub use layout::{DialogLayout, Message, MessageComponent, PlacedIcon};
pub use option::ButtonOption;
pub use registry::ButtonRegistry;
pub use resolver::{ButtonPresentation, ButtonTypeResolver, ThemedButtonResolver, default_theme};
#[cfg(feature = "settings")]
pub use settings::SettingsError;
pub use settings::DialogSettings;
pub use surface::{DialogSurface, RecordingSurface, SurfaceEvent};
pub use text::{TextSurface, render_text};
pub use transition::{FnGate, TransitionGate};
pub use translator::{CaptionTranslator, CatalogCaptionTranslator};
