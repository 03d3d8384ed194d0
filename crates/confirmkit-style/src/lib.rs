#![forbid(unsafe_code)]

//! Presentation primitives for confirmkit dialogs.
//!
//! This crate provides:
//! - [`Rgb`] colors parsed from and printed as `#rrggbb`
//! - [`IconHandle`] opaque icon identifiers and [`DialogIcon`] (icon + color)
//! - [`ButtonTheme`] flags rendered as a theme attribute (`"primary error"`)
//! - [`Alignment`] for the button row

pub mod alignment;
pub mod color;
pub mod icon;
pub mod theme;

pub use alignment::Alignment;
pub use color::{ColorParseError, Rgb};
pub use icon::{DialogIcon, IconHandle};
pub use theme::ButtonTheme;
