#![forbid(unsafe_code)]

//! Button theme variants.

use bitflags::bitflags;

bitflags! {
    /// Theme variants applied to a button.
    ///
    /// Rendered as a space-separated theme attribute by [`ButtonTheme::attribute`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonTheme: u8 {
        const PRIMARY = 0b0000_0001;
        const SECONDARY = 0b0000_0010;
        const TERTIARY = 0b0000_0100;
        const ERROR = 0b0000_1000;
        const SUCCESS = 0b0001_0000;
        const CONTRAST = 0b0010_0000;
    }
}

impl ButtonTheme {
    /// Theme attribute value, e.g. `"primary error"`. Empty for no flags.
    #[must_use]
    pub fn attribute(self) -> String {
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
