#![forbid(unsafe_code)]

//! Cross-axis alignment of the button row.

/// Horizontal placement of the button row inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alignment {
    Start,
    Center,
    #[default]
    End,
    Stretch,
    Baseline,
}

impl Alignment {
    /// Left padding for content `used` cells wide inside `available` cells.
    #[must_use]
    pub fn offset(self, available: usize, used: usize) -> usize {
        let free = available.saturating_sub(used);
        match self {
            Self::Start | Self::Stretch | Self::Baseline => 0,
            Self::Center => free / 2,
            Self::End => free,
        }
    }
}
