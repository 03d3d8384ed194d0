#![forbid(unsafe_code)]

//! RGB colors for icon tinting.

use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let err = || ColorParseError(hex.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                Ok(Self::new(
                    channel(0).map_err(|_| err())?,
                    channel(2).map_err(|_| err())?,
                    channel(4).map_err(|_| err())?,
                ))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..=i], 16).map(|v| v * 0x11)
                };
                Ok(Self::new(
                    channel(0).map_err(|_| err())?,
                    channel(1).map_err(|_| err())?,
                    channel(2).map_err(|_| err())?,
                ))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A color string that is not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form() {
        assert_eq!(Rgb::from_hex("#ffc107"), Ok(Rgb::new(0xff, 0xc1, 0x07)));
        assert_eq!("007bff".parse::<Rgb>(), Ok(Rgb::new(0x00, 0x7b, 0xff)));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(Rgb::from_hex("#f80"), Ok(Rgb::new(0xff, 0x88, 0x00)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("").is_err());
        // Multi-byte input must not panic on slicing.
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn displays_lowercase_hex() {
        assert_eq!(Rgb::new(220, 53, 69).to_string(), "#dc3545");
    }
}
