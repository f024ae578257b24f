use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An opaque sRGB color, written and read as a hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Srgb<u8>);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    pub fn hex(code: &str) -> Result<Self, ParseError> {
        code.parse()
    }

    pub fn red(&self) -> u8 {
        self.0.red
    }

    pub fn green(&self) -> u8 {
        self.0.green
    }

    pub fn blue(&self) -> u8 {
        self.0.blue
    }

    pub fn into_srgb(self) -> Srgb<u8> {
        self.0
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self(rgb)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with('#') {
            return Err(ParseError::InvalidColor(s.to_string()));
        }
        trimmed
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|_| ParseError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.red, self.0.green, self.0.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::hex("#E3E5EB").unwrap();
        assert_eq!((color.red(), color.green(), color.blue()), (0xE3, 0xE5, 0xEB));
        assert_eq!(color.to_string(), "#E3E5EB");
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(Color::hex("#fff").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::hex("red").is_err());
        assert!(Color::hex("#12345").is_err());
    }
}
