use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A CSS length as accepted by `width`, `height` and `max-height`.
///
/// Percentages are stored as written (`50%` is `Percent(50.0)`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SizeRepr", into = "String")]
pub enum CssSize {
    Px(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl CssSize {
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    pub const fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Resolve against the containing block size, falling back to the
    /// element's intrinsic size for `auto`.
    pub fn resolve(self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(p) => available * p / 100.0,
            Self::Auto => intrinsic,
        }
    }
}

impl FromStr for CssSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let (number, percent) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, false)
        } else {
            (trimmed, false)
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidSize(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ParseError::InvalidSize(s.to_string()));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Px(value)
        })
    }
}

/// Serialized form: a CSS string or a bare number of pixels.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<SizeRepr> for CssSize {
    type Error = ParseError;

    fn try_from(value: SizeRepr) -> Result<Self, Self::Error> {
        match value {
            SizeRepr::Number(px) if px.is_finite() && px >= 0.0 => Ok(Self::Px(px)),
            SizeRepr::Number(px) => Err(ParseError::InvalidSize(px.to_string())),
            SizeRepr::Text(text) => text.parse(),
        }
    }
}

impl From<CssSize> for String {
    fn from(size: CssSize) -> Self {
        size.to_string()
    }
}

impl fmt::Display for CssSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Auto => write!(f, "auto"),
        }
    }
}
