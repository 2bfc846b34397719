//! Hex colors and readable-text contrast

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Broadcast-luma threshold: below is "dark", at or above is "light"
const LUMA_THRESHOLD: f64 = 128.0;

/// 24-bit RGB color, written as `#rrggbb`
///
/// Parses both `#rgb` and `#rrggbb` (case-insensitive) and always formats
/// as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

/// Text color chosen for legibility on a filled well
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// `#000000`
    Black,
    /// `#ffffff`
    White,
}

impl TextColor {
    /// Color value of this text color
    #[must_use]
    pub const fn hex(self) -> HexColor {
        match self {
            TextColor::Black => HexColor::from_rgb(0, 0, 0),
            TextColor::White => HexColor::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

impl HexColor {
    /// Create from channel values
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceived brightness, `0.299 R + 0.587 G + 0.114 B` (0..=255)
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Text color readable on top of this color
    #[must_use]
    pub fn contrasting_text(self) -> TextColor {
        if self.luminance() < LUMA_THRESHOLD {
            TextColor::White
        } else {
            TextColor::Black
        }
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            6 => Ok(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            // #rgb expands each nibble: #3bf -> #33bbff
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Self::from_rgb(r * 0x11, g * 0x11, b * 0x11))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
