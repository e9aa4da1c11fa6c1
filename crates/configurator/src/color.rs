//! sRGB part colors.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// An 8-bit-per-channel sRGB color.
///
/// Text form is `#rrggbb`; `#rgb` shorthand is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PartColor {
    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn parse_hex(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            input: input.to_string(),
        };

        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // Each shorthand digit is doubled: #abc -> #aabbcc.
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::rgb(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for PartColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for PartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
