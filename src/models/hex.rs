//! Model a 24-bit color serialized as six hexadecimal digits.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::error::{Error, FormatIssue, Result};

/// A 24-bit color, parsed from and rendered as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex(u32);

impl Hex {
    /// The largest value a hex color can hold.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Create a hex color from a 24-bit value. Bits above the lowest 24 are
    /// ignored.
    pub const fn new(value: u32) -> Self {
        Self(value & Self::MAX)
    }

    /// The 24-bit value of this color.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Parse a hex color. A single leading `#` is optional, the rest must be
    /// exactly six hex digits in either case.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        let issue = if digits.is_empty() {
            Some(FormatIssue::Empty)
        } else if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            Some(FormatIssue::NonHexDigit(c))
        } else if digits.len() != 6 {
            Some(FormatIssue::Length(digits.len()))
        } else {
            None
        };

        if let Some(reason) = issue {
            debug!(input, %reason, "rejected hex color");
            return Err(Error::invalid_format(input, reason));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| Error::invalid_format(input, FormatIssue::Length(digits.len())))
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<Hex> for String {
    fn from(value: Hex) -> Self {
        value.to_string()
    }
}
