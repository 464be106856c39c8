//! Colour literals.
//!
//! Colours are written `#RRGGBB` or `#RRGGBBAA` with case-insensitive hex
//! digits. A parsed [`Color`] always carries an alpha channel: `ff` is
//! appended when the literal omits it. The original digit case is preserved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a normalized colour, `#` included.
const NORMALIZED_LEN: usize = 9;

/// Rejected colour literal.
///
/// All variants render the same user-facing message; the variant records
/// which check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not 7 or 9 characters long
    #[error("Invalid color definition {0}")]
    BadLength(String),
    /// Does not start with `#`
    #[error("Invalid color definition {0}")]
    MissingHash(String),
    /// Contains a non-hex digit
    #[error("Invalid color definition {0}")]
    NotHex(String),
}

impl ColorError {
    /// The rejected literal.
    pub fn input(&self) -> &str {
        match self {
            ColorError::BadLength(s) | ColorError::MissingHash(s) | ColorError::NotHex(s) => s,
        }
    }
}

/// Validated `#RRGGBBAA` colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    repr: [u8; NORMALIZED_LEN],
}

impl Color {
    /// Parse and normalize a colour literal.
    pub fn parse(input: &str) -> Result<Color, ColorError> {
        let bytes = input.as_bytes();
        if bytes.len() != 7 && bytes.len() != NORMALIZED_LEN {
            return Err(ColorError::BadLength(input.to_string()));
        }
        if bytes[0] != b'#' {
            return Err(ColorError::MissingHash(input.to_string()));
        }
        if !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
            return Err(ColorError::NotHex(input.to_string()));
        }

        let mut repr = [b'f'; NORMALIZED_LEN];
        repr[..bytes.len()].copy_from_slice(bytes);
        Ok(Color { repr })
    }

    /// Normalized `#RRGGBBAA` text.
    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits and '#' are ever stored.
        std::str::from_utf8(&self.repr).unwrap_or_default()
    }

    /// Colour packed as `0xRRGGBBAA`.
    pub fn rgba(&self) -> u32 {
        u32::from_str_radix(&self.as_str()[1..], 16).unwrap_or_default()
    }

    /// Alpha channel.
    pub fn alpha(&self) -> u8 {
        (self.rgba() & 0xff) as u8
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.as_str())
    }
}
