//! Error types for palette operations
//!
//! This module provides error types for colour parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex colour strings.
///
/// Returned when parsing a hex colour string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// A poster palette has exactly one colour per posterization level.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Wrong number of colours supplied
    WrongLength {
        /// Number of colours that was supplied
        found: usize,
    },
    /// Invalid hex colour string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongLength { found } => {
                write!(f, "palette must have exactly 3 colors, got {}", found)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_messages() {
        assert_eq!(
            PaletteError::WrongLength { found: 2 }.to_string(),
            "palette must have exactly 3 colors, got 2"
        );
        assert_eq!(
            PaletteError::ParseColor(ParseColorError::InvalidLength).to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_parse_color_error_source() {
        use std::error::Error;

        let hex_err = u8::from_str_radix("zz", 16).unwrap_err();
        let err = ParseColorError::from(hex_err);
        assert!(err.source().is_some());
        assert!(ParseColorError::InvalidLength.source().is_none());
    }
}
