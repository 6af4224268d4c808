//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette construction
//! and reverse index configuration.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
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

/// Error type for palette and reverse index construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Quantization resolution outside 1..=8 bits per axis
    InvalidResolution {
        /// Requested bits per axis
        bits: u8,
    },
    /// More entries supplied than a palette can hold
    TooManyEntries {
        /// Number of entries supplied
        len: usize,
    },
    /// Invalid hex color string
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
            PaletteError::InvalidResolution { bits } => {
                write!(
                    f,
                    "invalid reverse map resolution: {} bits per axis (expected 1..=8)",
                    bits
                )
            }
            PaletteError::TooManyEntries { len } => {
                write!(
                    f,
                    "too many palette entries: {} (palette holds {})",
                    len,
                    super::PALETTE_SIZE
                )
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
    fn test_display_messages() {
        assert_eq!(
            PaletteError::InvalidResolution { bits: 9 }.to_string(),
            "invalid reverse map resolution: 9 bits per axis (expected 1..=8)"
        );
        assert_eq!(
            PaletteError::TooManyEntries { len: 300 }.to_string(),
            "too many palette entries: 300 (palette holds 256)"
        );
        assert_eq!(
            PaletteError::from(ParseColorError::InvalidLength).to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = PaletteError::from(ParseColorError::InvalidLength);
        assert!(err.source().is_some());
        assert!(PaletteError::InvalidResolution { bits: 0 }.source().is_none());
    }
}
