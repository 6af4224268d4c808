//! The 256-entry hardware palette.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Component, Rgb16};

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 256;

/// A hardware colormap: exactly [`PALETTE_SIZE`] entries at 16-bit precision.
///
/// The length never changes. Entries are overwritten in place; nothing is
/// ever inserted or removed. A fresh palette is all black.
///
/// # Example
///
/// ```
/// use palette_index::{Palette, Rgb16, PALETTE_SIZE};
///
/// let mut palette = Palette::new();
/// palette.set(10, Rgb16::new(65535, 0, 0));
///
/// assert_eq!(palette.len(), PALETTE_SIZE);
/// assert_eq!(palette.get(10), Some(Rgb16::new(65535, 0, 0)));
/// assert_eq!(palette.get(256), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb16; PALETTE_SIZE],
}

impl Palette {
    /// An all-black palette.
    pub fn new() -> Self {
        Self {
            entries: [Rgb16::BLACK; PALETTE_SIZE],
        }
    }

    pub fn from_entries(entries: [Rgb16; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Build a palette from up to [`PALETTE_SIZE`] colors.
    ///
    /// Entries past the end of `colors` stay black.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::TooManyEntries`] if `colors` is longer than
    /// the palette.
    pub fn from_slice(colors: &[Rgb16]) -> Result<Self, PaletteError> {
        if colors.len() > PALETTE_SIZE {
            return Err(PaletteError::TooManyEntries { len: colors.len() });
        }

        let mut palette = Self::new();
        palette.entries[..colors.len()].copy_from_slice(colors);
        Ok(palette)
    }

    /// Build a palette from hex color strings like `"#FF0000"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for an invalid string and
    /// [`PaletteError::TooManyEntries`] for more than [`PALETTE_SIZE`] strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb16::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&parsed)
    }

    /// Always [`PALETTE_SIZE`].
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb16> {
        self.entries.get(index).copied()
    }

    /// Overwrite one entry. Indices past the end are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Rgb16) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = color;
        }
    }

    #[inline]
    pub fn channel(&self, index: usize, component: Component) -> Option<u16> {
        self.get(index).map(|c| c.channel(component))
    }

    /// Overwrite one channel of one entry. Indices past the end are ignored.
    #[inline]
    pub fn set_channel(&mut self, index: usize, component: Component, value: u16) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_channel(component, value);
        }
    }

    pub fn entries(&self) -> &[Rgb16; PALETTE_SIZE] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb16> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
