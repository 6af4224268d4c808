//! 16-bit-per-channel RGB color type
//!
//! Hardware colormaps store each channel as an unsigned 16-bit value where
//! 0 is no intensity and 65535 is full intensity.

use std::fmt;
use std::str::FromStr;

use super::component::Component;
use crate::palette::ParseColorError;

/// Largest channel value; represents 1.0.
pub const CHANNEL_MAX: u16 = u16::MAX;

/// A palette color with 16-bit precision per channel.
///
/// Values map linearly onto 0.0..=1.0. Use [`Rgb16::from_unit`] to convert
/// from floating point requests and [`Rgb16::channel_unit`] to convert back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb16 {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
}

impl Rgb16 {
    /// Black, the value of every entry in a fresh palette.
    pub const BLACK: Rgb16 = Rgb16::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to `v`.
    #[inline]
    pub const fn gray(v: u16) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create a color from floating point channels.
    ///
    /// Each channel is clamped to 0.0..=1.0, scaled by 65535 and truncated.
    /// NaN is treated as 0.0.
    ///
    /// # Example
    /// ```
    /// use palette_index::Rgb16;
    /// let c = Rgb16::from_unit(1.0, 0.5, -3.0);
    /// assert_eq!(c, Rgb16::new(65535, 32767, 0));
    /// ```
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }

    /// Widen 8-bit channels to 16 bits (`v * 257`, so 255 becomes 65535).
    ///
    /// # Example
    /// ```
    /// use palette_index::Rgb16;
    /// assert_eq!(Rgb16::from_u8(255, 0, 1), Rgb16::new(65535, 0, 257));
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
        }
    }

    /// Raw value of one channel.
    #[inline]
    pub fn channel(self, component: Component) -> u16 {
        match component {
            Component::Red => self.r,
            Component::Green => self.g,
            Component::Blue => self.b,
        }
    }

    /// Replace one channel.
    #[inline]
    pub fn set_channel(&mut self, component: Component, value: u16) {
        match component {
            Component::Red => self.r = value,
            Component::Green => self.g = value,
            Component::Blue => self.b = value,
        }
    }

    /// One channel normalized back to 0.0..=1.0.
    #[inline]
    pub fn channel_unit(self, component: Component) -> f32 {
        self.channel(component) as f32 / CHANNEL_MAX as f32
    }

    /// High byte of each channel.
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        [(self.r >> 8) as u8, (self.g >> 8) as u8, (self.b >> 8) as u8]
    }

    /// `#RRGGBB` built from the high byte of each channel.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[inline]
fn unit_to_channel(x: f32) -> u16 {
    // `as` saturates and maps NaN to 0
    (x.clamp(0.0, 1.0) * CHANNEL_MAX as f32) as u16
}

impl fmt::Display for Rgb16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:5}, {:5}, {:5})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb16 {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB` and the shorthand `#RGB`, with or without the
    /// leading hash. 8-bit values are widened with [`Rgb16::from_u8`].
    ///
    /// # Example
    /// ```
    /// use palette_index::Rgb16;
    /// let red: Rgb16 = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb16::new(65535, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');

        // Slicing by byte offsets; `get` keeps multi-byte input from panicking
        let digits = |start: usize, len: usize| -> Result<u8, ParseColorError> {
            let part = hex
                .get(start..start + len)
                .ok_or(ParseColorError::InvalidLength)?;
            Ok(u8::from_str_radix(part, 16)?)
        };

        match hex.len() {
            3 => Ok(Self::from_u8(
                digits(0, 1)? * 17,
                digits(1, 1)? * 17,
                digits(2, 1)? * 17,
            )),
            6 => Ok(Self::from_u8(digits(0, 2)?, digits(2, 2)?, digits(4, 2)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
