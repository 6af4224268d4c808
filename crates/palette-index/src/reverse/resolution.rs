//! Quantization of 16-bit channels into reverse index buckets.

use crate::palette::PaletteError;

/// Bits per axis used when none is configured (32 buckets per channel).
pub const DEFAULT_RESOLUTION_BITS: u8 = 5;

/// Number of buckets per axis of a [`ReverseIndex`](super::ReverseIndex),
/// stored as its base-2 logarithm.
///
/// A resolution of `bits` divides each channel into `S = 2^bits` buckets by
/// discarding the low `16 - bits` bits of the 16-bit value.
///
/// # Example
///
/// ```
/// use palette_index::Resolution;
///
/// let res = Resolution::new(5).unwrap();
/// assert_eq!(res.size(), 32);
/// assert_eq!(res.bucket(65535), 31);
/// assert_eq!(res.bucket_unit(1.0), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    bits: u8,
}

impl Resolution {
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidResolution`] unless `1 <= bits <= 8`.
    pub fn new(bits: u8) -> Result<Self, PaletteError> {
        if (1..=8).contains(&bits) {
            Ok(Self { bits })
        } else {
            Err(PaletteError::InvalidResolution { bits })
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Buckets per axis (`S`).
    #[inline]
    pub fn size(self) -> usize {
        1 << self.bits
    }

    /// Total number of cells, `S³`.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.size() * self.size() * self.size()
    }

    #[inline]
    pub fn shift(self) -> u32 {
        16 - self.bits as u32
    }

    /// Bucket of a stored 16-bit channel value.
    #[inline]
    pub fn bucket(self, value: u16) -> usize {
        (value >> self.shift()) as usize
    }

    /// Bucket of a requested floating point channel.
    ///
    /// The channel is clamped to 0.0..=1.0, scaled by `S - 1` and truncated.
    /// This scales rather than shifts, so it can land one bucket below
    /// [`bucket`](Self::bucket) of the same color stored at 16 bits.
    #[inline]
    pub fn bucket_unit(self, x: f32) -> usize {
        (x.clamp(0.0, 1.0) * (self.size() - 1) as f32) as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            bits: DEFAULT_RESOLUTION_BITS,
        }
    }
}
