//! Default palette ramps derived from the display's native bit depth.

use super::palette::{Palette, PALETTE_SIZE};
use crate::color::{Component, Rgb16};

/// Overwrite the leading entries of `palette` with the default ramp for a
/// display of `bits_per_pixel`.
///
/// - 15 bpp: entries 0..32 become a gray ramp, `i * 65535 / 31`.
/// - 16 bpp: red and blue of entries 0..32 ramp as `i * 65535 / 31`, green of
///   entries 0..64 ramps as `i * 65535 / 63` (5-6-5 channel layout).
/// - 24 and 32 bpp: all 256 entries become a gray ramp, `i * 257`.
///
/// Other depths leave the palette untouched, as do channels and entries the
/// ramp does not cover. Returns the number of entries the ramp wrote to.
///
/// # Example
///
/// ```
/// use palette_index::{apply_default_ramp, Palette, Rgb16};
///
/// let mut palette = Palette::new();
/// assert_eq!(apply_default_ramp(&mut palette, 15), 32);
/// assert_eq!(palette.get(31), Some(Rgb16::gray(65535)));
/// ```
pub fn apply_default_ramp(palette: &mut Palette, bits_per_pixel: u32) -> usize {
    match bits_per_pixel {
        15 => {
            for i in 0..32 {
                palette.set(i, Rgb16::gray(ramp(i, 31)));
            }
            32
        }
        16 => {
            for i in 0..32 {
                palette.set_channel(i, Component::Red, ramp(i, 31));
                palette.set_channel(i, Component::Blue, ramp(i, 31));
            }
            for i in 0..64 {
                palette.set_channel(i, Component::Green, ramp(i, 63));
            }
            64
        }
        24 | 32 => {
            for i in 0..PALETTE_SIZE {
                palette.set(i, Rgb16::gray((i * 257) as u16));
            }
            PALETTE_SIZE
        }
        _ => 0,
    }
}

#[inline]
fn ramp(i: usize, steps: usize) -> u16 {
    (i * 65535 / steps) as u16
}
