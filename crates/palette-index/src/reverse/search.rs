//! Brute-force nearest palette entry search.

use super::resolution::Resolution;
use crate::palette::Palette;

/// A cell coordinate in quantized RGB space, each axis in `0..S`.
pub type Coord = (usize, usize, usize);

/// Find the palette entry closest to a quantized coordinate.
///
/// Every entry is bucketed with [`Resolution::bucket`] and compared by L1
/// distance (sum of absolute per-channel differences). The scan runs in
/// ascending index order with a strict `<`, so the lowest index wins ties.
///
/// # Example
///
/// ```
/// use palette_index::{nearest_index, Palette, Resolution, Rgb16};
///
/// let mut palette = Palette::new();
/// palette.set(7, Rgb16::new(65535, 0, 0));
///
/// let res = Resolution::default();
/// assert_eq!(nearest_index(&palette, res, (31, 0, 0)), 7);
/// // Every other entry is black, so index 0 wins the tie
/// assert_eq!(nearest_index(&palette, res, (0, 0, 0)), 0);
/// ```
pub fn nearest_index(palette: &Palette, resolution: Resolution, (r, g, b): Coord) -> u8 {
    let mut best_idx = 0;
    let mut best_dist = usize::MAX;

    for (i, color) in palette.iter().enumerate() {
        let dist = r.abs_diff(resolution.bucket(color.r))
            + g.abs_diff(resolution.bucket(color.g))
            + b.abs_diff(resolution.bucket(color.b));
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx as u8
}
