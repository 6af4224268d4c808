//! The quantized color → palette index table.

use super::resolution::Resolution;
use super::search::{nearest_index, Coord};
use crate::palette::Palette;

/// A 3-D table mapping quantized RGB to the nearest palette index.
///
/// Each axis has [`Resolution::size`] buckets, so the table holds `S³`
/// cells. Every cell holds a valid palette index at all times.
///
/// The table is a cache of the palette, not the source of truth.
/// [`ReverseIndex::build`] fills every cell exactly. After that,
/// [`ReverseIndex::refresh_neighborhood`] only revisits the cells around a
/// changed color. Cells further away that pointed at the old value of a
/// changed entry keep their old answer until the next full build.
///
/// # Example
///
/// ```
/// use palette_index::{Palette, ReverseIndex, Resolution, Rgb16};
///
/// let mut palette = Palette::new();
/// palette.set(1, Rgb16::gray(65535));
///
/// let index = ReverseIndex::build(&palette, Resolution::default());
/// assert_eq!(index.get((31, 31, 31)), Some(1));
/// assert_eq!(index.get((0, 0, 0)), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndex {
    resolution: Resolution,
    cells: Box<[u8]>,
}

impl ReverseIndex {
    /// Fill every cell by nearest-color search over `palette`.
    ///
    /// Costs `S³ × 256` distance evaluations.
    pub fn build(palette: &Palette, resolution: Resolution) -> Self {
        let mut index = Self {
            resolution,
            cells: vec![0; resolution.cell_count()].into_boxed_slice(),
        };
        index.rebuild(palette);
        index
    }

    /// Recompute every cell against the current `palette`.
    pub fn rebuild(&mut self, palette: &Palette) {
        let size = self.resolution.size();
        for r in 0..size {
            for g in 0..size {
                for b in 0..size {
                    let offset = self.offset((r, g, b));
                    self.cells[offset] = nearest_index(palette, self.resolution, (r, g, b));
                }
            }
        }
    }

    /// Recompute `coord` and each in-range axis neighbour (r±1, g±1, b±1).
    ///
    /// Each revisited cell gets a full search over `palette`. Returns how many
    /// cells were recomputed: 7 in the interior, fewer on faces, edges and
    /// corners, 0 if `coord` lies outside the table.
    pub fn refresh_neighborhood(&mut self, palette: &Palette, coord: Coord) -> usize {
        if !self.contains(coord) {
            return 0;
        }

        let max = self.resolution.size() - 1;
        let (r, g, b) = coord;

        let mut targets = [coord; 7];
        let mut count = 1;
        let mut push = |c: Coord| {
            targets[count] = c;
            count += 1;
        };

        if r > 0 {
            push((r - 1, g, b));
        }
        if r < max {
            push((r + 1, g, b));
        }
        if g > 0 {
            push((r, g - 1, b));
        }
        if g < max {
            push((r, g + 1, b));
        }
        if b > 0 {
            push((r, g, b - 1));
        }
        if b < max {
            push((r, g, b + 1));
        }

        for &target in &targets[..count] {
            let offset = self.offset(target);
            self.cells[offset] = nearest_index(palette, self.resolution, target);
        }

        count
    }

    /// Palette index stored for `coord`, or `None` outside the table.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        if self.contains(coord) {
            Some(self.cells[self.offset(coord)])
        } else {
            None
        }
    }

    /// Palette index for a 16-bit color, bucketed like a palette entry.
    #[inline]
    pub fn lookup(&self, r: u16, g: u16, b: u16) -> u8 {
        let res = self.resolution;
        self.cells[self.offset((res.bucket(r), res.bucket(g), res.bucket(b)))]
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Raw cells in `(r * S + g) * S + b` order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// How many cells map to each palette index.
    pub fn histogram(&self) -> [usize; 256] {
        let mut counts = [0usize; 256];
        for &cell in self.cells.iter() {
            counts[cell as usize] += 1;
        }
        counts
    }

    #[inline]
    fn contains(&self, (r, g, b): Coord) -> bool {
        let size = self.resolution.size();
        r < size && g < size && b < size
    }

    #[inline]
    fn offset(&self, (r, g, b): Coord) -> usize {
        let size = self.resolution.size();
        (r * size + g) * size + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb16;

    fn small() -> Resolution {
        Resolution::new(3).unwrap()
    }

    #[test]
    fn test_build_fills_every_cell() {
        let palette = Palette::new();
        let index = ReverseIndex::build(&palette, small());
        assert_eq!(index.cells().len(), 512);
        assert!(index.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_get_out_of_range() {
        let index = ReverseIndex::build(&Palette::new(), small());
        assert_eq!(index.get((8, 0, 0)), None);
        assert_eq!(index.get((7, 7, 7)), Some(0));
    }

    #[test]
    fn test_refresh_counts() {
        let palette = Palette::new();
        let mut index = ReverseIndex::build(&palette, small());

        assert_eq!(index.refresh_neighborhood(&palette, (3, 3, 3)), 7);
        assert_eq!(index.refresh_neighborhood(&palette, (0, 3, 3)), 6);
        assert_eq!(index.refresh_neighborhood(&palette, (0, 0, 3)), 5);
        assert_eq!(index.refresh_neighborhood(&palette, (0, 0, 0)), 4);
        assert_eq!(index.refresh_neighborhood(&palette, (7, 7, 7)), 4);
        assert_eq!(index.refresh_neighborhood(&palette, (8, 0, 0)), 0);
    }

    #[test]
    fn test_refresh_picks_up_new_entry() {
        let mut palette = Palette::new();
        let mut index = ReverseIndex::build(&palette, small());

        palette.set(42, Rgb16::new(65535, 0, 0));
        index.refresh_neighborhood(&palette, (7, 0, 0));

        assert_eq!(index.get((7, 0, 0)), Some(42));
        assert_eq!(index.get((6, 0, 0)), Some(42));
        assert_eq!(index.get((7, 1, 0)), Some(42));
        assert_eq!(index.get((7, 0, 1)), Some(42));
    }

    #[test]
    fn test_lookup_buckets_16bit_color() {
        let mut palette = Palette::new();
        palette.set(5, Rgb16::new(0, 0, 65535));
        let index = ReverseIndex::build(&palette, small());

        assert_eq!(index.lookup(0, 0, 65535), 5);
        assert_eq!(index.lookup(0, 0, 0), 0);
    }

    #[test]
    fn test_histogram_sums_to_cell_count() {
        let mut palette = Palette::new();
        palette.set(1, Rgb16::gray(65535));
        let index = ReverseIndex::build(&palette, small());

        let histogram = index.histogram();
        assert_eq!(histogram.iter().sum::<usize>(), 512);
        assert!(histogram[0] > 0);
        assert!(histogram[1] > 0);
        assert_eq!(histogram[2], 0);
    }
}
