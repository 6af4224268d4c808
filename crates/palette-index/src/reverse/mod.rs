//! Reverse color lookup
//!
//! A [`ReverseIndex`] answers "which palette entry is closest to this
//! color?" in constant time by caching the answer for every quantized RGB
//! coordinate. [`nearest_index`] is the brute-force search that fills it.

mod index;
mod resolution;
mod search;

pub use index::ReverseIndex;
pub use resolution::{Resolution, DEFAULT_RESOLUTION_BITS};
pub use search::{nearest_index, Coord};
