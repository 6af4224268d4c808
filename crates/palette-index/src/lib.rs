#![allow(clippy::module_inception)]

//! palette-index: nearest-color lookup for 256-entry hardware palettes
//!
//! Indexed-color display modes can only show the colors currently loaded
//! into the hardware palette. Drawing code asks for continuous RGB, so every
//! pixel needs a color → palette index mapping. This crate provides that
//! mapping as a precomputed table and keeps it in step with palette edits.
//!
//! # Quick Start
//!
//! ```
//! use palette_index::{apply_default_ramp, Palette, ReverseIndex, Resolution, Rgb16};
//!
//! let mut palette = Palette::new();
//! apply_default_ramp(&mut palette, 32);
//!
//! let res = Resolution::default();
//! let mut index = ReverseIndex::build(&palette, res);
//! assert_eq!(index.lookup(0, 0, 0), 0);
//! // Entries 248..=255 all fall in the top bucket; the lowest one wins
//! assert_eq!(index.lookup(65535, 65535, 65535), 248);
//!
//! // Make entry 10 pure red and refresh around it
//! palette.set(10, Rgb16::from_unit(1.0, 0.0, 0.0));
//! index.refresh_neighborhood(&palette, (res.bucket_unit(1.0), 0, 0));
//! assert_eq!(index.get((31, 0, 0)), Some(10));
//! ```
//!
//! # Quantization
//!
//! A [`Resolution`] of `bits` splits each channel into `S = 2^bits` buckets
//! (32 by default). Stored 16-bit channels are bucketed by dropping the low
//! `16 - bits` bits. The table therefore has `S³` cells.
//!
//! # Distance and Ties
//!
//! [`nearest_index`] compares bucketed channels by L1 distance, the sum of
//! absolute per-channel differences. It is not a perceptual metric. Entries
//! are scanned in ascending order and only a strictly smaller distance
//! replaces the current best, so the lowest index wins every tie.
//!
//! # Full and Incremental Updates
//!
//! [`ReverseIndex::build`] runs the search for all `S³` cells
//! (`S³ × 256` distance evaluations). After a single entry changes,
//! [`ReverseIndex::refresh_neighborhood`] recomputes only the new color's
//! cell and its six axis neighbours. Cells further away that were closest
//! to the entry's old color are not revisited and can go stale; callers
//! that need an exact table call [`ReverseIndex::rebuild`].

pub mod color;
pub mod palette;
pub mod reverse;


pub use color::{Component, Rgb16, CHANNEL_MAX};
pub use palette::{apply_default_ramp, Palette, PaletteError, ParseColorError, PALETTE_SIZE};
pub use reverse::{nearest_index, Coord, Resolution, ReverseIndex, DEFAULT_RESOLUTION_BITS};
