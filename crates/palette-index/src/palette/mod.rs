//! Palette types and utilities
//!
//! This module provides the fixed-size [`Palette`], the default ramps a
//! display starts out with, and the error types for parsing and validation.

mod error;
mod palette;
mod ramp;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PALETTE_SIZE};
pub use ramp::apply_default_ramp;
