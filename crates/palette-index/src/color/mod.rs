//! Color types for hardware palettes
//!
//! Palette entries are stored at 16-bit precision per channel, the format
//! framebuffer colormaps use. Requests come in as floating point channels in
//! 0.0..=1.0 and are converted with truncation.
//!
//! # Example
//!
//! ```
//! use palette_index::{Component, Rgb16};
//!
//! let c = Rgb16::from_unit(1.0, 0.0, 0.25);
//! assert_eq!(c.channel(Component::Red), 65535);
//! assert_eq!(c.channel_unit(Component::Green), 0.0);
//! ```

mod component;
mod rgb16;

pub use component::Component;
pub use rgb16::{Rgb16, CHANNEL_MAX};
