pub mod colormap;
pub mod palette_device;

pub use colormap::{ColormapSession, COLOR_UNAVAILABLE};
pub use palette_device::{InMemoryPaletteDevice, PaletteDevice};
