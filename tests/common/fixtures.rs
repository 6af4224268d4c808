//! Test fixtures and constants.

use fbcolormap::models::DisplayMode;
use fbcolormap::services::{ColormapSession, InMemoryPaletteDevice};
use palette_index::{Palette, Resolution, Rgb16};

/// Largest error a channel may pick up on a store/read round trip.
pub const CHANNEL_EPSILON: f32 = 1.0 / 65535.0;

/// Bit depths with a default ramp, and how many entries each ramp covers.
pub const RAMPED_DEPTHS: [(u32, usize); 4] = [(15, 32), (16, 64), (24, 256), (32, 256)];

/// A recognisable device palette: entry `i` is gray `i * 100`.
pub fn device_palette() -> Palette {
    let mut palette = Palette::new();
    for i in 0..palette.len() {
        palette.set(i, Rgb16::gray(i as u16 * 100));
    }
    palette
}

pub fn session_with(device: InMemoryPaletteDevice) -> ColormapSession<InMemoryPaletteDevice> {
    ColormapSession::new(device, Resolution::default())
}

/// Session loaded in indexed mode at `bits_per_pixel`.
pub fn indexed_session(bits_per_pixel: u32) -> ColormapSession<InMemoryPaletteDevice> {
    let mut session = session_with(InMemoryPaletteDevice::new());
    session
        .load_color_map(bits_per_pixel, DisplayMode::Indexed)
        .expect("in-memory device should accept the load");
    session
}

/// Session loaded in direct color mode at `bits_per_pixel`.
pub fn rgba_session(bits_per_pixel: u32) -> ColormapSession<InMemoryPaletteDevice> {
    let mut session = session_with(InMemoryPaletteDevice::new());
    session
        .load_color_map(bits_per_pixel, DisplayMode::Rgba)
        .expect("in-memory device should accept the load");
    session
}

/// Device that refuses reads and reports `device_palette()` otherwise.
pub fn unreadable_device() -> InMemoryPaletteDevice {
    let mut device = InMemoryPaletteDevice::with_palette(device_palette());
    device.fail_reads(true);
    device
}

/// Device that refuses writes.
pub fn unwritable_device() -> InMemoryPaletteDevice {
    let mut device = InMemoryPaletteDevice::new();
    device.fail_writes(true);
    device
}
