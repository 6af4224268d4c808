//! Colormap session: the palette, its reverse index, and the device they
//! are mirrored to.

use crate::error::{ColormapError, DeviceError};
use crate::models::{DisplayMode, SessionConfig};
use crate::services::PaletteDevice;
use palette_index::{
    apply_default_ramp, Component, Coord, Palette, Resolution, ReverseIndex, Rgb16, PALETTE_SIZE,
};

/// Returned by color queries that have no answer.
pub const COLOR_UNAVAILABLE: f32 = -1.0;

/// Owns all colormap state for one display.
///
/// Operations are synchronous and expect a single caller; wrap the session
/// in a lock if it has to be shared. The in-memory palette is always updated
/// before the device is written, so after a [`DeviceError`] the two can
/// disagree until the next successful write.
pub struct ColormapSession<D> {
    device: D,
    palette: Palette,
    resolution: Resolution,
    mode: DisplayMode,
    reverse: Option<ReverseIndex>,
}

impl<D: PaletteDevice> ColormapSession<D> {
    /// Create a session with an all-black palette.
    ///
    /// Until [`load_color_map`](Self::load_color_map) runs the session is in
    /// direct color mode, so color queries return [`COLOR_UNAVAILABLE`].
    pub fn new(device: D, resolution: Resolution) -> Self {
        Self {
            device,
            palette: Palette::new(),
            resolution,
            mode: DisplayMode::Rgba,
            reverse: None,
        }
    }

    /// Create a session at the reverse index resolution `config` asks for.
    pub fn from_config(device: D, config: &SessionConfig) -> Result<Self, ColormapError> {
        Ok(Self::new(device, config.resolution()?))
    }

    /// Initialize the palette for a display of `bits_per_pixel`.
    ///
    /// Reads the device palette as a baseline, overlays the default ramp for
    /// the bit depth, pushes the result, and in indexed mode builds the
    /// reverse index from scratch. A failed read leaves the current
    /// in-memory palette as the baseline; a failed write leaves the device
    /// behind. Either way the remaining steps still run and the first
    /// failure is returned.
    pub fn load_color_map(
        &mut self,
        bits_per_pixel: u32,
        mode: DisplayMode,
    ) -> Result<(), ColormapError> {
        self.mode = mode;
        let mut first_error: Option<DeviceError> = None;

        match self.device.read_palette() {
            Ok(palette) => self.palette = palette,
            Err(e) => {
                tracing::warn!(%e, "Failed to read hardware palette, keeping current palette");
                first_error.get_or_insert(e);
            }
        }

        let ramped = apply_default_ramp(&mut self.palette, bits_per_pixel);

        if let Err(e) = self.push() {
            first_error.get_or_insert(e);
        }

        self.reverse = if mode.is_indexed() {
            Some(ReverseIndex::build(&self.palette, self.resolution))
        } else {
            None
        };

        tracing::info!(
            bits_per_pixel,
            %mode,
            ramped,
            reverse_cells = self.reverse.as_ref().map_or(0, |r| r.cells().len()),
            "Loaded colormap"
        );

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Set palette entry `cell` from floating point channels.
    ///
    /// Cells outside `0..256` are ignored. Channels are clamped to 0.0..=1.0.
    /// The full palette is pushed to the device, then the reverse index is
    /// refreshed around the new color. The refresh happens even when the
    /// push fails; the push failure is returned afterwards.
    pub fn set_color(
        &mut self,
        cell: i32,
        red: f32,
        green: f32,
        blue: f32,
    ) -> Result<(), ColormapError> {
        let Some(index) = usize::try_from(cell).ok().filter(|&i| i < PALETTE_SIZE) else {
            return Ok(());
        };

        self.palette.set(index, Rgb16::from_unit(red, green, blue));
        let pushed = self.push();

        if let Some(reverse) = self.reverse.as_mut() {
            let res = self.resolution;
            let coord: Coord = (
                res.bucket_unit(red),
                res.bucket_unit(green),
                res.bucket_unit(blue),
            );
            let refreshed = reverse.refresh_neighborhood(&self.palette, coord);
            tracing::debug!(cell, ?coord, refreshed, "Refreshed reverse index");
        }

        pushed.map_err(ColormapError::from)
    }

    /// Channel of palette entry `cell`, normalized to 0.0..=1.0.
    ///
    /// Returns [`COLOR_UNAVAILABLE`] outside indexed mode and for cells
    /// outside `0..=256`. The upper bound is inclusive; since there is no
    /// entry 256, that cell also answers [`COLOR_UNAVAILABLE`].
    pub fn get_color(&self, cell: i32, component: Component) -> f32 {
        if !self.mode.is_indexed() {
            return COLOR_UNAVAILABLE;
        }
        if cell < 0 || cell > PALETTE_SIZE as i32 {
            return COLOR_UNAVAILABLE;
        }

        self.palette
            .get(cell as usize)
            .map_or(COLOR_UNAVAILABLE, |c| c.channel_unit(component))
    }

    /// [`get_color`](Self::get_color) with a raw channel code (0 red,
    /// 1 green, 2 blue). Unknown codes answer [`COLOR_UNAVAILABLE`].
    pub fn get_color_raw(&self, cell: i32, component: i32) -> f32 {
        match Component::from_raw(component) {
            Some(component) => self.get_color(cell, component),
            None => COLOR_UNAVAILABLE,
        }
    }

    /// Share this colormap with another window. Sessions own exactly one
    /// palette, so there is nothing to copy.
    pub fn copy_colormap(&mut self, _window: i32) {}

    /// Push the in-memory palette to the device again, e.g. after the
    /// device lost its colormap on a console switch.
    pub fn restore_color_map(&mut self) -> Result<(), ColormapError> {
        self.push().map_err(ColormapError::from)
    }

    /// Palette index to draw for a color, or `None` outside indexed mode.
    ///
    /// Channels are converted and bucketed exactly like a stored palette
    /// entry.
    pub fn lookup(&self, red: f32, green: f32, blue: f32) -> Option<u8> {
        let color = Rgb16::from_unit(red, green, blue);
        self.reverse
            .as_ref()
            .map(|reverse| reverse.lookup(color.r, color.g, color.b))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn reverse_index(&self) -> Option<&ReverseIndex> {
        self.reverse.as_ref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    fn push(&mut self) -> Result<(), DeviceError> {
        self.device.write_palette(&self.palette).map_err(|e| {
            tracing::warn!(%e, "Failed to write hardware palette");
            e
        })
    }
}
