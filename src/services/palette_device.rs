use crate::error::DeviceError;
use palette_index::Palette;

/// Trait for the display's hardware colormap
///
/// Implementations wrap whatever moves a palette to and from the device
/// (an ioctl on a framebuffer, a display server call, a simulator). Both
/// calls block until the device has answered.
pub trait PaletteDevice {
    /// Fetch the device's current 256-entry palette
    fn read_palette(&mut self) -> Result<Palette, DeviceError>;

    /// Push a full palette to the device
    fn write_palette(&mut self, palette: &Palette) -> Result<(), DeviceError>;
}

impl<D: PaletteDevice + ?Sized> PaletteDevice for &mut D {
    fn read_palette(&mut self) -> Result<Palette, DeviceError> {
        (**self).read_palette()
    }

    fn write_palette(&mut self, palette: &Palette) -> Result<(), DeviceError> {
        (**self).write_palette(palette)
    }
}

impl<D: PaletteDevice + ?Sized> PaletteDevice for Box<D> {
    fn read_palette(&mut self) -> Result<Palette, DeviceError> {
        (**self).read_palette()
    }

    fn write_palette(&mut self, palette: &Palette) -> Result<(), DeviceError> {
        (**self).write_palette(palette)
    }
}

/// In-memory palette device
///
/// Holds the palette a real device would, counts traffic, and can be told
/// to fail reads or writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaletteDevice {
    palette: Palette,
    reads: usize,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryPaletteDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device that reports `palette` as its current colormap
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Palette as the device last accepted it
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Successful and failed reads
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Successful and failed writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PaletteDevice for InMemoryPaletteDevice {
    fn read_palette(&mut self) -> Result<Palette, DeviceError> {
        self.reads += 1;
        if self.fail_reads {
            return Err(DeviceError::Read("simulated device refused read".to_string()));
        }
        Ok(self.palette.clone())
    }

    fn write_palette(&mut self, palette: &Palette) -> Result<(), DeviceError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(DeviceError::Write("simulated device refused write".to_string()));
        }
        self.palette = palette.clone();
        Ok(())
    }
}
