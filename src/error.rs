use palette_index::PaletteError;
use thiserror::Error;

/// Failure of the hardware palette collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeviceError {
    #[error("Palette read failed: {0}")]
    Read(String),

    #[error("Palette write failed: {0}")]
    Write(String),
}

/// Error returned by colormap session operations.
///
/// Device failures are reported but never undo in-memory changes: the
/// palette and reverse index already reflect the request when one of these
/// comes back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColormapError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Palette(#[from] PaletteError),
}
