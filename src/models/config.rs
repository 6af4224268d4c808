use crate::error::ConfigError;
use crate::models::DisplayMode;
use palette_index::{Palette, PaletteError, Resolution, DEFAULT_RESOLUTION_BITS};
use serde::Deserialize;
use std::path::Path;

/// Session configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Native bit depth of the display; selects the default ramp
    #[serde(default = "default_bits_per_pixel")]
    pub bits_per_pixel: u32,

    /// Indexed or direct color
    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Reverse index resolution, in bits per axis (1..=8)
    #[serde(default = "default_reverse_map_bits")]
    pub reverse_map_bits: u8,

    /// Hex colors the simulated device reports as its current palette
    #[serde(default)]
    pub hardware_palette: Vec<String>,
}

fn default_bits_per_pixel() -> u32 {
    8
}

fn default_reverse_map_bits() -> u8 {
    DEFAULT_RESOLUTION_BITS
}

impl SessionConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        // Reject bad values up front rather than at session start
        config.resolution()?;
        config.device_palette()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    bits_per_pixel = config.bits_per_pixel,
                    display_mode = %config.display_mode,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn resolution(&self) -> Result<Resolution, PaletteError> {
        Resolution::new(self.reverse_map_bits)
    }

    /// Palette the simulated device starts with.
    pub fn device_palette(&self) -> Result<Palette, PaletteError> {
        Palette::from_hex(&self.hardware_palette)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bits_per_pixel: default_bits_per_pixel(),
            display_mode: DisplayMode::default(),
            reverse_map_bits: default_reverse_map_bits(),
            hardware_palette: Vec::new(),
        }
    }
}
