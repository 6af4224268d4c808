//! Tests for loading session config files from disk.

mod common;

use fbcolormap::error::ConfigError;
use fbcolormap::models::{DisplayMode, SessionConfig};
use fbcolormap::services::{ColormapSession, InMemoryPaletteDevice};
use palette_index::{Component, Rgb16};
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_drives_session() {
    let file = write_config(
        r##"
bits_per_pixel: 8
display_mode: indexed
reverse_map_bits: 4
hardware_palette:
  - "#000"
  - "#fff"
  - "#ff0000"
"##,
    );

    let config = SessionConfig::load(file.path()).unwrap();
    let device = InMemoryPaletteDevice::with_palette(config.device_palette().unwrap());
    let mut session = ColormapSession::new(device, config.resolution().unwrap());
    session
        .load_color_map(config.bits_per_pixel, config.display_mode)
        .unwrap();

    assert_eq!(session.resolution().size(), 16);
    assert_eq!(session.palette().get(2), Some(Rgb16::new(65535, 0, 0)));
    assert_eq!(session.get_color(1, Component::Blue), 1.0);
    assert_eq!(session.lookup(1.0, 0.0, 0.0), Some(2));
    assert_eq!(session.lookup(1.0, 1.0, 1.0), Some(1));
    common::assert_index_exact(&session);
}

#[test]
fn test_config_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SessionConfig::load(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_load_invalid_yaml() {
    let file = write_config("bits_per_pixel: [not, a, number]");
    assert!(matches!(
        SessionConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_or_default_falls_back_on_bad_file() {
    let file = write_config("reverse_map_bits: 0");
    let config = SessionConfig::load_or_default(Some(file.path()));
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_load_or_default_reads_good_file() {
    let file = write_config("display_mode: rgba\nbits_per_pixel: 32\n");
    let config = SessionConfig::load_or_default(Some(file.path()));

    assert_eq!(config.display_mode, DisplayMode::Rgba);
    assert_eq!(config.bits_per_pixel, 32);
}
