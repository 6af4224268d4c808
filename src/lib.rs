//! fbcolormap - indexed colormap management for framebuffer displays
//!
//! Keeps a 256-entry palette in sync with the display hardware and answers
//! "which index should I draw for this color" through a reverse index.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
