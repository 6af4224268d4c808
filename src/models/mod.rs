pub mod config;
pub mod display_mode;

pub use config::SessionConfig;
pub use display_mode::DisplayMode;
