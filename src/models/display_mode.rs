use serde::Deserialize;
use std::fmt;

/// How pixels address color on the active display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Pixels hold palette indices; the reverse index is maintained.
    #[default]
    Indexed,
    /// Pixels hold direct color; palette queries are answered with the sentinel.
    Rgba,
}

impl DisplayMode {
    pub fn is_indexed(self) -> bool {
        matches!(self, DisplayMode::Indexed)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Indexed => f.write_str("indexed"),
            DisplayMode::Rgba => f.write_str("rgba"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_indexed() {
        assert!(DisplayMode::default().is_indexed());
        assert!(!DisplayMode::Rgba.is_indexed());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: DisplayMode = serde_yaml::from_str("rgba").unwrap();
        assert_eq!(mode, DisplayMode::Rgba);
        let mode: DisplayMode = serde_yaml::from_str("indexed").unwrap();
        assert_eq!(mode, DisplayMode::Indexed);
    }
}
