//! Color channel selector

use std::fmt;

/// One of the three channels of a palette entry.
///
/// The raw codes (0, 1, 2) follow the usual red/green/blue query constants
/// of windowing toolkits, so callers holding a plain integer can convert
/// with [`Component::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
}

impl Component {
    /// All channels in storage order.
    pub const ALL: [Component; 3] = [Component::Red, Component::Green, Component::Blue];

    /// Map a raw channel code to a component. Unknown codes yield `None`.
    ///
    /// # Example
    /// ```
    /// use palette_index::Component;
    /// assert_eq!(Component::from_raw(1), Some(Component::Green));
    /// assert_eq!(Component::from_raw(7), None);
    /// ```
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Component::Red),
            1 => Some(Component::Green),
            2 => Some(Component::Blue),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Component::Red => 0,
            Component::Green => 1,
            Component::Blue => 2,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
        };
        f.write_str(name)
    }
}
