//! The closed set of cube colors the rig can sort.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// One of the six cube colors known to the sorting rig.
///
/// The declaration order is the fixed iteration order used everywhere a
/// deterministic order over colors is needed, in particular for breaking
/// exact distance ties during classification (first declared wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// Number of known colors
    pub const COUNT: usize = 6;

    /// All known colors, in declaration order
    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
    ];

    /// Canonical lowercase name of this color
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SortError;

    /// Parse a canonical lowercase color name.
    ///
    /// Case variants and unknown names are rejected rather than coerced, so a
    /// misrouted cube can always be traced back to a typed error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "orange" => Ok(Color::Orange),
            "purple" => Ok(Color::Purple),
            other => Err(SortError::invalid_input(format!(
                "unrecognized color name: {other:?}"
            ))),
        }
    }
}
