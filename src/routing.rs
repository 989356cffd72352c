//! Bin routing: mapping classified colors to carousel drop angles

use std::str::FromStr;

use crate::color::Color;
use crate::constants::angles;
use crate::error::Result;

impl Color {
    /// Carousel angle, in degrees, of this color's bin.
    ///
    /// Total over the enum: every known color has exactly one bin.
    pub fn drop_angle(self) -> i32 {
        match self {
            Color::Red => angles::RED_DEG,
            Color::Blue => angles::BLUE_DEG,
            Color::Green => angles::GREEN_DEG,
            Color::Yellow => angles::YELLOW_DEG,
            Color::Orange => angles::ORANGE_DEG,
            Color::Purple => angles::PURPLE_DEG,
        }
    }
}

/// Drop angle for a color given by name.
///
/// # Errors
///
/// Returns an `InvalidInput` error for unknown or case-variant names; a cube
/// is never routed to a default bin.
pub fn drop_angle_for_name(name: &str) -> Result<i32> {
    Color::from_str(name).map(Color::drop_angle)
}
