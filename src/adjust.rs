//! Single color adjustments: darken, lighten and invert.

use crate::{color::Component, convert::hex_to_rgb, error::Result, models::Rgb};

impl Rgb {
    /// Scale every channel by `factor`, rounding and clamping the result.
    fn scale(&self, factor: Component) -> Self {
        Self::from_components(self.to_components().map(|v| v * factor))
    }

    /// Darken this color by scaling every channel by `1 - percentage / 100`.
    /// Percentages above 100 clamp to black.
    pub fn darken(&self, percentage: Component) -> Self {
        self.scale(1.0 - percentage / 100.0)
    }

    /// Lighten this color by scaling every channel by `1 + percentage / 100`.
    /// Channels saturate at 255.
    pub fn lighten(&self, percentage: Component) -> Self {
        self.scale(1.0 + percentage / 100.0)
    }

    /// Invert every channel.
    pub fn invert(&self) -> Self {
        Self::new(u8::MAX - self.red, u8::MAX - self.green, u8::MAX - self.blue)
    }
}

/// Darken a hex color by the given percentage.
pub fn darken_hex_color(hex: &str, percentage: Component) -> Result<String> {
    Ok(hex_to_rgb(hex)?.darken(percentage).to_hex().to_string())
}

/// Lighten a hex color by the given percentage.
pub fn lighten_hex_color(hex: &str, percentage: Component) -> Result<String> {
    Ok(hex_to_rgb(hex)?.lighten(percentage).to_hex().to_string())
}

/// Invert a hex color.
pub fn invert_hex_color(hex: &str) -> Result<String> {
    Ok(hex_to_rgb(hex)?.invert().to_hex().to_string())
}
