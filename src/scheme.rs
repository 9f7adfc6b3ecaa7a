//! Palettes derived from a single base color by moving around the HSL
//! cylinder.

use tracing::debug;

use crate::{color::Component, convert::hex_to_hsl, error::Result, math::wrap_unit, models::Hsl};

impl Hsl {
    /// The color on the opposite side of the color wheel, with the same
    /// saturation and lightness.
    pub fn complementary(&self) -> Self {
        self.with_hue(wrap_unit(self.hue + 0.5))
    }

    /// `count` colors sharing this color's hue and saturation. The lightness
    /// of the i-th color is `(lightness + i / count) mod 1`, so the first
    /// color is this one. A count of 0 yields no colors.
    pub fn monochromatic(&self, count: usize) -> Vec<Self> {
        let count_f = count as Component;
        (0..count)
            .map(|i| self.with_lightness(wrap_unit(self.lightness + i as Component / count_f)))
            .collect()
    }
}

/// Generate a monochromatic scheme of `num_colors` hex colors from a base hex
/// color.
pub fn generate_monochromatic_scheme(base_hex: &str, num_colors: usize) -> Result<Vec<String>> {
    let base = hex_to_hsl(base_hex)?;
    let scheme = base
        .monochromatic(num_colors)
        .iter()
        .map(|c| c.to_hex().to_string())
        .collect();
    debug!(base_hex, num_colors, "generated monochromatic scheme");
    Ok(scheme)
}

/// Generate the complementary hex color of a base hex color.
pub fn generate_complementary_color(base_hex: &str) -> Result<String> {
    Ok(hex_to_hsl(base_hex)?.complementary().to_hex().to_string())
}
