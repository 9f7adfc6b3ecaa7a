//! Conversions between the hex, RGB and HSL representations.
//!
//! RGB and HSL describe the same 24-bit color space, hex is the serialized
//! form of RGB. Going through HSL is only lossy through rounding of the 8-bit
//! channels.

use crate::{
    error::Result,
    models::{Hex, Hsl, Rgb},
    Component,
};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_normalized()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit RGB, rounding each
    /// channel.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(util::hsl_to_rgb(&self.to_components()).map(|v| v * 255.0))
    }

    /// Convert this color straight to its hex form.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Convert normalized RGB components to HSL components.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let lightness = (max + min) / 2.0;

        // Achromatic.
        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(hue / 6.0, saturation, lightness)
    }

    /// Map a hue offset to the intensity of one channel.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert HSL components to normalized RGB components.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }
}

/// Parse a hex color into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Ok(Hex::parse(hex)?.into())
}

/// Format RGB channels as a hex color. Channels are clamped to [0, 255].
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    Rgb::clamped(red, green, blue).to_hex().to_string()
}

/// Parse a hex color and convert it to the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(hex_to_rgb(hex)?.to_hsl())
}

/// Convert HSL components to a hex color.
pub fn hsl_to_hex(hue: Component, saturation: Component, lightness: Component) -> String {
    Hsl::new(hue, saturation, lightness).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::error::{Error, FormatIssue};

    #[test]
    fn hex_to_rgb_decomposes_bytes() {
        assert_eq!(hex_to_rgb("#3498db"), Ok(Rgb::new(52, 152, 219)));
        assert_eq!(hex_to_rgb("e74c3c"), Ok(Rgb::new(231, 76, 60)));
        assert_eq!(hex_to_rgb("#FFFFFF"), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn hex_to_rgb_rejects_malformed_input() {
        assert_eq!(
            hex_to_rgb("#3498d"),
            Err(Error::InvalidFormat {
                input: "#3498d".to_owned(),
                reason: FormatIssue::Length(5),
            })
        );
        assert!(hex_to_rgb("#xyzxyz").is_err());
        assert!(hex_to_hsl("red").is_err());
    }

    #[test]
    fn rgb_to_hex_formats_lowercase() {
        assert_eq!(rgb_to_hex(52, 152, 219), "#3498db");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
    }

    #[test]
    fn rgb_to_hex_clamps() {
        assert_eq!(rgb_to_hex(-10, 300, 128), rgb_to_hex(0, 255, 128));
        assert_eq!(rgb_to_hex(-10, 300, 128), "#00ff80");
    }

    #[test]
    fn hex_round_trip() {
        for r in (0..=255).step_by(3) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(7) {
                    let rgb = Rgb::new(r, g, b);
                    let hex = rgb_to_hex(r.into(), g.into(), b.into());
                    assert_eq!(hex_to_rgb(&hex), Ok(rgb), "{hex}");
                }
            }
        }
    }

    #[test]
    fn hex_to_hsl_primaries() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(&str, Component, Component, Component)] = &[
            ("#ff0000", 0.0,      1.0, 0.5),
            ("#00ff00", 0.333333, 1.0, 0.5),
            ("#0000ff", 0.666667, 1.0, 0.5),
            ("#ff00ff", 0.833333, 1.0, 0.5),
            ("#808080", 0.0,      0.0, 0.501961),
            ("#000000", 0.0,      0.0, 0.0),
            ("#ffffff", 0.0,      0.0, 1.0),
            ("#3498db", 0.566866, 0.698745, 0.531373),
        ];

        for &(hex, hue, saturation, lightness) in TESTS {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_component_eq!(hsl.hue, hue);
            assert_component_eq!(hsl.saturation, saturation);
            assert_component_eq!(hsl.lightness, lightness);
        }
    }

    #[test]
    fn hue_wraps_when_red_is_max_and_blue_exceeds_green() {
        // rgb(255, 0, 128) sits just before a full turn.
        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!(hsl.hue > 0.9 && hsl.hue < 1.0, "{}", hsl.hue);
    }

    #[test]
    fn hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(1.0 / 3.0, 1.0, 0.5), "#00ff00");
        assert_eq!(hsl_to_hex(2.0 / 3.0, 1.0, 0.5), "#0000ff");
        assert_eq!(hsl_to_hex(0.5, 0.0, 0.5), "#808080");
        assert_eq!(hsl_to_hex(0.0, 0.0, 1.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn hsl_round_trip_within_one_per_channel() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(7) {
                for b in (0..=255u8).step_by(11) {
                    let rgb = Rgb::new(r, g, b);
                    let hsl = rgb.to_hsl();
                    let back = hex_to_rgb(&hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness))
                        .unwrap();
                    for (x, y) in rgb.to_array().into_iter().zip(back.to_array()) {
                        assert!(x.abs_diff(y) <= 1, "{rgb} came back as {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn concrete_round_trip() {
        let hsl = hex_to_hsl("#3498db").unwrap();
        assert_eq!(hsl.to_hex().to_string(), "#3498db");
    }
}
