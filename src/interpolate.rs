use tracing::debug;

use crate::{
    color::Component,
    convert::hex_to_rgb,
    error::{Error, Result},
    math::lerp,
    models::Rgb,
};

impl Rgb {
    /// Linearly interpolate from this color to `other`, channel by channel.
    /// A `weight` of 0 is this color and 1 is `other`. The weight is not
    /// clamped, so values outside [0, 1] extrapolate; the resulting channels
    /// are still clamped to [0, 255].
    pub fn blend(&self, other: &Self, weight: Component) -> Self {
        let left = self.to_components();
        let right = other.to_components();
        Self::from_components(left.zip_with(&right, |a, b| lerp(a, b, weight)))
    }

    /// Produce `steps + 1` colors from this color to `other`, both included,
    /// evenly spaced by blend weight.
    pub fn gradient(&self, other: &Self, steps: usize) -> Result<Vec<Self>> {
        if steps == 0 {
            return Err(Error::InvalidArgument {
                name: "steps",
                reason: "must be greater than zero",
            });
        }

        let steps_f = steps as Component;
        Ok((0..=steps)
            .map(|i| self.blend(other, i as Component / steps_f))
            .collect())
    }
}

/// Blend two hex colors, see [`Rgb::blend`].
pub fn blend_hex_colors(left: &str, right: &str, weight: Component) -> Result<String> {
    let left = hex_to_rgb(left)?;
    let right = hex_to_rgb(right)?;
    Ok(left.blend(&right, weight).to_hex().to_string())
}

/// Generate a gradient of `steps + 1` hex colors between two hex colors.
pub fn generate_gradient(left: &str, right: &str, steps: usize) -> Result<Vec<String>> {
    let from = hex_to_rgb(left)?;
    let to = hex_to_rgb(right)?;
    let colors = from.gradient(&to, steps)?;
    debug!(left, right, steps, "generated gradient");
    Ok(colors.iter().map(|c| c.to_hex().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        for (a, b) in [("#3498db", "#e74c3c"), ("#000000", "#ffffff"), ("#123456", "#123456")] {
            assert_eq!(blend_hex_colors(a, b, 0.0).unwrap(), a);
            assert_eq!(blend_hex_colors(a, b, 1.0).unwrap(), b);
        }
    }

    #[test]
    fn blend_midpoint() {
        assert_eq!(blend_hex_colors("#000000", "#ffffff", 0.5).unwrap(), "#808080");
        assert_eq!(blend_hex_colors("#3498db", "#e74c3c", 0.5).unwrap(), "#8e728c");
        assert_eq!(blend_hex_colors("#3498db", "#e74c3c", 0.3).unwrap(), "#6a81ab");
    }

    #[test]
    fn blend_weight_extrapolates_and_channels_clamp() {
        // A weight far outside [0, 1] pushes every channel to its limit.
        assert_eq!(blend_hex_colors("#3498db", "#e74c3c", 70.0).unwrap(), "#ff0000");
        assert_eq!(blend_hex_colors("#404040", "#808080", -1.0).unwrap(), "#000000");
        assert_eq!(blend_hex_colors("#404040", "#808080", 1.5).unwrap(), "#a0a0a0");
    }

    #[test]
    fn gradient_includes_both_endpoints() {
        let gradient = generate_gradient("#3498db", "#e74c3c", 5).unwrap();
        assert_eq!(
            gradient,
            ["#3498db", "#5889bb", "#7c7a9b", "#9f6a7c", "#c35b5c", "#e74c3c"]
        );
    }

    #[test]
    fn gradient_length_is_steps_plus_one() {
        for steps in 1..20 {
            let gradient = generate_gradient("#000000", "#ffffff", steps).unwrap();
            assert_eq!(gradient.len(), steps + 1);
            assert_eq!(gradient.first().map(String::as_str), Some("#000000"));
            assert_eq!(gradient.last().map(String::as_str), Some("#ffffff"));
        }
    }

    #[cfg(feature = "f64")]
    #[test]
    fn gradient_rounds_like_double_precision() {
        let gradient = generate_gradient("#000033", "#ff3300", 6).unwrap();
        assert_eq!(
            gradient,
            ["#000033", "#2b092b", "#551122", "#801a1a", "#aa2211", "#d52b08", "#ff3300"]
        );
    }

    #[test]
    fn gradient_of_gray() {
        let gradient = generate_gradient("#000000", "#ffffff", 4).unwrap();
        assert_eq!(gradient, ["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"]);
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert_eq!(
            generate_gradient("#000000", "#ffffff", 0),
            Err(Error::InvalidArgument {
                name: "steps",
                reason: "must be greater than zero",
            })
        );
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        assert!(generate_gradient("#000000", "#fff", 3).is_err());
        assert!(blend_hex_colors("#00000g", "#ffffff", 0.5).is_err());
    }
}
