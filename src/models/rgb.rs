//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::{
    color::{Component, Components},
    math::to_channel,
    models::Hex,
};

tincture_macros::gen_model! {
    /// A color with 8-bit red, green and blue channels. The channel type keeps
    /// every value within [0, 255].
    #[derive(Eq, Hash)]
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, i32::from(u8::MAX)) as u8
}

impl Rgb {
    /// Create a color from signed channel values. Values below 0 become 0 and
    /// values above 255 become 255, there is no wraparound.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }

    /// Create a color from real channel values on the 0-255 scale. Each value
    /// is rounded and then clamped.
    pub fn from_components(components: Components) -> Self {
        Self::new(
            to_channel(components.0),
            to_channel(components.1),
            to_channel(components.2),
        )
    }

    /// The channels as real values on the 0-255 scale.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.red),
            Component::from(self.green),
            Component::from(self.blue),
        )
    }

    /// The channels normalized to [0, 1].
    pub fn to_normalized(&self) -> Components {
        self.to_components().map(|v| v / 255.0)
    }

    /// Serialize this color to its hex form.
    pub fn to_hex(&self) -> Hex {
        Hex::new((u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue))
    }

    /// Render this color in CSS functional notation, e.g. `rgb(52, 152, 219)`.
    pub fn to_css_string(&self) -> String {
        self.to_string()
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        let value = value.value();
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
