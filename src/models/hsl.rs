//! Model a color with the HSL notation.

use crate::color::{Component, Components};

tincture_macros::gen_model! {
    /// A color specified with hue, saturation and lightness. All three are in
    /// [0, 1]; the hue is a fraction of a full turn around the color wheel,
    /// not degrees.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy of this color with a different hue.
    pub fn with_hue(&self, hue: Component) -> Self {
        Self { hue, ..*self }
    }

    /// Return a copy of this color with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self { lightness, ..*self }
    }

    /// The components as a real valued triple.
    pub fn to_components(&self) -> Components {
        Components(self.hue, self.saturation, self.lightness)
    }
}

impl From<Components> for Hsl {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
