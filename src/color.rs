//! Real valued components shared by the color models and the conversion math.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all real components are stored as.
/// Results can differ by one channel step from the 64-bit build where a
/// channel lands close to a rounding boundary.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all real components are stored as.
pub type Component = f64;

/// Represent the three real components that describe a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return new components combining each component with its counterpart
    /// in `other`.
    pub fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}
