//! Random colors. Randomness stays behind this entry point; pass a seeded or
//! mocked generator to the `_with` variants for reproducible output.

use rand::Rng;
use tracing::trace;

use crate::models::Hex;

impl Hex {
    /// Draw a uniformly distributed color from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..=Self::MAX))
    }
}

/// Draw a random color from the thread local generator, formatted as a zero
/// padded hex string.
pub fn random_hex_color() -> String {
    random_hex_color_with(&mut rand::thread_rng())
}

/// Draw a random color from `rng`, formatted as a zero padded hex string.
pub fn random_hex_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hex = Hex::random_with(rng);
    trace!(%hex, "drew random color");
    hex.to_string()
}
