//! tincture converts colors between hexadecimal, RGB and HSL notation and
//! derives palettes (gradients, monochromatic schemes, complementary colors)
//! from them.
//!
//! All operations are pure functions over small values. The string based
//! functions at the crate root accept hex colors like `#3498db` (the `#` is
//! optional, exactly six hex digits are required) and return lowercase,
//! zero padded hex strings. The same operations are available as methods on
//! the [`Rgb`], [`Hsl`] and [`Hex`] models.
//!
//! ```rust
//! let rgb = tincture::hex_to_rgb("#3498db")?;
//! assert_eq!(rgb.to_array(), [52, 152, 219]);
//!
//! let gradient = tincture::generate_gradient("#000000", "#ffffff", 2)?;
//! assert_eq!(gradient, ["#000000", "#808080", "#ffffff"]);
//!
//! assert_eq!(tincture::generate_complementary_color("#3498db")?, "#db7734");
//! # Ok::<(), tincture::Error>(())
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod convert;
mod error;
mod interpolate;
mod math;
pub mod models;
mod random;
mod scheme;

pub use adjust::{darken_hex_color, invert_hex_color, lighten_hex_color};
pub use color::{Component, Components};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
pub use error::{Error, FormatIssue, Result};
pub use interpolate::{blend_hex_colors, generate_gradient};
pub use models::{Hex, Hsl, Rgb};
pub use random::{random_hex_color, random_hex_color_with};
pub use scheme::{generate_complementary_color, generate_monochromatic_scheme};
