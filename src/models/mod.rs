//! Models are the value types that represent a color in one of the supported
//! notations. Every model is a plain copyable value; operations return new
//! values instead of mutating.

mod hex;
mod hsl;
mod rgb;

pub use hex::*;
pub use hsl::*;
pub use rgb::*;
