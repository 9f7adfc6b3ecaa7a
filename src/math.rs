//! Math utility functions.

use num_traits::Float;

/// Linearly interpolate between `a` and `b`. `t` is not clamped, so values
/// outside of [0, 1] extrapolate.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Wrap a value into [0, 1) by dropping its integer part.
pub fn wrap_unit<T: Float>(value: T) -> T {
    value - value.floor()
}

/// Round a value on the 0-255 scale to the nearest channel value. Values
/// outside the range are clamped, NaN becomes 0.
pub fn to_channel<T: Float>(value: T) -> u8 {
    let max = T::from(u8::MAX).unwrap_or_else(T::zero);
    value
        .round()
        .max(T::zero())
        .min(max)
        .to_u8()
        .unwrap_or(0)
}
