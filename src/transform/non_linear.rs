//! Non-linear scalar utilities.

use crate::foundation::scalar::Scalar;

/// Restrict `value` to the closed interval `[lo, hi]`.
///
/// Computed as `min(max(value, lo), hi)`, in that order:
///
/// - `lo <= hi`: returns `value` when it lies inside the interval, otherwise
///   the nearest bound.
/// - `lo > hi`: the max step lifts the value to at least `lo`, which is above
///   `hi`, so the result is always `hi`. Unlike [`f64::clamp`] this never
///   panics.
/// - Any NaN operand yields NaN.
///
/// ```
/// assert_eq!(clamp::clamp(15, 0, 10), 10);
/// assert_eq!(clamp::clamp(7, 10, 0), 0);
/// assert!(clamp::clamp(f64::NAN, 0.0, 1.0).is_nan());
/// ```
#[inline]
pub fn clamp<T: Scalar>(value: T, lo: T, hi: T) -> T {
    value.max_of(lo).min_of(hi)
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
