use std::fmt;

/// Primitive numeric type that can be clamped.
///
/// `max_of` / `min_of` are total for every input: floats propagate NaN
/// instead of ignoring it (unlike [`f64::max`]), and integers defer to
/// [`Ord`].
pub trait Scalar: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The greater of `self` and `other`.
    fn max_of(self, other: Self) -> Self;

    /// The lesser of `self` and `other`.
    fn min_of(self, other: Self) -> Self;

    /// Whether this value is a NaN. Always `false` for integers.
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn max_of(self, other: Self) -> Self {
                if self.is_nan() {
                    return self;
                }
                if other.is_nan() {
                    return other;
                }
                if self > other {
                    self
                } else if other > self {
                    other
                } else if self.is_sign_positive() {
                    // +0.0 wins over -0.0
                    self
                } else {
                    other
                }
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                if self.is_nan() {
                    return self;
                }
                if other.is_nan() {
                    return other;
                }
                if self < other {
                    self
                } else if other < self {
                    other
                } else if self.is_sign_negative() {
                    // -0.0 wins over +0.0
                    self
                } else {
                    other
                }
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                Ord::min(self, other)
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
#[path = "../../tests/unit/foundation/scalar.rs"]
mod tests;
