use crate::foundation::error::{ClampError, ClampResult};
use crate::foundation::scalar::Scalar;
use crate::transform::non_linear;

/// Closed interval `[lo, hi]` used as clamp bounds.
///
/// Bounds built with [`Bounds::from_raw`] or deserialized from JSON may be
/// inverted (`lo > hi`); clamping against them collapses every value to `hi`.
/// Use [`Bounds::new`] or [`Bounds::validate`] to reject that case up front.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds<T> {
    /// Lower bound (inclusive).
    pub lo: T,
    /// Upper bound (inclusive).
    pub hi: T,
}

impl<T: Scalar> Bounds<T> {
    /// Build checked bounds. Fails when `lo > hi` or the pair is unordered (NaN).
    pub fn new(lo: T, hi: T) -> ClampResult<Self> {
        Self::from_raw(lo, hi).validate()
    }

    /// Build bounds without any ordering check.
    pub fn from_raw(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// Parse bounds from a JSON object `{"lo": .., "hi": ..}`.
    ///
    /// Ordering is not checked; chain [`Bounds::validate`] for that.
    pub fn from_json(s: &str) -> ClampResult<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(s).map_err(|e| ClampError::serde(format!("bounds json: {e}")))
    }

    /// Return `self` if `lo <= hi`, otherwise a validation error.
    pub fn validate(self) -> ClampResult<Self> {
        if self.lo.is_nan() || self.hi.is_nan() {
            return Err(ClampError::validation(format!(
                "Bounds must not contain NaN (lo={:?}, hi={:?})",
                self.lo, self.hi
            )));
        }
        if self.is_inverted() {
            return Err(ClampError::validation(format!(
                "Bounds lo must be <= hi (lo={:?}, hi={:?})",
                self.lo, self.hi
            )));
        }
        Ok(self)
    }

    /// Whether `lo > hi`.
    pub fn is_inverted(self) -> bool {
        self.lo > self.hi
    }

    /// Whether `lo <= v <= hi`. Always `false` for NaN.
    pub fn contains(self, v: T) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// Clamp `v` into these bounds; same semantics as [`crate::clamp`].
    #[inline]
    pub fn clamp(self, v: T) -> T {
        non_linear::clamp(v, self.lo, self.hi)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
