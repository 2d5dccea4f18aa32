//! Inclusive-range clamping for primitive numbers.
//!
//! The core is a single pure operation, [`clamp`], computed as
//! `min(max(value, lo), hi)`. It is total: it never panics and never returns
//! an error, even for inverted bounds (`lo > hi`, which collapse to `hi`) or
//! NaN operands (which propagate).
//!
//! Around it the crate offers:
//!
//! - [`Scalar`]: the min/max primitives for every float and integer type.
//! - [`Bounds`]: an interval value type with an opt-in checked constructor.
//! - [`ClampError`] / [`ClampResult`]: errors for the checked surfaces only.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod transform;

pub use foundation::core::Bounds;
pub use foundation::error::{ClampError, ClampResult};
pub use foundation::scalar::Scalar;
pub use transform::non_linear::{clamp, clamp01};
