use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point element type a [`Graph`](crate::Graph) can be built over.
///
/// Implemented for every `num_traits::Float` that can also be printed, which in
/// practice means `f32` and `f64`. Reflected operators (`2.0 * x`) are only
/// provided for those two types.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + 'static {}

/// Converts a scalar to `f64` for error reporting.
pub(crate) fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
