use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::types::{to_f64, Scalar};
use crate::var::Var;

/// Raises `base` to a constant `exponent`.
///
/// Backward: `base` receives `exponent * base^(exponent - 1) * grad`. At a zero
/// base with `0 < exponent < 1` that local derivative is infinite, so the
/// backward pass writes `inf` into the base's gradient.
///
/// # Errors
/// * `DivisionByZero` if the base is zero and the exponent is negative.
/// * `InvalidPower` if the base is negative and the exponent is not an
///   integer (the result would not be real).
pub fn pow_op<T: Scalar>(base: Var<'_, T>, exponent: T) -> Result<Var<'_, T>, AutogradError> {
    let base_value = base.value();

    if base_value == T::zero() && exponent < T::zero() {
        return Err(AutogradError::DivisionByZero {
            operation: "pow_op".to_string(),
        });
    }
    if base_value < T::zero() && exponent.is_finite() && exponent.fract() != T::zero() {
        return Err(AutogradError::InvalidPower {
            base: to_f64(base_value),
            exponent: to_f64(exponent),
        });
    }

    let graph = base.graph();
    let id = graph.push(
        base_value.powf(exponent),
        BackwardOp::Pow {
            base: base.id(),
            base_value,
            exponent,
        },
        base.requires_grad(),
    );
    Ok(Var::new(graph, id))
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Raises this node to a constant power.
    ///
    /// # Panics
    /// On the domain errors reported by [`pow_op`]: a zero base with a negative
    /// exponent, or a negative base with a non-integral exponent.
    pub fn pow(self, exponent: T) -> Var<'g, T> {
        pow_op(self, exponent).unwrap_or_else(|e| panic!("Var power operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
