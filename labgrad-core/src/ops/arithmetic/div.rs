use crate::error::AutogradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::resolve_operand;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Computes `a / b` as `a * b^-1`.
///
/// # Errors
/// * `GraphMismatch` if `b` is a `Var` from another graph, whatever its value.
/// * `DivisionByZero` if `b` is exactly zero. The check happens before any
///   node is created, and every call with a zero divisor fails the same way.
pub fn div_op<'g, T: Scalar>(
    a: Var<'g, T>,
    b: impl Into<Operand<'g, T>>,
) -> Result<Var<'g, T>, AutogradError> {
    let b = b.into();
    let divisor = match b {
        Operand::Var(var) if !a.same_graph(&var) => {
            return Err(AutogradError::GraphMismatch {
                operation: "div_op".to_string(),
            });
        }
        Operand::Var(var) => var.value(),
        Operand::Scalar(value) => value,
    };
    if divisor == T::zero() {
        return Err(AutogradError::DivisionByZero {
            operation: "div_op".to_string(),
        });
    }

    let b = resolve_operand(a, b, "div_op")?;
    mul_op(a, pow_op(b, -T::one())?)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
