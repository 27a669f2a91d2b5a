use crate::error::AutogradError;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::resolve_operand;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Computes `a - b` as `a + (-b)`.
///
/// # Errors
/// * `GraphMismatch` if `b` is a `Var` from another graph.
pub fn sub_op<'g, T: Scalar>(
    a: Var<'g, T>,
    b: impl Into<Operand<'g, T>>,
) -> Result<Var<'g, T>, AutogradError> {
    let b = resolve_operand(a, b.into(), "sub_op")?;
    add_op(a, neg_op(b)?)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
