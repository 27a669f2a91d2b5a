use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::resolve_operand;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Computes `a + b`.
///
/// Backward: the gradient of a sum is 1 with respect to each operand, so both
/// receive the output gradient unchanged.
///
/// # Errors
/// * `GraphMismatch` if `b` is a `Var` from another graph.
pub fn add_op<'g, T: Scalar>(
    a: Var<'g, T>,
    b: impl Into<Operand<'g, T>>,
) -> Result<Var<'g, T>, AutogradError> {
    let b = resolve_operand(a, b.into(), "add_op")?;
    let graph = a.graph();

    let value = a.value() + b.value();
    let requires_grad = a.requires_grad() || b.requires_grad();
    let id = graph.push(
        value,
        BackwardOp::Add {
            lhs: a.id(),
            rhs: b.id(),
        },
        requires_grad,
    );
    Ok(Var::new(graph, id))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
