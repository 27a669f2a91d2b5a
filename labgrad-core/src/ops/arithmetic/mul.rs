use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::ops::resolve_operand;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Computes `a * b`.
///
/// Backward (product rule): `a` receives `b.value * grad`, `b` receives
/// `a.value * grad`. Both forward values are captured in the node.
///
/// # Errors
/// * `GraphMismatch` if `b` is a `Var` from another graph.
pub fn mul_op<'g, T: Scalar>(
    a: Var<'g, T>,
    b: impl Into<Operand<'g, T>>,
) -> Result<Var<'g, T>, AutogradError> {
    let b = resolve_operand(a, b.into(), "mul_op")?;
    let graph = a.graph();

    let lhs_value = a.value();
    let rhs_value = b.value();
    let requires_grad = a.requires_grad() || b.requires_grad();
    let id = graph.push(
        lhs_value * rhs_value,
        BackwardOp::Mul {
            lhs: a.id(),
            rhs: b.id(),
            lhs_value,
            rhs_value,
        },
        requires_grad,
    );
    Ok(Var::new(graph, id))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
