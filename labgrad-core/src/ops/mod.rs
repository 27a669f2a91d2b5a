//! # Scalar Operations Module (`ops`)
//!
//! Every operation has a core function named `xxx_op` that computes the
//! forward value, appends the result node to the graph and records the
//! [`BackwardOp`](crate::autograd::BackwardOp) needed to differentiate it.
//! The `std::ops` operators and the `Var::pow`/`Var::relu` methods call these
//! functions.
//!
//! Only `add`, `mul`, `pow` and `relu` create their own kind of node.
//! `neg`, `sub` and `div` are compositions of them.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;

use crate::error::AutogradError;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Resolves the right-hand operand of `operation` against the graph of `a`.
///
/// Scalars become constant leaves in that graph. A `Var` from another graph is
/// rejected with `GraphMismatch`.
pub(crate) fn resolve_operand<'g, T: Scalar>(
    a: Var<'g, T>,
    b: Operand<'g, T>,
    operation: &str,
) -> Result<Var<'g, T>, AutogradError> {
    let b = b.into_var(a.graph());
    if !a.same_graph(&b) {
        return Err(AutogradError::GraphMismatch {
            operation: operation.to_string(),
        });
    }
    Ok(b)
}
