use crate::error::AutogradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::types::Scalar;
use crate::var::{Operand, Var};

/// Computes `-a` as `a * -1`.
///
/// The result is an ordinary multiplication node whose right operand is the
/// constant `-1`, so `a` receives `-grad`.
pub fn neg_op<T: Scalar>(a: Var<'_, T>) -> Result<Var<'_, T>, AutogradError> {
    mul_op(a, Operand::Scalar(-T::one()))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
