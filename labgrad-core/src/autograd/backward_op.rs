use crate::node::NodeId;
use crate::types::Scalar;
use std::fmt;

/// Records how a node was produced and how to push gradient back through it.
///
/// Every node stores one of these in place of a backward closure. Each variant
/// carries its input ids plus the forward values captured when the node was
/// built, which is all that is needed to evaluate the local derivatives.
///
/// Subtraction, negation and division do not get their own variants: they are
/// built out of `Add`, `Mul` and `Pow` by the operator layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp<T> {
    /// Input or constant. Has no inputs and a no-op backward.
    Leaf,
    /// `lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `lhs * rhs`
    Mul {
        lhs: NodeId,
        rhs: NodeId,
        lhs_value: T,
        rhs_value: T,
    },
    /// `base ^ exponent` with a constant exponent.
    Pow {
        base: NodeId,
        base_value: T,
        exponent: T,
    },
    /// `max(input, 0)`
    Relu { input: NodeId, input_value: T },
}

impl<T: Scalar> BackwardOp<T> {
    /// Computes the contribution of `grad_output` (dL/dOutput) to each input.
    ///
    /// Returns one `(input, dL/dInput)` pair per input edge, in the same order
    /// as [`inputs`](Self::inputs). An input used twice (`x * x`) appears twice
    /// and the caller must sum both contributions.
    ///
    /// `Relu` at exactly zero contributes nothing. `Pow` with a zero exponent
    /// contributes nothing, which avoids `0 * inf` at a zero base.
    pub fn backward(&self, grad_output: T) -> Vec<(NodeId, T)> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } => vec![(lhs, grad_output), (rhs, grad_output)],
            BackwardOp::Mul {
                lhs,
                rhs,
                lhs_value,
                rhs_value,
            } => vec![(lhs, rhs_value * grad_output), (rhs, lhs_value * grad_output)],
            BackwardOp::Pow {
                base,
                base_value,
                exponent,
            } => {
                let local = if exponent == T::zero() {
                    T::zero()
                } else {
                    exponent * base_value.powf(exponent - T::one())
                };
                vec![(base, local * grad_output)]
            }
            BackwardOp::Relu { input, input_value } => {
                let local = if input_value > T::zero() {
                    grad_output
                } else {
                    T::zero()
                };
                vec![(input, local)]
            }
        }
    }
}

impl<T> BackwardOp<T> {
    /// Ids of the parent nodes, in operand order.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs, .. } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu { input, .. } => vec![input],
        }
    }

    /// Short operation label, as shown when inspecting a graph.
    pub fn label(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "",
            BackwardOp::Add { .. } => "+",
            BackwardOp::Mul { .. } => "*",
            BackwardOp::Pow { .. } => "^",
            BackwardOp::Relu { .. } => "ReLU",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }
}

impl<T: Scalar> fmt::Display for BackwardOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => write!(f, "leaf"),
            BackwardOp::Add { lhs, rhs } => write!(f, "{} + {}", lhs, rhs),
            BackwardOp::Mul { lhs, rhs, .. } => write!(f, "{} * {}", lhs, rhs),
            BackwardOp::Pow { base, exponent, .. } => write!(f, "{} ^ {}", base, exponent),
            BackwardOp::Relu { input, .. } => write!(f, "ReLU({})", input),
        }
    }
}
