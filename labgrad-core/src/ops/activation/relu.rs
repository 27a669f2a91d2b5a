use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::types::Scalar;
use crate::var::Var;

/// Applies the Rectified Linear Unit: `ReLU(x) = max(x, 0)`.
///
/// Backward: the input receives the output gradient when its value is
/// strictly positive and nothing otherwise. At exactly zero the sub-gradient
/// 0 is used.
pub fn relu_op<T: Scalar>(input: Var<'_, T>) -> Result<Var<'_, T>, AutogradError> {
    let input_value = input.value();
    // NaN passes through unchanged.
    let value = if input_value < T::zero() {
        T::zero()
    } else {
        input_value
    };

    let graph = input.graph();
    let id = graph.push(
        value,
        BackwardOp::Relu {
            input: input.id(),
            input_value,
        },
        input.requires_grad(),
    );
    Ok(Var::new(graph, id))
}

impl<'g, T: Scalar> Var<'g, T> {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(self) -> Var<'g, T> {
        relu_op(self).unwrap_or_else(|e| panic!("Var ReLU operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
