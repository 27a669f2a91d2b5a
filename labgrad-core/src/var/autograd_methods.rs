use crate::autograd::graph::topological_sort;
use crate::autograd::Gradients;
use crate::error::AutogradError;
use crate::types::Scalar;
use crate::var::Var;
use log::{debug, trace};
use std::collections::HashMap;

impl<'g, T: Scalar> Var<'g, T> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds d(self)/d(self) = 1, propagates through every ancestor in reverse
    /// topological order, then adds the resulting gradients into the `grad` of
    /// every tracked node reached (this node included).
    ///
    /// Gradients accumulate: calling `backward` again without
    /// [`Graph::zero_grad`](crate::Graph::zero_grad) adds the same contributions
    /// a second time, doubling every gradient. Untracked nodes never receive
    /// gradient.
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if this node does not depend on any tracked leaf.
    pub fn backward(&self) -> Result<(), AutogradError> {
        let gradients = self.gradients()?;
        self.graph.accumulate(&gradients);
        Ok(())
    }

    /// Runs one backward pass from this node and returns its gradients
    /// without touching the accumulated `grad` fields.
    ///
    /// The result holds d(self)/d(node) for every tracked node `self` depends
    /// on, queried with [`Gradients::wrt`].
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if this node does not depend on any tracked leaf.
    pub fn gradients(&self) -> Result<Gradients<T>, AutogradError> {
        if !self.requires_grad() {
            return Err(AutogradError::RequiresGradNotMet);
        }

        let nodes = self.graph.nodes();
        let sorted_nodes = topological_sort(&nodes, self.id);
        debug!(
            "backward: starting from {} over {} nodes",
            self.id,
            sorted_nodes.len()
        );

        // Key: NodeId, Value: gradient accumulated during this pass
        let mut grad_map: HashMap<_, T> = HashMap::new();
        grad_map.insert(self.id, T::one());

        for &node_id in sorted_nodes.iter().rev() {
            // Every consumer of node_id comes later in the order, so its
            // gradient is complete here.
            let accumulated_grad = match grad_map.get(&node_id) {
                Some(&grad) => grad,
                None => continue,
            };
            let node = &nodes[node_id.index()];
            trace!(
                "backward: {} ({}) grad={}",
                node_id,
                node.op.label(),
                accumulated_grad
            );

            for (input_id, grad_to_add) in node.op.backward(accumulated_grad) {
                if !nodes[input_id.index()].requires_grad {
                    continue;
                }
                let entry = grad_map.entry(input_id).or_insert_with(T::zero);
                *entry = *entry + grad_to_add;
            }
        }

        Ok(Gradients::new(self.graph, grad_map))
    }

    /// Resets this node's accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.set_grad(self.id, T::zero());
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
