//! # Autograd
//!
//! Reverse-mode differentiation over the node arena.
//!
//! - [`BackwardOp`]: the per-node record of how a value was produced.
//! - `graph`: topological ordering of a node's ancestors.
//! - [`Gradients`]: the result of one backward pass, keyed by node.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use crate::var::Var;
use std::collections::HashMap;

/// Gradients of one output with respect to every tracked node it depends on.
///
/// Produced by [`Var::gradients`]. Nodes that do not require grad, and nodes
/// the output does not depend on, have no entry and read as zero. A `Var`
/// from another graph never depends on the output and also reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients<T> {
    // Identity only, never dereferenced.
    graph: *const Graph<T>,
    grads: HashMap<NodeId, T>,
}

impl<T: Scalar> Gradients<T> {
    pub(crate) fn new(graph: &Graph<T>, grads: HashMap<NodeId, T>) -> Self {
        Gradients { graph, grads }
    }

    /// Gradient stored for `id`, if any flowed into it.
    pub fn get(&self, id: NodeId) -> Option<T> {
        self.grads.get(&id).copied()
    }

    /// d(output)/d(`var`), zero when `var` received no gradient.
    pub fn wrt(&self, var: Var<'_, T>) -> T {
        if !std::ptr::eq(self.graph, var.graph()) {
            return T::zero();
        }
        self.get(var.id()).unwrap_or_else(T::zero)
    }

    pub fn len(&self) -> usize {
        self.grads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, T)> + '_ {
        self.grads.iter().map(|(&id, &grad)| (id, grad))
    }
}
