use crate::types::Scalar;
use crate::var::Var;
use std::fmt;

impl<'g, T: Scalar> fmt::Debug for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let node = &nodes[self.id.index()];
        write!(
            f,
            "Var(id={}, data={:?}, grad={:?}, op={}, requires_grad={})",
            self.id, node.value, node.grad, node.op, node.requires_grad
        )
    }
}

impl<'g, T: Scalar> fmt::Display for Var<'g, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var(data={}, grad={})", self.value(), self.grad())
    }
}
