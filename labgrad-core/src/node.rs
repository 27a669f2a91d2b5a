use crate::autograd::BackwardOp;
use std::fmt;

/// Identity of a node inside its [`Graph`](crate::Graph) arena.
///
/// Ids are handed out in creation order, so every parent of a node has a
/// strictly smaller id than the node itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage cell for one scalar in the arena.
///
/// Only `grad` changes after construction.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) requires_grad: bool,
    pub(crate) op: BackwardOp<T>,
}
