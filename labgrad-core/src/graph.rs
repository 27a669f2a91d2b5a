use crate::autograd::{BackwardOp, Gradients};
use crate::node::{Node, NodeId};
use crate::types::Scalar;
use crate::var::Var;
use log::debug;
use std::cell::{Ref, RefCell};
use std::fmt;

/// Arena owning every node of a computation graph.
///
/// Nodes are appended by leaf constructors and by every arithmetic operation,
/// and are only released when the `Graph` itself is dropped. User code works
/// with [`Var`] handles, which borrow the graph and are `Copy`, so a
/// subexpression can be reused any number of times.
///
/// ```
/// use labgrad_core::Graph;
///
/// let graph: Graph = Graph::new();
/// let x = graph.var(3.0);
/// let y = x * x + 2.0 * x;
/// y.backward().unwrap();
/// assert_eq!(y.value(), 15.0);
/// assert_eq!(x.grad(), 8.0);
/// ```
pub struct Graph<T = f64> {
    nodes: RefCell<Vec<Node<T>>>,
}

impl<T: Scalar> Graph<T> {
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Creates a tracked leaf: it receives gradient during backward.
    pub fn var(&self, value: T) -> Var<'_, T> {
        self.leaf(value, true)
    }

    /// Creates an untracked leaf that behaves as a constant.
    pub fn constant(&self, value: T) -> Var<'_, T> {
        self.leaf(value, false)
    }

    /// Creates a leaf with an explicit `requires_grad` flag.
    pub fn leaf(&self, value: T, requires_grad: bool) -> Var<'_, T> {
        let id = self.push(value, BackwardOp::Leaf, requires_grad);
        Var::new(self, id)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the accumulated gradient of every node to zero.
    pub fn zero_grad(&self) {
        let mut nodes = self.nodes.borrow_mut();
        debug!("Graph: zero_grad() on {} nodes", nodes.len());
        for node in nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    pub(crate) fn push(&self, value: T, op: BackwardOp<T>, requires_grad: bool) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId::new(nodes.len());
        nodes.push(Node {
            value,
            grad: T::zero(),
            requires_grad,
            op,
        });
        id
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node<T>>> {
        self.nodes.borrow()
    }

    pub(crate) fn value(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.index()].value
    }

    pub(crate) fn grad(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.index()].grad
    }

    pub(crate) fn requires_grad(&self, id: NodeId) -> bool {
        self.nodes.borrow()[id.index()].requires_grad
    }

    pub(crate) fn op(&self, id: NodeId) -> BackwardOp<T> {
        self.nodes.borrow()[id.index()].op.clone()
    }

    pub(crate) fn set_grad(&self, id: NodeId, grad: T) {
        self.nodes.borrow_mut()[id.index()].grad = grad;
    }

    /// Adds the result of one backward pass into the stored gradients.
    pub(crate) fn accumulate(&self, gradients: &Gradients<T>) {
        let mut nodes = self.nodes.borrow_mut();
        for (id, grad) in gradients.iter() {
            let node = &mut nodes[id.index()];
            node.grad = node.grad + grad;
        }
        debug!("Graph: accumulated gradients into {} nodes", gradients.len());
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes.try_borrow() {
            Ok(nodes) => write!(f, "Graph(nodes={})", nodes.len()),
            Err(_) => write!(f, "Graph(<borrowed>)"),
        }
    }
}
