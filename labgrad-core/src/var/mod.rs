use crate::autograd::BackwardOp;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

mod autograd_methods;
mod debug;
mod traits;

/// Handle to one scalar node of a [`Graph`].
///
/// `Var` is a graph reference plus a [`NodeId`]; copying it never copies the
/// node. Two handles are the same node exactly when their ids (and graphs)
/// match, regardless of the values they hold.
///
/// Arithmetic is available through `std::ops` (`+`, `-`, `*`, `/`, unary `-`)
/// between `Var`s, with plain numbers on either side, and through
/// [`pow`](Var::pow) and [`relu`](Var::relu). The fallible forms live in
/// [`ops`](crate::ops).
pub struct Var<'g, T = f64> {
    graph: &'g Graph<T>,
    id: NodeId,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<'g, T> Clone for Var<'g, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T> Copy for Var<'g, T> {}

impl<'g, T: Scalar> Var<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        Var { graph, id }
    }

    /// The graph this node lives in.
    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value computed when the node was built.
    pub fn value(&self) -> T {
        self.graph.value(self.id)
    }

    /// Accumulated gradient; zero until a backward pass reaches this node.
    pub fn grad(&self) -> T {
        self.graph.grad(self.id)
    }

    pub fn requires_grad(&self) -> bool {
        self.graph.requires_grad(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.op(self.id).is_leaf()
    }

    /// The operation that produced this node.
    pub fn op(&self) -> BackwardOp<T> {
        self.graph.op(self.id)
    }

    /// Handles to the nodes this one was computed from, in operand order.
    pub fn parents(&self) -> Vec<Var<'g, T>> {
        self.op()
            .inputs()
            .into_iter()
            .map(|id| Var::new(self.graph, id))
            .collect()
    }

    /// Whether `self` and `other` live in the same arena.
    pub(crate) fn same_graph(&self, other: &Var<'_, T>) -> bool {
        std::ptr::eq(self.graph, other.graph)
    }
}

impl<'g, T> PartialEq for Var<'g, T> {
    /// Identity comparison: same graph and same node.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<'g, T> Eq for Var<'g, T> {}

/// Right-hand operand of an operation: another node or a plain number.
///
/// A number is materialized as an untracked constant leaf in the graph of the
/// node it is combined with.
#[derive(Clone, Copy)]
pub enum Operand<'g, T = f64> {
    Var(Var<'g, T>),
    Scalar(T),
}

impl<'g, T: Scalar> Operand<'g, T> {
    /// Resolves the operand to a node in `graph`.
    pub(crate) fn into_var(self, graph: &'g Graph<T>) -> Var<'g, T> {
        match self {
            Operand::Var(var) => var,
            Operand::Scalar(value) => graph.constant(value),
        }
    }
}

impl<'g, T> From<Var<'g, T>> for Operand<'g, T> {
    fn from(var: Var<'g, T>) -> Self {
        Operand::Var(var)
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
            impl<'g> From<$t> for Operand<'g, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_operand_from_scalar!(f32, f64);
