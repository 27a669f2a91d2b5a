//! # labgrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Values live as nodes in a [`Graph`] arena and are manipulated through
//! [`Var`] handles. Every arithmetic operation appends one node recording its
//! forward value and a [`BackwardOp`]; [`Var::backward`] walks the ancestors of
//! a node in reverse topological order and accumulates d(output)/d(node) into
//! every tracked node.
//!
//! ```
//! use labgrad_core::Graph;
//!
//! let graph: Graph = Graph::new();
//! let x = graph.var(-4.0);
//! let z = 2.0 * x + 2.0 + x;
//! let q = z.relu() + z * x;
//! let h = (z * z).relu();
//! let y = h + q + q * x;
//! y.backward().unwrap();
//!
//! assert_eq!(y.value(), -20.0);
//! assert_eq!(x.grad(), 46.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod types;
pub mod var;

pub use autograd::{BackwardOp, Gradients};
pub use error::AutogradError;
pub use graph::Graph;
pub use node::NodeId;
pub use types::Scalar;
pub use var::{Operand, Var};

// Re-export traits required by public functions/structs
pub use num_traits;
