use super::add_op;
use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::Graph;

#[test]
fn test_add_forward() {
    let graph = Graph::<f64>::new();
    let a = graph.var(1.0);
    let b = graph.var(2.0);
    let c = add_op(a, b).unwrap();
    assert_eq!(c.value(), 3.0);
    assert_eq!(c.op(), BackwardOp::Add { lhs: a.id(), rhs: b.id() });
    assert_eq!(c.op().label(), "+");
}

#[test]
fn test_add_backward() {
    let graph = Graph::<f64>::new();
    let a = graph.var(1.0);
    let b = graph.var(2.0);
    let c = add_op(a, b).unwrap();
    c.backward().unwrap();
    assert_eq!(c.grad(), 1.0);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_scalar_operand_is_constant() {
    let graph = Graph::<f64>::new();
    let a = graph.var(1.0);
    let c = add_op(a, 2.0).unwrap();
    assert_eq!(c.value(), 3.0);

    let constant = c.parents()[1];
    assert!(constant.is_leaf());
    assert!(!constant.requires_grad());

    c.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(constant.grad(), 0.0);
}

#[test]
fn test_add_operators_and_reflection() {
    let graph = Graph::<f64>::new();
    let a = graph.var(1.5);
    let b = graph.var(-0.5);
    assert_eq!((a + b).value(), 1.0);
    assert_eq!((a + 2.0).value(), 3.5);
    assert_eq!((2.0 + a).value(), (a + 2.0).value());

    let reflected = 2.0 + a;
    reflected.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_add_graph_mismatch() {
    let graph_a = Graph::<f64>::new();
    let graph_b = Graph::<f64>::new();
    let a = graph_a.var(1.0);
    let b = graph_b.var(2.0);
    let result = add_op(a, b);
    assert_eq!(
        result.err(),
        Some(AutogradError::GraphMismatch {
            operation: "add_op".to_string()
        })
    );
    assert_eq!(graph_a.len(), 1);
}

#[test]
#[should_panic(expected = "different graphs")]
fn test_add_operator_panics_on_graph_mismatch() {
    let graph_a = Graph::<f64>::new();
    let graph_b = Graph::<f64>::new();
    let _ = graph_a.var(1.0) + graph_b.var(2.0);
}
