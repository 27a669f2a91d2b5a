//! # Reference scenarios
//!
//! Builds the two reference expressions, runs backward on each and prints
//! the values and gradients, then differentiates two outputs of one graph
//! separately with `gradients`.
//!
//! `RUST_LOG=debug cargo run --example reference_scenarios` also shows the
//! engine's own logging.

use labgrad_core::{AutogradError, Graph};

fn scenario_one() -> Result<(), AutogradError> {
    let graph: Graph = Graph::new();
    let x = graph.var(-4.0);
    let z = 2.0 * x + 2.0 + x;
    let q = z.relu() + z * x;
    let h = (z * z).relu();
    let y = h + q + q * x;
    y.backward()?;

    println!("scenario 1: y = {:.4}, dy/dx = {:.4}", y.value(), x.grad());
    println!("  graph holds {} nodes", graph.len());
    Ok(())
}

fn scenario_two() -> Result<(), AutogradError> {
    let graph: Graph = Graph::new();
    let a = graph.var(-4.0);
    let b = graph.var(2.0);
    let mut c = a + b;
    let mut d = a * b + b.pow(3.0);
    c = c + c + 1.0;
    c = c + 1.0 + c + (-a);
    d = d + d * 2.0 + (b + a).relu();
    d = d + 3.0 * d + (b - a).relu();
    let e = c - d;
    let f = e.pow(2.0);
    let mut g = f / 2.0;
    g = g + 10.0 / f;
    g.backward()?;

    println!("scenario 2: g = {:.4}", g.value());
    println!("  dg/da = {:.4}", a.grad());
    println!("  dg/db = {:.4}", b.grad());
    Ok(())
}

fn per_target_gradients() -> Result<(), AutogradError> {
    let graph: Graph = Graph::new();
    let x = graph.var(3.0);
    let w = graph.var(-2.0);
    let u = x * w;
    let v = u.relu() + x.pow(2.0);

    // Two outputs of one graph, each differentiated on its own.
    for (name, output) in [("u", u), ("v", v)] {
        let grads = output.gradients()?;
        println!(
            "d{}/dx = {:.4}, d{}/dw = {:.4}",
            name,
            grads.wrt(x),
            name,
            grads.wrt(w)
        );
    }
    println!("  stored grads untouched: x.grad = {}, w.grad = {}", x.grad(), w.grad());
    Ok(())
}

fn main() -> Result<(), AutogradError> {
    env_logger::init();
    scenario_one()?;
    scenario_two()?;
    per_target_gradients()?;
    Ok(())
}
