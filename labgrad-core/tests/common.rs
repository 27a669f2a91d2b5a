use labgrad_core::{Graph, Var};

// Shared helpers for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Installs `env_logger` once so `RUST_LOG=debug cargo test` shows engine logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one tracked leaf per value.
#[allow(dead_code)]
pub fn tracked_leaves<'g>(graph: &'g Graph<f64>, values: &[f64]) -> Vec<Var<'g, f64>> {
    values.iter().map(|&v| graph.var(v)).collect()
}
