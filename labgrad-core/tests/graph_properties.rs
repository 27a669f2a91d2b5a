use approx::assert_relative_eq;
use labgrad_core::autograd::grad_check::{check_grad, GradCheckConfig};
use labgrad_core::ops::arithmetic::div_op;
use labgrad_core::{Graph, Var};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod common;
use common::{init_logger, tracked_leaves};

/// One node-producing step of a randomly generated expression.
/// Operands index into the pool of nodes built so far.
#[derive(Debug, Clone, Copy)]
enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    Scale(usize, f64),
    Square(usize),
    Relu(usize),
    // a / (b * b + 1), never divides by zero
    SoftDiv(usize, usize),
}

fn random_program(rng: &mut StdRng, num_inputs: usize, num_steps: usize) -> Vec<Step> {
    let mut program = Vec::with_capacity(num_steps);
    for i in 0..num_steps {
        let pool = num_inputs + i;
        let a = rng.gen_range(0..pool);
        let b = rng.gen_range(0..pool);
        let step = match rng.gen_range(0..7) {
            0 => Step::Add(a, b),
            1 => Step::Sub(a, b),
            2 => Step::Mul(a, b),
            3 => Step::Scale(a, rng.gen_range(-2.0..2.0)),
            4 => Step::Square(a),
            5 => Step::Relu(a),
            _ => Step::SoftDiv(a, b),
        };
        program.push(step);
    }
    program
}

fn run_program<'g>(inputs: &[Var<'g, f64>], program: &[Step]) -> Var<'g, f64> {
    let mut pool: Vec<Var<'g, f64>> = inputs.to_vec();
    for step in program {
        let node = match *step {
            Step::Add(a, b) => pool[a] + pool[b],
            Step::Sub(a, b) => pool[a] - pool[b],
            Step::Mul(a, b) => pool[a] * pool[b],
            Step::Scale(a, k) => k * pool[a],
            Step::Square(a) => pool[a].pow(2.0),
            Step::Relu(a) => pool[a].relu(),
            Step::SoftDiv(a, b) => pool[a] / (pool[b] * pool[b] + 1.0),
        };
        pool.push(node);
    }
    // Sum everything so every intermediate node is an ancestor of the output.
    let first = pool[0];
    pool[1..].iter().fold(first, |acc, &v| acc + v)
}

/// Forward-mode value and derivative, used as an independent reference.
#[derive(Debug, Clone, Copy)]
struct Dual {
    v: f64,
    d: f64,
}

fn run_program_dual(inputs: &[f64], seed_index: usize, program: &[Step]) -> Dual {
    let mut pool: Vec<Dual> = inputs
        .iter()
        .enumerate()
        .map(|(i, &v)| Dual {
            v,
            d: if i == seed_index { 1.0 } else { 0.0 },
        })
        .collect();
    for step in program {
        let node = match *step {
            Step::Add(a, b) => Dual {
                v: pool[a].v + pool[b].v,
                d: pool[a].d + pool[b].d,
            },
            Step::Sub(a, b) => Dual {
                v: pool[a].v - pool[b].v,
                d: pool[a].d - pool[b].d,
            },
            Step::Mul(a, b) => Dual {
                v: pool[a].v * pool[b].v,
                d: pool[a].d * pool[b].v + pool[a].v * pool[b].d,
            },
            Step::Scale(a, k) => Dual {
                v: k * pool[a].v,
                d: k * pool[a].d,
            },
            Step::Square(a) => Dual {
                v: pool[a].v * pool[a].v,
                d: 2.0 * pool[a].v * pool[a].d,
            },
            Step::Relu(a) => {
                if pool[a].v > 0.0 {
                    pool[a]
                } else {
                    Dual { v: 0.0, d: 0.0 }
                }
            }
            Step::SoftDiv(a, b) => {
                let den = pool[b].v * pool[b].v + 1.0;
                let den_d = 2.0 * pool[b].v * pool[b].d;
                Dual {
                    v: pool[a].v / den,
                    d: (pool[a].d * den - pool[a].v * den_d) / (den * den),
                }
            }
        };
        pool.push(node);
    }
    pool[1..].iter().fold(pool[0], |acc, v| Dual {
        v: acc.v + v.v,
        d: acc.d + v.d,
    })
}

#[test]
fn test_random_graphs_match_forward_mode() {
    init_logger();
    let num_inputs = 3;
    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..num_inputs).map(|_| rng.gen_range(-1.5..1.5)).collect();
        let program = random_program(&mut rng, num_inputs, 6);

        let graph = Graph::<f64>::new();
        let inputs = tracked_leaves(&graph, &values);
        let output = run_program(&inputs, &program);
        output.backward().unwrap();

        for (i, input) in inputs.iter().enumerate() {
            let reference = run_program_dual(&values, i, &program);
            assert_relative_eq!(output.value(), reference.v, epsilon = 1e-9, max_relative = 1e-9);
            assert_relative_eq!(input.grad(), reference.d, epsilon = 1e-7, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_random_graphs_second_backward_doubles() {
    let num_inputs = 3;
    for seed in 100..108u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..num_inputs).map(|_| rng.gen_range(-1.5..1.5)).collect();
        let program = random_program(&mut rng, num_inputs, 6);

        let graph = Graph::<f64>::new();
        let inputs = tracked_leaves(&graph, &values);
        let output = run_program(&inputs, &program);

        output.backward().unwrap();
        let once: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();
        output.backward().unwrap();
        for (input, single) in inputs.iter().zip(once) {
            assert_relative_eq!(input.grad(), 2.0 * single, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_gradients_agree_with_backward() {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.5..1.5)).collect();
    let program = random_program(&mut rng, 3, 8);

    let graph = Graph::<f64>::new();
    let inputs = tracked_leaves(&graph, &values);
    let output = run_program(&inputs, &program);
    let grads = output.gradients().unwrap();
    output.backward().unwrap();

    for input in &inputs {
        assert_eq!(grads.wrt(*input), input.grad());
    }
}

#[test]
fn test_smooth_function_passes_grad_check_at_random_points() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let point = [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)];
        let result = check_grad(
            |_graph, xs| {
                let (x, y) = (xs[0], xs[1]);
                let soft = div_op(y, x * x + 1.0)?;
                Ok(x * y + x.pow(3.0) - soft)
            },
            &point,
            &GradCheckConfig::default(),
        );
        assert!(result.is_ok(), "grad check failed at {:?}: {:?}", point, result.err());
    }
}

#[test]
fn test_wide_fan_in_shared_leaf() {
    // x used by 1000 consumers: d/dx sum(k * x) = sum(k)
    let graph = Graph::<f64>::new();
    let x = graph.var(0.5);
    let mut total = graph.constant(0.0);
    for k in 1..=1000 {
        total = total + (k as f64) * x;
    }
    total.backward().unwrap();
    assert_relative_eq!(x.grad(), 500_500.0);
}

#[test]
fn test_deep_chain_backward() {
    let graph = Graph::<f64>::new();
    let x = graph.var(1.0);
    let mut acc = x;
    for _ in 0..100_000 {
        acc = acc + x;
    }
    acc.backward().unwrap();
    assert_eq!(x.grad(), 100_001.0);
}
