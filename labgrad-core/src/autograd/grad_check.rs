use crate::error::AutogradError;
use crate::graph::Graph;
use crate::var::Var;
use approx::relative_eq;
use log::{debug, warn};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-5,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds a scalar expression from one tracked leaf per entry of
/// `inputs`. It is evaluated once with `backward` to read the analytical
/// gradients, then twice per input at `x ± epsilon` on fresh graphs to form
/// the central difference `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// Points closer than `epsilon` to a ReLU kink or another non-differentiable
/// point can legitimately fail.
///
/// ```
/// use labgrad_core::autograd::grad_check::{check_grad, GradCheckConfig};
///
/// let result = check_grad(
///     |_graph, xs| Ok(xs[0] * xs[1] + xs[0].pow(2.0)),
///     &[1.5, -2.0],
///     &GradCheckConfig::default(),
/// );
/// assert!(result.is_ok());
/// ```
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph<f64>, &[Var<'g, f64>]) -> Result<Var<'g, f64>, AutogradError>,
{
    let analytical = analytical_grads(&func, inputs)?;
    let two = 2.0f64;

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            warn!(
                "check_grad: analytical gradient for input {} is {}",
                input_index, analytical_grad
            );
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + config.epsilon;
        let loss_plus = evaluate(&func, &shifted)?;
        shifted[input_index] = inputs[input_index] - config.epsilon;
        let loss_minus = evaluate(&func, &shifted)?;

        let numerical_grad = (loss_plus - loss_minus) / (two * config.epsilon);
        if !numerical_grad.is_finite() {
            warn!(
                "check_grad: numerical gradient for input {} is {}",
                input_index, numerical_grad
            );
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            let difference = (analytical_grad - numerical_grad).abs();
            warn!(
                "check_grad: mismatch for input {} (difference {})",
                input_index, difference
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn analytical_grads<F>(func: &F, inputs: &[f64]) -> Result<Vec<f64>, GradCheckError>
where
    F: for<'g> Fn(&'g Graph<f64>, &[Var<'g, f64>]) -> Result<Var<'g, f64>, AutogradError>,
{
    let graph = Graph::new();
    let vars: Vec<Var<'_, f64>> = inputs.iter().map(|&x| graph.var(x)).collect();
    let output = func(&graph, &vars).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    Ok(vars.iter().map(|v| v.grad()).collect())
}

fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph<f64>, &[Var<'g, f64>]) -> Result<Var<'g, f64>, AutogradError>,
{
    let graph = Graph::new();
    let vars: Vec<Var<'_, f64>> = inputs.iter().map(|&x| graph.constant(x)).collect();
    let output = func(&graph, &vars)?;
    Ok(output.value())
}
