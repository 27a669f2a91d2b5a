use thiserror::Error;

/// Custom error type for the labgrad engine.
///
/// Every invalid numeric operation fails fast with one of these variants at the
/// point where the offending node would have been built; nothing is deferred to
/// the backward pass.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutogradError {
    #[error("Operands belong to different graphs in operation {operation}")]
    GraphMismatch { operation: String },

    #[error("Division by zero in operation {operation}")]
    DivisionByZero { operation: String },

    #[error("Invalid power: base {base} raised to non-integral exponent {exponent} has no real value")]
    InvalidPower { base: f64, exponent: f64 },

    #[error("Backward called on a node that does not require grad.")]
    RequiresGradNotMet,

    #[error("Internal error: {0}")]
    InternalError(String),
}
