//! Evaluator core: errors, the operation table and the input state machine
//!
//! Every math failure is a [`CalcError`]. The evaluator turns those into the
//! "Error" display instead of propagating them to the caller.

pub mod entry;
pub mod evaluator;
pub mod format;
pub mod history;
pub mod memory;
pub mod modes;
mod operations;

pub use operations::{BinaryOp, Constant, Operator, UnaryOp};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division or modulo by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Operand outside the operation's domain
    #[error("Domain error: {op} is undefined for {value}")]
    Domain {
        /// Canonical operation name
        op: &'static str,
        /// Offending operand
        value: f64,
    },

    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,

    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// Input the calculator cannot act on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operator, memory or constant name that is not recognized
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CalcError {
    /// Creates a domain error for the named operation
    #[must_use]
    pub const fn domain(op: &'static str, value: f64) -> Self {
        Self::Domain { op, value }
    }
}

/// Rejects results the display cannot show
///
/// Sits between the raw `f64` math and the evaluator so that NaN, infinity
/// and values past `max_magnitude` all surface as errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultGuard {
    /// Maximum allowed result magnitude
    pub max_magnitude: f64,
}

impl Default for ResultGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultGuard {
    /// Finite `f64` range
    pub const DEFAULT_MAX_MAGNITUDE: f64 = f64::MAX;

    /// Creates a guard that only rejects non-finite values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_magnitude: Self::DEFAULT_MAX_MAGNITUDE,
        }
    }

    /// Creates a guard with a custom magnitude bound
    #[must_use]
    pub const fn with_max_magnitude(max_magnitude: f64) -> Self {
        Self { max_magnitude }
    }

    /// Returns the value if it is displayable
    pub fn check(&self, result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() || result.abs() > self.max_magnitude {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
