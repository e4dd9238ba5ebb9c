//! Error types for the diameter solve.

use shaft_core::CoreError;
use thiserror::Error;

/// Errors that can occur while sizing a shaft diameter.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    #[error("Invalid physical parameters: {0}")]
    InvalidParameters(#[from] CoreError),

    #[error(
        "No sign change found scanning diameters 1..={search_limit} m \
         (criterion at {search_limit} m: {last_residual}); the root may lie \
         beyond the search limit"
    )]
    BracketNotFound {
        search_limit: usize,
        last_residual: f64,
    },

    #[error(
        "Degenerate bracket [{low}, {high}]: endpoint residuals do not \
         straddle zero (f(low)={low_residual}, f(high)={high_residual})"
    )]
    DegenerateBracket {
        low: f64,
        high: f64,
        low_residual: f64,
        high_residual: f64,
    },

    #[error("Bracket endpoint is not finite: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("Bracket has zero width: both endpoints are {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("Non-finite criterion value {residual} at d = {d}")]
    NonFiniteResidual { d: f64, residual: f64 },

    #[error("Invalid solver config: {reason}")]
    InvalidConfig { reason: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;
