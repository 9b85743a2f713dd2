//! Root-finding error types.
//!
//! One shared [`SolveError`] covers all three methods: the solvers share a
//! termination policy and a result contract, so they share a failure
//! vocabulary. Every failure is a typed value returned to the caller; no
//! error is retried inside the solver and none is reported partially (a call
//! either yields a complete [`SolveResult`] or one of these variants).
//!
//! [`SolveResult`]: super::report::SolveResult

use thiserror::Error;

use super::algorithms::Algorithm;

/// Failure kinds shared by all root-finding algorithms.
///
/// ┌ recoverable by the caller
/// │   └ [`SolveError::MaxIterationsExceeded`] - retry with a larger budget
/// │     or a different method
/// ├ fatal for the call
/// │   ├ [`SolveError::ZeroDerivative`]   - Newton-Raphson only
/// │   └ [`SolveError::DegenerateSecant`] - secant only
/// └ rejected before any iteration runs
///     ├ [`SolveError::InvalidBracket`]
///     ├ [`SolveError::InvalidGuess`]
///     ├ [`SolveError::InvalidTolerance`]
///     ├ [`SolveError::InvalidMaxIter`]
///     └ [`SolveError::MissingDerivative`]
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("maximum number of iterations reached: max_iter={max_iter}")]
    MaxIterationsExceeded { max_iter: usize },

    #[error("derivative is zero at x={x}; no further step possible")]
    ZeroDerivative { x: f64 },

    #[error("degenerate secant step: f(x) == f(x_prev) for x={x}, x_prev={x_prev}")]
    DegenerateSecant { x: f64, x_prev: f64 },

    #[error("invalid bracket: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBracket { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    NonFiniteDerivative { x: f64, dfx: f64 },

    #[error("invalid initial guess: x={x} must be finite")]
    InvalidGuess { x: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("missing derivative: {algorithm} requires df")]
    MissingDerivative { algorithm: Algorithm },
}
