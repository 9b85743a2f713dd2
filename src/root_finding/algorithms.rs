//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum listing the supported methods, the
//! crate-wide defaults, and [`Algorithm::solve_on_bracket`], which seeds and
//! runs any method from a single validated bracket the way an interactive
//! caller supplies one.

use super::bisection::bisect;
use super::common::midpoint;
use super::errors::SolveError;
use super::newton::newton;
use super::report::SolveResult;
use super::secant::secant;

/// Default convergence tolerance.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Default iteration budget shared by all methods.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Root-finding algorithm variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    NewtonRaphson,
    Secant,
}

impl Algorithm {
    /// Algorithm names used in summaries and error messages.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection     => "bisection",
            Algorithm::NewtonRaphson => "newton_raphson",
            Algorithm::Secant        => "secant",
        }
    }

    /// Runs `self` on `func` over the bracket `[a, b]`.
    ///
    /// Seeds each method from the bracket:
    /// ┌ [`Algorithm::Bisection`]     - the bracket itself
    /// ├ [`Algorithm::NewtonRaphson`] - `x0 = (a + b) / 2`, requires `dfunc`
    /// └ [`Algorithm::Secant`]        - current `a`, previous `(a + b) / 2`
    ///
    /// The bracket is validated for every method before dispatch; `dfunc` is
    /// only consumed by Newton-Raphson.
    ///
    /// # Errors
    ///
    /// ┌ [`SolveError::InvalidBracket`]    - `a` or `b` is NaN/inf, or `a >= b`.
    /// ├ [`SolveError::MissingDerivative`] - Newton-Raphson without `dfunc`.
    /// └ anything the dispatched solver returns.
    pub fn solve_on_bracket<F, G>(
        self,
        func: F,
        dfunc: Option<G>,
        a: f64,
        b: f64,
        tol: f64,
        max_iter: usize,
    ) -> Result<SolveResult, SolveError>
    where
        F: FnMut(f64) -> f64,
        G: FnMut(f64) -> f64,
    {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(SolveError::InvalidBracket { a, b });
        }

        match self {
            Algorithm::Bisection => bisect(func, a, b, tol, max_iter),
            Algorithm::NewtonRaphson => match dfunc {
                Some(df) => newton(func, df, midpoint(a, b), tol, max_iter),
                None => Err(SolveError::MissingDerivative { algorithm: self }),
            },
            Algorithm::Secant => secant(func, a, midpoint(a, b), tol, max_iter),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
