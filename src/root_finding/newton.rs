//! Newton-Raphson method

use super::common::validate_params;
use super::errors::SolveError;
use super::report::{IterationRecord, SolveResult, Trace};

/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)` with a finite-check
/// - `eval_dfx_checked` : evaluates the supplied derivative `df(x)` with a finite-check
#[inline]
fn eval_fx_checked<F>(f: &mut F, x: f64) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let fx = f(x);
    if !fx.is_finite() {
        return Err(SolveError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

#[inline]
fn eval_dfx_checked<G>(df: &mut G, x: f64) -> Result<f64, SolveError>
where
    G: FnMut(f64) -> f64,
{
    let dfx = df(x);
    if !dfx.is_finite() {
        return Err(SolveError::NonFiniteDerivative { x, dfx });
    }
    Ok(dfx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a caller-supplied derivative.
///
/// # Arguments
///
/// ┌ `func`     - The function whose root is to be found.
/// ├ `dfunc`    - Its derivative, produced externally (the solver never
///                differentiates).
/// ├ `x0`       - Finite initial guess.
/// ├ `tol`      - Convergence tolerance on `|f(x)|`.
/// └ `max_iter` - Iteration budget.
///
/// # Returns
///
/// On success, a [`SolveResult`] whose `root` is the first iterate with
/// `|f(x)| < tol`; the trace records every iterate examined, including the
/// root as its last entry.
///
/// # Errors
///
/// ┌ [`SolveError::InvalidGuess`]          - `x0` non-finite.
/// ├ [`SolveError::InvalidTolerance`]      - `tol` <= 0 or not finite.
/// ├ [`SolveError::InvalidMaxIter`]        - `max_iter` == 0.
/// ├ [`SolveError::NonFiniteEvaluation`]   - `func(x)` produced NaN or inf.
/// ├ [`SolveError::NonFiniteDerivative`]   - `dfunc(x)` produced NaN or inf.
/// ├ [`SolveError::ZeroDerivative`]        - `dfunc(x) == 0`; hard stop, never retried.
/// └ [`SolveError::MaxIterationsExceeded`] - budget exhausted without convergence.
///
/// # Notes
///
/// - Convergence is checked on the pre-update iterate; the derivative is
///   evaluated only after that check, so a successful stop never evaluates
///   an unnecessary `df(x)`.
/// - Convergence is local. Poor guesses can diverge or cycle; for guaranteed
///   convergence on a sign-changing bracket use [`bisect`](super::bisection::bisect).
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<SolveResult, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(SolveError::InvalidGuess { x: x0 });
    }
    validate_params(tol, max_iter)?;

    let mut x = x0;
    let mut trace = Trace::new();
    for index in 0..max_iter {
        let fx = eval_fx_checked(&mut func, x)?;
        trace.push(IterationRecord { index, point: x, value: fx });

        if fx.abs() < tol {
            return Ok(SolveResult { root: x, trace });
        }

        // derivative is evaluated only after the convergence check
        let dfx = eval_dfx_checked(&mut dfunc, x)?;
        if dfx == 0.0 {
            return Err(SolveError::ZeroDerivative { x });
        }

        x -= fx / dfx;
    }

    Err(SolveError::MaxIterationsExceeded { max_iter })
}
