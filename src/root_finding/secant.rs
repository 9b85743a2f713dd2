use super::common::validate_params;
use super::errors::SolveError;
use super::report::{IterationRecord, SolveResult, Trace};

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
///
/// ┌ `func`     - The function whose root is to be found.
/// ├ `x0`       - First seed. Becomes the CURRENT iterate and is reported as
///                iteration 0.
/// ├ `x1`       - Second seed. Becomes the PREVIOUS iterate.
/// ├ `tol`      - Convergence tolerance on `|f(x)|`.
/// └ `max_iter` - Iteration budget.
///
/// The seed order is deliberate and easy to invert: swapping `x0` and `x1`
/// changes which point appears as iteration 0 in the trace. Callers
/// integrating this method must preserve the convention.
///
/// # Returns
///
/// On success, a [`SolveResult`] whose `root` is the first iterate with
/// `|f(x)| < tol`; the trace holds one record per iteration, ending at the
/// root.
///
/// # Errors
///
/// ┌ [`SolveError::InvalidGuess`]          - `x0` or `x1` non-finite.
/// ├ [`SolveError::InvalidTolerance`]      - `tol` <= 0 or not finite.
/// ├ [`SolveError::InvalidMaxIter`]        - `max_iter` == 0.
/// ├ [`SolveError::NonFiniteEvaluation`]   - `func(x)` produced NaN or inf.
/// ├ [`SolveError::DegenerateSecant`]      - two successive function values are
/// │                                         equal, making the update undefined;
/// │                                         hard stop, never retried.
/// └ [`SolveError::MaxIterationsExceeded`] - budget exhausted without convergence.
///
/// # Notes
///
/// Equal seeds are not rejected up front: they yield equal function values
/// and surface as [`SolveError::DegenerateSecant`] on iteration 0.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    tol: f64,
    max_iter: usize,
) -> Result<SolveResult, SolveError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(SolveError::InvalidGuess { x: x0 });
    }
    if !x1.is_finite() {
        return Err(SolveError::InvalidGuess { x: x1 });
    }
    validate_params(tol, max_iter)?;

    // wraps func, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SolveError> {
        let fx = func(x);
        if !fx.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    // first argument becomes the current point, second the previous
    let mut x_prev = x1;
    let mut x = x0;
    let mut trace = Trace::new();
    for index in 0..max_iter {
        let fx = eval(x)?;
        let fx_prev = eval(x_prev)?;
        trace.push(IterationRecord { index, point: x, value: fx });

        if fx.abs() < tol {
            return Ok(SolveResult { root: x, trace });
        }

        if fx - fx_prev == 0.0 {
            return Err(SolveError::DegenerateSecant { x, x_prev });
        }

        let x_new = x - fx * (x - x_prev) / (fx - fx_prev);
        x_prev = x;
        x = x_new;
    }

    Err(SolveError::MaxIterationsExceeded { max_iter })
}
