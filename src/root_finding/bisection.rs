use super::common::{midpoint, validate_params};
use super::errors::SolveError;
use super::report::{IterationRecord, SolveResult, Trace};

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// The method assumes `func` is continuous on `[a, b]` and that `func(a)`
/// and `func(b)` have opposite signs, which guarantees a root inside the
/// interval and convergence toward it.
///
/// # Arguments
///
/// ┌ `func`     - The function whose root is to be found.
/// ├ `a`        - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`        - Upper bound of the search interval. Must be finite and greater than `a`.
/// ├ `tol`      - Convergence tolerance on `|f(c)|` and on the interval half-width.
/// └ `max_iter` - Iteration budget; exhausting it is an error, never a silent
///                unconverged answer.
///
/// # Returns
///
/// On success, a [`SolveResult`] whose `root` is the midpoint that satisfied
/// `|f(c)| < tol` or `(b - a) / 2 < tol`, and whose `trace` holds one
/// `(index, point, value)` record per iteration, the last of which is the
/// root itself.
///
/// # Errors
///
/// ┌ [`SolveError::InvalidBracket`]        - `a` or `b` is NaN/inf, or `a >= b`.
/// ├ [`SolveError::InvalidTolerance`]      - `tol` <= 0 or not finite.
/// ├ [`SolveError::InvalidMaxIter`]        - `max_iter` == 0.
/// ├ [`SolveError::NonFiniteEvaluation`]   - `func(x)` produced NaN or inf.
/// └ [`SolveError::MaxIterationsExceeded`] - budget exhausted without convergence.
///
/// # Warning
///
/// The sign condition at the endpoints is NOT checked. On a same-sign
/// bracket the narrowing degrades: the interval collapses onto a non-root
/// (stopping on the width criterion) or the budget runs out.
pub fn bisect<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<SolveResult, SolveError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(SolveError::InvalidBracket { a, b });
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

    let mut trace = Trace::new();
    for index in 0..max_iter {
        let c = midpoint(a, b);
        let fc = eval(c)?;
        trace.push(IterationRecord { index, point: c, value: fc });

        // convergence check first, bracket update second
        if fc.abs() < tol || (b - a) / 2.0 < tol {
            return Ok(SolveResult { root: c, trace });
        }

        // zero product narrows from the left
        if eval(a)? * fc < 0.0 {
            b = c;
        } else {
            a = c;
        }
    }

    Err(SolveError::MaxIterationsExceeded { max_iter })
}
