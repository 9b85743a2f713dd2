//! tests for the bisection root-finding algorithm
use raiz::root_finding::bisection::bisect;
use raiz::root_finding::errors::SolveError;

type TestResult = Result<(), SolveError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisect(f, 0.0, 2.0, 1e-6, 100)?;

    assert!((res.root - 1.41421356).abs() < 1e-6);
    assert!(res.trace.len() <= 100);
    Ok(())
}

#[test]
fn finds_linear_root() -> TestResult {
    let res = bisect(|x: f64| x + 5.0, -10.0, 0.0, 1e-10, 100)?;

    assert!((res.root + 5.0).abs() <= 1e-9);
    Ok(())
}

#[test]
fn trace_indices_increase_from_zero() -> TestResult {
    let res = bisect(|x: f64| x * x - 2.0, 0.0, 2.0, 1e-6, 100)?;

    assert_eq!(res.trace[0].index, 0);
    for (i, rec) in res.trace.iter().enumerate() {
        assert_eq!(rec.index, i);
    }
    Ok(())
}

#[test]
fn last_record_is_root() -> TestResult {
    let res = bisect(|x: f64| x * x - 2.0, 0.0, 2.0, 1e-6, 100)?;
    let last = res.trace.last().unwrap();

    assert_eq!(last.point, res.root);
    Ok(())
}

#[test]
fn record_value_is_function_at_point() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisect(f, 0.0, 2.0, 1e-6, 100)?;

    for rec in &res.trace {
        assert_eq!(rec.value, f(rec.point));
    }
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let first = bisect(f, 0.0, 2.0, 1e-6, 100)?;
    let second = bisect(f, 0.0, 2.0, 1e-6, 100)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn width_tolerance_stops_narrow_bracket() -> TestResult {
    // f(c) stays far from zero; only the half-width criterion can trigger
    let res = bisect(|x: f64| x + 10.0, -1e-8, 1e-8, 1e-6, 100)?;

    assert_eq!(res.trace.len(), 1);
    Ok(())
}

#[test]
fn zero_product_narrows_from_the_left() -> TestResult {
    // f(a) == 0 at the initial left endpoint: the tie-break keeps `a`
    // narrowing, steering the bracket onto the root at 2
    let res = bisect(|x: f64| x * (x - 2.0), 0.0, 3.0, 1e-6, 100)?;

    assert!((res.root - 2.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn invalid_bracket_rejected() {
    let err = bisect(|x: f64| x, 2.0, 0.0, 1e-6, 100).unwrap_err();

    assert!(matches!(err, SolveError::InvalidBracket { a, b } if a == 2.0 && b == 0.0));
}

#[test]
fn identical_bounds_rejected() {
    let err = bisect(|x: f64| x, 1.0, 1.0, 1e-6, 100).unwrap_err();

    assert!(matches!(err, SolveError::InvalidBracket { .. }));
}

#[test]
fn max_iter_exhaustion_is_an_error() {
    let err = bisect(|x: f64| x * x - 2.0, 0.0, 2.0, 1e-12, 1).unwrap_err();

    assert!(matches!(err, SolveError::MaxIterationsExceeded { max_iter: 1 }));
}

#[test]
fn same_sign_bracket_runs_out_of_iterations() {
    // no sign change and a tolerance too tight for the width criterion
    let err = bisect(|x: f64| x * x + 1.0, -1.0, 1.0, 1e-12, 20).unwrap_err();

    assert!(matches!(err, SolveError::MaxIterationsExceeded { max_iter: 20 }));
}

#[test]
fn same_sign_bracket_may_stop_on_width_at_a_non_root() -> TestResult {
    // documented degradation: the interval collapses silently
    let res = bisect(|x: f64| x * x + 1.0, -1.0, 1.0, 1e-6, 100)?;

    assert!(res.trace.last().unwrap().value.abs() >= 1.0);
    Ok(())
}

#[test]
fn non_finite_evaluation_propagates() {
    let f = |x: f64| x.sqrt() - 2.0;
    let err = bisect(f, -1.0, 5.0, 1e-6, 100).unwrap_err();

    assert!(matches!(
        err,
        SolveError::NonFiniteEvaluation { x, fx }
        if x == -1.0 && fx.is_nan()
    ));
}

#[test]
fn invalid_tolerance_rejected() {
    let err = bisect(|x: f64| x, 0.0, 1.0, 0.0, 100).unwrap_err();

    assert!(matches!(err, SolveError::InvalidTolerance { got } if got == 0.0));
}

#[test]
fn invalid_max_iter_rejected() {
    let err = bisect(|x: f64| x, 0.0, 1.0, 1e-6, 0).unwrap_err();

    assert!(matches!(err, SolveError::InvalidMaxIter { got: 0 }));
}
