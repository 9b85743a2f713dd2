//! Iterative root-finding for scalar real functions.
//!
//! `raiz` locates a zero of a caller-supplied `f: f64 -> f64` using one of
//! three classic methods (bisection, Newton-Raphson, secant) and returns the
//! approximate root together with the full iteration trace, one record per
//! accepted iteration.
//!
//! ```
//! use raiz::root_finding::bisection::bisect;
//!
//! let res = bisect(|x| x * x - 2.0, 0.0, 2.0, 1e-6, 100).unwrap();
//! assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-6);
//! ```
//!
//! Parsing textual expressions into callables and rendering results belong to
//! the caller; every solve call is independent and holds no state.

pub mod root_finding;
