//! Defines the [`IterationRecord`] and [`SolveResult`] types returned by all
//! root-finding algorithms.

/// One accepted iteration of a solver run.
///
/// - `index` : 0-based iteration number, incremented once per record
/// - `point` : the iterate examined this iteration
/// - `value` : the function evaluated at `point`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    pub index: usize,
    pub point: f64,
    pub value: f64,
}

/// Ordered record of all iterations performed during one solve call.
///
/// Insertion order is iteration order; `len() <= max_iter`. Owned exclusively
/// by the caller once the call returns.
pub type Trace = Vec<IterationRecord>;

/// Final result returned by all root-finding algorithms.
///
/// Invariant: `trace` is non-empty and the last record's `point` equals
/// `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub root: f64,
    pub trace: Trace,
}

impl SolveResult {
    /// Number of iterations performed.
    #[inline]
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    /// One-line result summary, e.g. `root = 1.414214 (21 iterations)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("root = {:.6} ({} iterations)", self.root, self.trace.len())
    }

    /// Renders the result as delimited text: one header line with the
    /// [`summary`](SolveResult::summary), then one `index,point,value` line
    /// per trace record, six decimal places, each line newline-terminated.
    ///
    /// Writing the text anywhere is the caller's concern.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        let mut out = String::with_capacity(32 * (self.trace.len() + 1));
        out.push_str(&self.summary());
        out.push('\n');
        for rec in &self.trace {
            out.push_str(&format!("{},{:.6},{:.6}\n", rec.index, rec.point, rec.value));
        }
        out
    }
}
