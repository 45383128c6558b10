//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Reasons a root-finding algorithm may terminate.
///
/// [`TerminationReason::IterationLimit`] is a degraded success, not an
/// error: the report still carries the last estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - bisection
///     - |f(c)| < tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - (b - a) / 2 < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - secant, newton
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods, alongside [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Points the final estimate was formed from.
/// - [`Stencil::Bracket`] : bisection, `[a, b]` the midpoint was taken from
/// - [`Stencil::Open`]    : open methods, previous iterate(s) used in the update
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `iterations`          : iterations performed, always in `[1, max_iter]`
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : points used to form the final estimate
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// `(root, iterations)` pair.
    #[inline]
    pub fn estimate(&self) -> (f64, usize) {
        (self.root, self.iterations)
    }

    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
