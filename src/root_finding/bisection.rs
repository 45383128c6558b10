use super::algorithms::Algorithm;
use super::common::eval_checked;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{Classified, ErrorKind, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use thiserror::Error;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}, f(a) * f(b) >= 0")]
    NoSignChange  { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

impl Classified for BisectionError {
    fn kind(&self) -> ErrorKind {
        match self {
            BisectionError::RootFinding(e)       => e.kind(),
            BisectionError::NoSignChange { .. }  => ErrorKind::PreconditionViolation,
            BisectionError::InvalidBounds { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ tol      = 1e-6
/// ├ max_iter = 1000
/// └ domain   = [`Domain::All`](super::domain::Domain::All)
///
/// # Validation
/// └ `set_tol` / `set_max_iter` reject `tol <= 0`, non-finite `tol` and
///   `max_iter == 0`, so [`bisection`] never re-validates.
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl_common_cfg!(BisectionCfg);

/// Midpoint of [a, b]
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// `func(a)` and `func(b)` must have opposite signs. The order of `a` and `b`
/// is not enforced; with `a > b` the half-width is negative and the first
/// midpoint is returned.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite.
/// └ `cfg`  - [`BisectionCfg`] (tolerance, iteration cap, domain)
///
/// # Behavior
///
/// Each iteration takes `c = (a + b) / 2` and stops with `(c, iter)` as soon
/// as **either** `|f(c)| < tol` **or** `(b - a) / 2 < tol`. Otherwise the
/// bracket keeps the half where `f(a) * f(c) < 0`; a zero product moves `a`.
/// If the cap is hit, the midpoint of the final bracket is returned with
/// `iterations = max_iter` and [`TerminationReason::IterationLimit`].
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf.
/// ├ [`BisectionError::NoSignChange`]  - `f(a) * f(b) >= 0`, including an exact
/// │                                     root at an endpoint.
/// │
/// The following are propagated via [`BisectionError::RootFinding`]
/// ├ [`RootFindingError::DomainViolation`]     - an evaluation point is outside `cfg.domain`.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol      = cfg.tol();
    let num_iter = cfg.max_iter();
    let domain   = cfg.domain();

    // number of function evaluations
    let mut evals = 0;

    let mut fa = eval_checked(&mut func, a, domain, &mut evals)?;
    let fb     = eval_checked(&mut func, b, domain, &mut evals)?;
    if fa * fb >= 0.0 {
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    for iter in 1..=num_iter {
        let c  = midpoint(a, b);
        let fc = eval_checked(&mut func, c, domain, &mut evals)?;
        let half_width = (b - a) / 2.0;
        trace!(algorithm = %ALGORITHM, iter, a, b, c, fc, "bisection step");

        let abs_fx_reached = fc.abs() < tol;
        if abs_fx_reached || half_width < tol {
            let tolerance_satisfied = if abs_fx_reached {
                ToleranceSatisfied::AbsFxReached
            } else {
                ToleranceSatisfied::WidthTolReached
            };
            debug!(algorithm = %ALGORITHM, root = c, iterations = iter, "tolerance reached");
            return Ok(RootFindingReport {
                root                : c,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied,
                stencil             : Stencil::bracket(a, b),
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        // shrink interval
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    debug!(algorithm = %ALGORITHM, iterations = num_iter, "iteration limit reached");
    Ok(RootFindingReport {
        root                : midpoint(a, b),
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
