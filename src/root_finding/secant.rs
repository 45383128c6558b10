use super::algorithms::Algorithm;
use super::common::eval_checked;
use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{Classified, ErrorKind, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use thiserror::Error;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::Secant;


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0 and x1 must be finite. got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("singular secant slope: f(x0) == f(x1) = {fx} at x0={x0}, x1={x1}")]
    SingularSlope { x0: f64, x1: f64, fx: f64 },

    #[error("secant step non-finite from x0={x0}, x1={x1}; got x2={x2}")]
    StepNotFinite { x0: f64, x1: f64, x2: f64 },
}

impl Classified for SecantError {
    fn kind(&self) -> ErrorKind {
        match self {
            SecantError::RootFinding(e)       => e.kind(),
            SecantError::InvalidGuess { .. }  => ErrorKind::InvalidInput,
            SecantError::SingularSlope { .. } => ErrorKind::SingularSecantSlope,
            SecantError::StepNotFinite { .. } => ErrorKind::NonFiniteStep,
        }
    }
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, `max_iter` and domain.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl_common_cfg!(SecantCfg);


/// x-intercept of the line through `(x0, fx0)` and `(x1, fx1)`.
///
/// # Returns
/// - `Ok(x2)` with `x2 = x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
/// - `Err(SingularSlope)` if `fx1 == fx0`
/// - `Err(StepNotFinite)` if the quotient overflows
#[inline]
fn secant_step(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return Err(SecantError::SingularSlope { x0, x1, fx: fx1 });
    }

    let x2 = x1 - fx1 * (x1 - x0) / denom;
    if !x2.is_finite() {
        return Err(SecantError::StepNotFinite { x0, x1, x2 });
    }

    Ok(x2)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess. Must be finite
/// - `x1`   : Second initial guess. Must be finite; no bracket requirement
/// - `cfg`  : [`SecantCfg`] (tolerance, `max_iter`, domain)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : `x2` from the last update, or the last `x1` on exhaustion
/// - `iterations`          : in `[1, max_iter]`
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : [`ToleranceSatisfied::StepSizeReached`] on convergence
/// - `stencil`             : the pair `{x1, x0}` that formed the last step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]  : `x0` or `x1` is NaN/inf
/// - [`SecantError::SingularSlope`] : `f(x1) == f(x0)`, which includes `x0 == x1`
/// - [`SecantError::StepNotFinite`] : the update overflowed
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::DomainViolation`]     : an iterate left `cfg.domain`
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update: `x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))`
/// - Stop when `|x2 - x1| < tol`, else shift `(x0, x1) <- (x1, x2)`
/// - Each iterate is evaluated once; `f(x0)` is carried across the shift.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F> (
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let tol      = cfg.tol();
    let num_iter = cfg.max_iter();
    let domain   = cfg.domain();

    let mut evals = 0;

    let mut x_prev = x0;
    let mut f_prev = eval_checked(&mut func, x_prev, domain, &mut evals)?;
    let mut x_curr = x1;

    for iter in 1..=num_iter {
        let f_curr = eval_checked(&mut func, x_curr, domain, &mut evals)?;
        let x_next = secant_step((x_prev, f_prev), (x_curr, f_curr))?;
        trace!(algorithm = %ALGORITHM, iter, x_prev, x_curr, x_next, "secant step");

        if (x_next - x_curr).abs() < tol {
            debug!(algorithm = %ALGORITHM, root = x_next, iterations = iter, "tolerance reached");
            return Ok(RootFindingReport {
                root                : x_next,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::doubleton(x_curr, x_prev),
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
    }

    debug!(algorithm = %ALGORITHM, iterations = num_iter, "iteration limit reached");
    Ok(RootFindingReport {
        root                : x_curr,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::doubleton(x_curr, x_prev),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
