//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::common::eval_checked;
use super::config::{CommonCfg, impl_common_cfg};
use super::domain::Domain;
use super::errors::{Classified, ErrorKind, RootFindingError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use thiserror::Error;
use tracing::{debug, trace};

const ALGORITHM: Algorithm = Algorithm::Newton;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("singular derivative at x={x}: f'(x) == 0")]
    SingularDerivative { x: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("newton step non-finite at x={x}, f(x)={fx}, f'(x)={dfx}")]
    StepNotFinite { x: f64, fx: f64, dfx: f64 },

    #[error("finite-difference step not representable at x={x}, h={h}; \
             supply an analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 },
}

impl Classified for NewtonError {
    fn kind(&self) -> ErrorKind {
        match self {
            NewtonError::RootFinding(e)              => e.kind(),
            NewtonError::InvalidGuess { .. }
            | NewtonError::FiniteDifferenceStepUnrepresentable { .. } => ErrorKind::InvalidInput,
            NewtonError::SingularDerivative { .. }   => ErrorKind::SingularDerivative,
            NewtonError::DerivativeNotFinite { .. }  => ErrorKind::DomainViolation,
            NewtonError::StepNotFinite { .. }        => ErrorKind::NonFiniteStep,
        }
    }
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance, `max_iter` and domain.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl_common_cfg!(NewtonCfg);


/// Helpers
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : central finite-difference of `f` at `x`
///
/// `x` has already passed the domain check for `f(x)` when these run.
#[inline]
fn eval_dfx_analytic<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_fd<F>(
    f: &mut F,
    x: f64,
    domain: Domain,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> f64 {
    let h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let xp = x + h;
    let xm = x - h;
    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
    }

    let fxp = eval_checked(f, xp, domain, evals)?;
    let fxm = eval_checked(f, xm, domain, evals)?;
    let dfx = (fxp - fxm) / (xp - xm);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, `max_iter`, domain)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : `x1` from the last update, or the last `x0` on exhaustion
/// - `iterations`          : in `[1, max_iter]`
/// - `evaluations`         : total evaluations (f and f')
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : [`ToleranceSatisfied::StepSizeReached`] on convergence
/// - `stencil`             : the iterate the last step was taken from
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::SingularDerivative`]  : `f'(x) == 0` at an iterate
/// - [`NewtonError::DerivativeNotFinite`] : `f'(x)` is NaN/inf
/// - [`NewtonError::StepNotFinite`]       : `x - f(x)/f'(x)` overflowed
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`] : FD stencil collapses near `x`
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::DomainViolation`]     : an iterate left `cfg.domain`
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update: `x1 = x0 - f(x0) / f'(x0)`
/// - Stop when `|x1 - x0| < tol`, else `x0 <- x1`
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. Poor guesses or ill-behaved functions can diverge or cycle.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let tol      = cfg.tol();
    let num_iter = cfg.max_iter();
    let domain   = cfg.domain();

    let mut evals: usize = 0;

    let mut x = x0;
    for iter in 1..=num_iter {
        let fx  = eval_checked(&mut func, x, domain, &mut evals)?;
        let dfx = match dfunc.as_mut() {
            Some(df) => eval_dfx_analytic(df, x, &mut evals)?,
            None     => eval_dfx_fd(&mut func, x, domain, &mut evals)?,
        };
        if dfx == 0.0 {
            return Err(NewtonError::SingularDerivative { x });
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, fx, dfx });
        }
        trace!(algorithm = %ALGORITHM, iter, x, fx, dfx, x_next, "newton step");

        if (x_next - x).abs() < tol {
            debug!(algorithm = %ALGORITHM, root = x_next, iterations = iter, "tolerance reached");
            return Ok(RootFindingReport {
                root                : x_next,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::singleton(x), // previous iterate
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        x = x_next;
    }

    debug!(algorithm = %ALGORITHM, iterations = num_iter, "iteration limit reached");
    Ok(RootFindingReport {
        root                : x,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        stencil             : Stencil::singleton(x),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
