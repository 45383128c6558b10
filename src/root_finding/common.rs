//! Evaluation helpers shared by all solvers.

use super::domain::Domain;
use super::errors::RootFindingError;


/// Evaluates `f(x)` after a domain check, counting the evaluation.
///
/// # Returns
/// ├ `Ok(f(x))` if `x` is inside `domain` and `f(x)` is finite
/// ├ `Err(DomainViolation)` if `domain` rejects `x` (f is not called)
/// └ `Err(NonFiniteEvaluation)` if `f(x)` is NaN/inf
#[inline]
pub(crate) fn eval_checked<F>(
    f: &mut F,
    x: f64,
    domain: Domain,
    evals: &mut usize,
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 {
    if !domain.contains(x) {
        return Err(RootFindingError::DomainViolation { x, domain });
    }

    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
