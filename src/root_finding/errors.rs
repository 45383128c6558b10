//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ evaluation outside the function domain
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (tolerance, max_iter)
//! │
//! └ [`ErrorKind`]        : coarse classification shared by every solver error
//!
//! Each solver wraps [`RootFindingError`] in its own error enum
//! (e.g. [`BisectionError`](super::bisection::BisectionError)) and reports
//! its [`ErrorKind`] through [`Classified::kind`].


use thiserror::Error;
use super::domain::Domain;


/// Failure classes a solver call can end in.
///
/// ┌ [`ErrorKind::PreconditionViolation`] : bisection bracket has no sign change
/// ├ [`ErrorKind::DomainViolation`]       : function undefined at an evaluation point
/// ├ [`ErrorKind::SingularSecantSlope`]   : `f(x1) == f(x0)` in the secant update
/// ├ [`ErrorKind::SingularDerivative`]    : `f'(x) == 0` in the Newton update
/// ├ [`ErrorKind::NonFiniteStep`]         : update produced inf/NaN
/// └ [`ErrorKind::InvalidInput`]          : bad bounds, guesses or config
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    PreconditionViolation,
    DomainViolation,
    SingularSecantSlope,
    SingularDerivative,
    NonFiniteStep,
    InvalidInput,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::PreconditionViolation => "precondition_violation",
            ErrorKind::DomainViolation       => "domain_violation",
            ErrorKind::SingularSecantSlope   => "singular_secant_slope",
            ErrorKind::SingularDerivative    => "singular_derivative",
            ErrorKind::NonFiniteStep         => "non_finite_step",
            ErrorKind::InvalidInput          => "invalid_input",
        }
    }
}
impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}


/// Implemented by every solver error so callers can degrade a failure
/// to its [`ErrorKind`] without matching each variant.
pub trait Classified: std::error::Error {
    fn kind(&self) -> ErrorKind;
}


/// Root-finding runtime errors.
///
/// ┌ Evaluation point outside the function's [`Domain`]
/// ├ Non-finite function evaluation
/// └ Invalid global configuration (`tol <= 0`, `max_iter < 1`)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("x={x} lies outside the function domain ({domain})")]
    DomainViolation { x: f64, domain: Domain },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}

impl Classified for RootFindingError {
    fn kind(&self) -> ErrorKind {
        match self {
            RootFindingError::DomainViolation { .. }
            | RootFindingError::NonFiniteEvaluation { .. } => ErrorKind::DomainViolation,
            RootFindingError::InvalidTolerance { .. }
            | RootFindingError::InvalidMaxIter { .. }      => ErrorKind::InvalidInput,
        }
    }
}
