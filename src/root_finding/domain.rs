//! Validity domains for scalar functions.
//!
//! A [`Domain`] is checked before every function (or derivative) evaluation.
//! Points outside it fail with
//! [`RootFindingError::DomainViolation`](super::errors::RootFindingError::DomainViolation)
//! instead of feeding an undefined value into the update formula.

use std::fmt;


/// Closed set of domain predicates.
///
/// ┌ [`Domain::All`]         : every finite `x`
/// ├ [`Domain::NonZero`]     : `x != 0`
/// ├ [`Domain::Positive`]    : `x > 0`
/// ├ [`Domain::CosineAbove`] : `|cos x| > margin`, keeps clear of tangent poles
/// └ [`Domain::Custom`]      : caller-supplied predicate
#[derive(Debug, Copy, Clone, Default)]
pub enum Domain {
    #[default]
    All,
    NonZero,
    Positive,
    CosineAbove(f64),
    Custom(fn(f64) -> bool),
}

impl Domain {
    /// Returns `true` if `x` lies inside the domain.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match *self {
            Domain::All              => true,
            Domain::NonZero          => x != 0.0,
            Domain::Positive         => x > 0.0,
            Domain::CosineAbove(min) => x.cos().abs() > min,
            Domain::Custom(pred)     => pred(x),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::All              => write!(f, "all x"),
            Domain::NonZero          => write!(f, "x != 0"),
            Domain::Positive         => write!(f, "x > 0"),
            Domain::CosineAbove(min) => write!(f, "|cos x| > {min}"),
            Domain::Custom(_)        => write!(f, "custom predicate"),
        }
    }
}
