//! One output row per benchmark case.

use std::fmt;

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::errors::ErrorKind;


/// Outcome of one (algorithm, case) pair.
/// - [`Cell::Solved`]  : converged or exhausted, both carry an estimate
/// - [`Cell::Failed`]  : solver error, degraded to its [`ErrorKind`]
/// - [`Cell::Skipped`] : bisection on a case without a bracket
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Cell {
    Solved { root: f64, iterations: usize },
    Failed(ErrorKind),
    Skipped,
}

impl Cell {
    /// `(root, iterations)` if the cell holds an estimate.
    pub fn estimate(&self) -> Option<(f64, usize)> {
        match *self {
            Cell::Solved { root, iterations } => Some((root, iterations)),
            Cell::Failed(_) | Cell::Skipped   => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Cell::Solved { .. })
    }
}

/// Absent cells print as `None None`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Solved { root, iterations } => write!(f, "{root:?} {iterations}"),
            Cell::Failed(_) | Cell::Skipped   => write!(f, "None None"),
        }
    }
}


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CaseRecord {
    pub key       : &'static str,
    pub bisection : Cell,
    pub secant    : Cell,
    pub newton    : Cell,
}

impl CaseRecord {
    pub fn cell(&self, algorithm: Algorithm) -> Cell {
        match algorithm {
            Algorithm::Bisection => self.bisection,
            Algorithm::Secant    => self.secant,
            Algorithm::Newton    => self.newton,
        }
    }
}

/// `key bis_root bis_iters sec_root sec_iters newton_root newton_iters`
impl fmt::Display for CaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.key, self.bisection, self.secant, self.newton)
    }
}
