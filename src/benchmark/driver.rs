//! Runs bisection, secant and Newton on each case and isolates failures
//! per (algorithm, case) pair.

use tracing::{debug, info, warn};

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::bisection::{bisection, BisectionCfg};
use crate::root_finding::errors::{Classified, RootFindingError};
use crate::root_finding::newton::{newton, NewtonCfg};
use crate::root_finding::report::RootFindingReport;
use crate::root_finding::secant::{secant, SecantCfg};

use super::cases::TestCase;
use super::record::{CaseRecord, Cell};


/// Solver settings shared by every case.
///
/// Defaults match the solvers: `tol = 1e-6`, `max_iter = 1000`.
/// The per-case [`Domain`](crate::root_finding::domain::Domain) is applied
/// in [`run_case`].
#[derive(Debug, Copy, Clone, Default)]
pub struct DriverCfg {
    bisection : BisectionCfg,
    secant    : SecantCfg,
    newton    : NewtonCfg,
}

impl DriverCfg {
    /// # Errors
    /// - [`RootFindingError::InvalidTolerance`] : `tol <= 0` or non-finite
    /// - [`RootFindingError::InvalidMaxIter`]   : `max_iter == 0`
    pub fn new(tol: f64, max_iter: usize) -> Result<Self, RootFindingError> {
        Ok(Self {
            bisection : BisectionCfg::new().set_tol(tol)?.set_max_iter(max_iter)?,
            secant    : SecantCfg::new().set_tol(tol)?.set_max_iter(max_iter)?,
            newton    : NewtonCfg::new().set_tol(tol)?.set_max_iter(max_iter)?,
        })
    }

    pub fn tol(&self) -> f64 { self.bisection.tol() }
    pub fn max_iter(&self) -> usize { self.bisection.max_iter() }
}


/// Turns a solver result into a [`Cell`], logging the failure cause.
fn settle<E: Classified>(
    key: &str,
    algorithm: Algorithm,
    result: Result<RootFindingReport, E>,
) -> Cell {
    match result {
        Ok(report) => {
            if !report.converged() {
                warn!(case = key, %algorithm, root = report.root, "iteration limit reached");
            }
            let (root, iterations) = report.estimate();
            Cell::Solved { root, iterations }
        }
        Err(err) => {
            let kind = err.kind();
            debug!(case = key, %algorithm, %kind, error = %err, "solver failed");
            Cell::Failed(kind)
        }
    }
}


/// Runs all three solvers on one case.
///
/// Never fails: each solver error is confined to its own cell.
pub fn run_case(case: &TestCase, cfg: &DriverCfg) -> CaseRecord {
    let domain = case.domain;

    let bisection_cell = match case.bracket {
        Some([a, b]) => settle(
            case.key,
            Algorithm::Bisection,
            bisection(case.func, a, b, cfg.bisection.set_domain(domain)),
        ),
        None => {
            debug!(case = case.key, "no real root, bisection skipped");
            Cell::Skipped
        }
    };

    let (x0, x1) = case.secant_points();
    let secant_cell = settle(
        case.key,
        Algorithm::Secant,
        secant(case.func, x0, x1, cfg.secant.set_domain(domain)),
    );

    let newton_cell = settle(
        case.key,
        Algorithm::Newton,
        newton(case.func, Some(case.deriv), case.guess, cfg.newton.set_domain(domain)),
    );

    CaseRecord {
        key       : case.key,
        bisection : bisection_cell,
        secant    : secant_cell,
        newton    : newton_cell,
    }
}

/// Runs every case in order, one [`CaseRecord`] each.
pub fn run(cases: &[TestCase], cfg: &DriverCfg) -> Vec<CaseRecord> {
    info!(cases = cases.len(), tol = cfg.tol(), max_iter = cfg.max_iter(), "running benchmark");

    let records: Vec<CaseRecord> = cases.iter().map(|case| run_case(case, cfg)).collect();

    let absent = records
        .iter()
        .flat_map(|r| Algorithm::ALL.map(|algorithm| r.cell(algorithm)))
        .filter(|cell| !cell.is_solved())
        .count();
    info!(absent, "benchmark finished");

    records
}
