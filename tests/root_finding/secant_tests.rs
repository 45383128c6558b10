//! tests for the secant root-finding algorithm
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rootbench::root_finding::domain::Domain;
use rootbench::root_finding::errors::{Classified, ErrorKind, RootFindingError};
use rootbench::root_finding::report::{TerminationReason, ToleranceSatisfied};
use rootbench::root_finding::secant::{secant, SecantCfg, SecantError};
use std::f64::consts::FRAC_PI_2;

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert!(res.iterations > 1);
    assert_eq!(res.algorithm_name, "secant");
    Ok(())
}

#[test]
fn finds_linear_root_without_bracket() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = secant(f, 10.0, 11.0, SecantCfg::new())?;

    // exact on the first step, confirmed by the second
    assert_abs_diff_eq!(res.root, 3.0, epsilon = 1e-12);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn equal_guesses_are_a_singular_slope() {
    let f   = |x: f64| x * x - 2.0;
    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::SingularSlope { x0, x1, .. } if x0 == 1.0 && x1 == 1.0));
    assert_eq!(err.kind(), ErrorKind::SingularSecantSlope);
}

#[test]
fn flat_function_is_a_singular_slope() {
    let f   = |_x: f64| 1.0;
    let err = secant(f, 0.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::SingularSlope { .. }));
}

#[test]
fn exhaustion_returns_last_iterate() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_max_iter(1)?;
    let res = secant(f, 1.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 1);
    assert_relative_eq!(res.root, 4.0 / 3.0, epsilon = 1e-12);
    assert_eq!(res.stencil.stencil(), &[res.root, 2.0]);
    Ok(())
}

#[test]
fn rerun_on_converged_root_takes_one_iteration() -> TestResult {
    let f     = |x: f64| x.powi(3) - 2.0;
    let first = secant(f, 1.0, 1.1, SecantCfg::new())?;

    let r   = first.root;
    let res = secant(f, r, r + 1e-8, SecantCfg::new())?;
    assert_eq!(res.iterations, 1);
    assert_abs_diff_eq!(res.root, r, epsilon = 1e-9);
    Ok(())
}

#[test]
fn overflowing_step_is_not_finite() {
    // f(x0) and f(x1) differ by one ulp, so the quotient overflows
    let f   = |x: f64| if x == 0.0 { 1e300 } else { 1e300 * (1.0 + f64::EPSILON) };
    let err = secant(f, 0.0, 1e300, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::StepNotFinite { x2, .. } if x2.is_infinite()));
    assert_eq!(err.kind(), ErrorKind::NonFiniteStep);
}

#[test]
fn iterate_on_tangent_pole_is_rejected() {
    // the first step from (0, 1) lands exactly on pi/2
    let f   = |x: f64| x - FRAC_PI_2;
    let cfg = SecantCfg::new().set_domain(Domain::CosineAbove(1e-6));
    let err = secant(f, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::DomainViolation { x, .. }) if x == FRAC_PI_2));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn domain_violation_when_iterate_leaves_domain() {
    // the first step from (3, 4) lands near -0.82
    let f   = |x: f64| x.ln();
    let cfg = SecantCfg::new().set_domain(Domain::Positive);
    let err = secant(f, 3.0, 4.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::DomainViolation { x, .. }) if x < 0.0));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn non_finite_eval_without_guard() {
    let f   = |x: f64| x.ln();
    let err = secant(f, 3.0, 4.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { fx, .. }) if fx.is_nan()));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn invalid_guess() {
    let f   = |x: f64| x;
    let err = secant(f, f64::NAN, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn invalid_config() {
    let err = SecantCfg::new().set_tol(-1.0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidTolerance { got } if got == -1.0));

    let err = SecantCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn each_iterate_evaluated_once() -> TestResult {
    let mut calls = 0;
    let f = |x: f64| { calls += 1; x * x - 2.0 };
    let res = secant(f, 1.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.evaluations, res.iterations + 1);
    assert_eq!(calls, res.evaluations);
    Ok(())
}
