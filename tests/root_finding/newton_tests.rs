use approx::{assert_abs_diff_eq, assert_relative_eq};
use rootbench::root_finding::domain::Domain;
use rootbench::root_finding::errors::{Classified, ErrorKind, RootFindingError};
use rootbench::root_finding::newton::{newton, NewtonCfg, NewtonError};
use rootbench::root_finding::report::{TerminationReason, ToleranceSatisfied};
use std::f64::consts::FRAC_PI_2;

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_cube_root_of_2() -> TestResult {
    let f  = |x: f64| x.powi(3) - 2.0;
    let df = |x: f64| 3.0 * x * x;

    let res = newton(f, Some(df), 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 1.259921, epsilon = 1e-6);
    assert!(res.iterations < 10);
    assert_eq!(res.algorithm_name, "newton");
    Ok(())
}

#[test]
fn finds_sqrt_2_with_fd_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = newton(f, None::<fn(f64) -> f64>, 1.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn zero_derivative_is_singular() {
    let f   = |x: f64| x * x + 1.0;
    let df  = |x: f64| 2.0 * x;
    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::SingularDerivative { x } if x == 0.0));
    assert_eq!(err.kind(), ErrorKind::SingularDerivative);
}

#[test]
fn exhaustion_returns_last_iterate() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_iter(2)?;
    let res = newton(f, Some(df), 1.0, cfg)?;

    // 1 -> 1.5 -> 17/12
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 2);
    assert_relative_eq!(res.root, 17.0 / 12.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn rerun_on_converged_root_takes_one_iteration() -> TestResult {
    let f  = |x: f64| x.powi(3) - 2.0;
    let df = |x: f64| 3.0 * x * x;

    let first = newton(f, Some(df), 1.0, NewtonCfg::new())?;
    let again = newton(f, Some(df), first.root, NewtonCfg::new())?;

    assert_eq!(again.iterations, 1);
    assert_abs_diff_eq!(again.root, first.root, epsilon = 1e-12);
    Ok(())
}

#[test]
fn domain_violation_when_iterate_leaves_domain() {
    // 3 - 3 ln 3 < 0
    let f   = |x: f64| x.ln();
    let df  = |x: f64| 1.0 / x;
    let cfg = NewtonCfg::new().set_domain(Domain::Positive);
    let err = newton(f, Some(df), 3.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::DomainViolation { x, .. }) if x < 0.0));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn fd_stencil_checked_against_domain() {
    // x - h falls below zero even though x itself is positive
    let f   = |x: f64| x.ln() - 1e-9;
    let cfg = NewtonCfg::new().set_domain(Domain::Positive);
    let err = newton(f, None::<fn(f64) -> f64>, 1e-300, cfg).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::DomainViolation { x, .. }) if x < 0.0));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn fd_stencil_unrepresentable_near_max() {
    let f   = |x: f64| x - 1.0;
    let err = newton(f, None::<fn(f64) -> f64>, f64::MAX, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::FiniteDifferenceStepUnrepresentable { x, .. } if x == f64::MAX));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn iterate_on_tangent_pole_is_rejected() {
    let f   = |x: f64| x - FRAC_PI_2;
    let df  = |_x: f64| 1.0;
    let cfg = NewtonCfg::new().set_domain(Domain::CosineAbove(1e-6));
    let err = newton(f, Some(df), 0.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::DomainViolation { x, .. }) if x == FRAC_PI_2));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn non_finite_derivative() {
    let f   = |x: f64| x - 1.0;
    let df  = |_x: f64| f64::INFINITY;
    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { .. }));
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}

#[test]
fn tiny_derivative_overflows_step() {
    let f   = |_x: f64| 1e300;
    let df  = |_x: f64| 1e-300;
    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::StepNotFinite { .. }));
    assert_eq!(err.kind(), ErrorKind::NonFiniteStep);
}

#[test]
fn invalid_guess() {
    let f   = |x: f64| x;
    let err = newton(f, None::<fn(f64) -> f64>, f64::INFINITY, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn counts_f_and_df_evaluations() -> TestResult {
    let f  = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;
    let res = newton(f, Some(df), 10.0, NewtonCfg::new())?;

    // exact on the first step, confirmed by the second
    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.evaluations, 4);
    assert_eq!(res.stencil.stencil(), &[3.0]);
    Ok(())
}
