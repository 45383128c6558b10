//! Scalar root finders and the benchmark harness that runs them.
//!
//! [`root_finding`] : bisection, secant and Newton solvers
//! [`benchmark`]    : fixed ten-case catalog and per-case driver

pub mod root_finding;
pub mod benchmark;
