// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod domain;
pub(crate) mod config;
pub(crate) mod common;

// algorithms
pub mod bisection;
pub mod secant;
pub mod newton;

pub use config::{DEFAULT_MAX_ITER, DEFAULT_TOL};
