//! Benchmark harness: runs every solver against the fixed case catalog.
//!
//! [`catalog`]  : the ten literal test cases, keys `a`..`j`
//! [`run`]      : one [`CaseRecord`] per case, in catalog order
//! [`run_case`] : a single case; failures stay inside their [`Cell`]

mod cases;
mod driver;
mod record;

pub use cases::{catalog, CaseFn, SecantStart, TestCase, CASE_COUNT};
pub use driver::{run, run_case, DriverCfg};
pub use record::{CaseRecord, Cell};
