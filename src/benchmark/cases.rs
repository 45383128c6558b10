//! The literal benchmark catalog.
//!
//! Every case carries a fixed bracket (or none when the function has no real
//! root) and a [`SecantStart`] policy for the second secant point.

use crate::root_finding::domain::Domain;


pub type CaseFn = fn(f64) -> f64;

pub const CASE_COUNT: usize = 10;

/// How the second secant point is derived from the initial guess.
/// - [`SecantStart::Offset`] : `guess + h`
/// - [`SecantStart::Scale`]  : `guess * k`, stays on the same side of zero
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SecantStart {
    Offset(f64),
    Scale(f64),
}

impl SecantStart {
    #[inline]
    pub fn second_point(self, guess: f64) -> f64 {
        match self {
            SecantStart::Offset(h) => guess + h,
            SecantStart::Scale(k)  => guess * k,
        }
    }
}

/// One benchmark function with everything the three solvers need.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    pub key          : &'static str,
    pub func         : CaseFn,
    pub deriv        : CaseFn,
    pub guess        : f64,
    /// `None` marks a function with no real root; bisection is skipped.
    pub bracket      : Option<[f64; 2]>,
    pub domain       : Domain,
    pub secant_start : SecantStart,
}

impl TestCase {
    /// `(x0, x1)` starting pair for the secant method.
    pub fn secant_points(&self) -> (f64, f64) {
        (self.guess, self.secant_start.second_point(self.guess))
    }
}

const NUDGE: SecantStart  = SecantStart::Offset(0.1);
const SHRINK: SecantStart = SecantStart::Scale(0.9);

/// The ten benchmark cases in report order.
pub fn catalog() -> [TestCase; CASE_COUNT] {
    [
        TestCase {
            key: "a",
            func: |x| 1.0 - 2.0 * x * (-x / 2.0).exp(),
            deriv: |x| -2.0 * (-x / 2.0).exp() + x * (-x / 2.0).exp(),
            guess: 0.0,
            bracket: Some([0.0, 2.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "b",
            func: |x| 5.0 - 1.0 / x,
            deriv: |x| 1.0 / x.powi(2),
            guess: 0.25,
            bracket: Some([0.1, 1.0]),
            domain: Domain::NonZero,
            secant_start: SHRINK,
        },
        TestCase {
            key: "c",
            func: |x| x.powi(3) - 2.0 * x - 5.0,
            deriv: |x| 3.0 * x.powi(2) - 2.0,
            guess: 2.0,
            bracket: Some([2.0, 3.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "d",
            func: |x| x.exp() - 2.0,
            deriv: |x| x.exp(),
            guess: 1.0,
            bracket: Some([0.0, 1.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "e",
            func: |x| x - (-x).exp(),
            deriv: |x| 1.0 + (-x).exp(),
            guess: 1.0,
            bracket: Some([0.0, 1.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "f",
            func: |x| x.powi(6) - x - 1.0,
            deriv: |x| 6.0 * x.powi(5) - 1.0,
            guess: 1.0,
            bracket: Some([1.0, 2.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "g",
            func: |x| x.powi(2) - x.sin(),
            deriv: |x| 2.0 * x - x.cos(),
            guess: 0.5,
            bracket: Some([0.5, 1.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "h",
            func: |x| x.powi(3) - 2.0,
            deriv: |x| 3.0 * x.powi(2),
            guess: 1.0,
            bracket: Some([1.0, 2.0]),
            domain: Domain::All,
            secant_start: NUDGE,
        },
        TestCase {
            key: "i",
            func: |x| x + x.tan(),
            deriv: |x| 1.0 + 1.0 / x.cos().powi(2),
            guess: 3.0,
            // (pi/2, pi) holds the root and no pole
            bracket: Some([2.0, 3.0]),
            domain: Domain::CosineAbove(1e-6),
            secant_start: NUDGE,
        },
        TestCase {
            key: "j",
            func: |x| 2.0 - x.ln() / x,
            deriv: |x| -(1.0 - x.ln()) / x.powi(2),
            guess: 1.0 / 3.0,
            // ln(x)/x <= 1/e, so f > 0 on the whole domain
            bracket: None,
            domain: Domain::Positive,
            secant_start: SHRINK,
        },
    ]
}
