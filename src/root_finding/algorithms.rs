//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the supported methods
//! in the order the benchmark reports them.


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] is the only bracketing method
/// - [`Algorithm::Secant`] and [`Algorithm::Newton`] are open methods
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    Secant,
    Newton,
}

impl Algorithm {
    /// Report column order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bisection, Algorithm::Secant, Algorithm::Newton];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Secant    => "secant",
            Algorithm::Newton    => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
