//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`]: universal fields
//! ├ `tol`      : stopping tolerance on |f(x)|, half-width or step size
//! ├ `max_iter` : iteration cap
//! └ `domain`   : validity domain checked before every evaluation
//!
//! Setters generated by `impl_common_cfg!` validate eagerly.

use super::domain::Domain;


pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 1000;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tol:      f64,
    max_iter: usize,
    domain:   Domain,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
            domain   : Domain::All,
        }
    }

    // getters
    pub fn tol(&self)      -> f64    { self.tol }
    pub fn max_iter(&self) -> usize  { self.max_iter }
    pub fn domain(&self)   -> Domain { self.domain }

    // setters (internal)
    pub(crate) fn with_tol      (&mut self, v: f64)    { self.tol      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize)  { self.max_iter = v; }
    pub(crate) fn with_domain   (&mut self, v: Domain) { self.domain   = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            #[must_use]
            pub fn new() -> Self {
                Self { common: $crate::root_finding::config::CommonCfg::new() }
            }

            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
            #[must_use]
            pub fn set_domain(mut self, v: $crate::root_finding::domain::Domain) -> Self {
                self.common.with_domain(v);
                self
            }

            #[inline] #[must_use] pub fn tol(&self) -> f64 { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
            #[inline] #[must_use]
            pub fn domain(&self) -> $crate::root_finding::domain::Domain { self.common.domain() }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
