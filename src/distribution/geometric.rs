//! Geometric distribution
//!
//! Counts the failures before the first success in a sequence of Bernoulli
//! trials with success probability `p`. The mean is `(1 - p) / p`, so the
//! parameter is often chosen as the reciprocal of an expected count.

use super::error::require_finite;
use super::{SampleError, SampleResult, Sampler};
use rand::Rng;
use rand_distr::{Distribution, Geometric};

pub(crate) const NAME: &str = "geometric";

/// Geometric distribution over `{0, 1, 2, ...}`
#[derive(Debug, Clone)]
pub struct GeometricDistribution {
    p: f64,
    dist: Geometric,
}

impl GeometricDistribution {
    /// Create a new geometric distribution
    ///
    /// Fails with `InvalidParameter` unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self, SampleError> {
        require_finite(NAME, "p", p)?;
        if !(p > 0.0 && p <= 1.0) {
            return Err(SampleError::invalid(
                NAME,
                format!("p must be in (0, 1], got {}", p),
            ));
        }

        let dist = Geometric::new(p).map_err(|e| SampleError::invalid(NAME, e.to_string()))?;
        Ok(Self { p, dist })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Sampler for GeometricDistribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        Ok(SampleResult::Count(self.dist.sample(rng)))
    }
}
