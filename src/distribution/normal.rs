//! Normal (Gaussian) distribution
//!
//! Draws use the Ziggurat method from `rand_distr`, scaled by `stddev` and
//! shifted by `mean`. A zero standard deviation is allowed and always yields
//! the mean.

use super::error::require_finite;
use super::{SampleError, SampleResult, Sampler};
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub(crate) const NAME: &str = "normal";

/// Normal distribution with `mean` and `stddev`
#[derive(Debug, Clone)]
pub struct NormalDistribution {
    mean: f64,
    stddev: f64,
    dist: Normal<f64>,
}

impl NormalDistribution {
    /// Create a new normal distribution
    ///
    /// Fails with `InvalidParameter` unless `mean` is finite and `stddev` is
    /// finite and `>= 0`.
    pub fn new(mean: f64, stddev: f64) -> Result<Self, SampleError> {
        Ok(Self {
            mean,
            stddev,
            dist: normal_for(NAME, mean, stddev)?,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

/// Build a `Normal` after checking parameters, attributing errors to `distribution`
pub(crate) fn normal_for(
    distribution: &'static str,
    mean: f64,
    stddev: f64,
) -> Result<Normal<f64>, SampleError> {
    require_finite(distribution, "mean", mean)?;
    require_finite(distribution, "stddev", stddev)?;
    if stddev < 0.0 {
        return Err(SampleError::invalid(
            distribution,
            format!("stddev must be >= 0, got {}", stddev),
        ));
    }

    Normal::new(mean, stddev).map_err(|e| SampleError::invalid(distribution, e.to_string()))
}

impl Sampler for NormalDistribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        Ok(SampleResult::Real(self.dist.sample(rng)))
    }
}
