//! Exponential distribution
//!
//! Interarrival times of a Poisson process with rate `lambda`. The mean is
//! `1 / lambda`.

use super::error::require_positive;
use super::{SampleError, SampleResult, Sampler};
use rand::Rng;
use rand_distr::{Distribution, Exp};

pub(crate) const NAME: &str = "exponential";

/// Smallest accepted rate
///
/// Draws are `Exp1 / rate` and `Exp1` stays well below 1024, so any rate at
/// or above this bound keeps every draw finite.
pub const MIN_RATE: f64 = 1024.0 / f64::MAX;

/// Exponential distribution over `[0, inf)`
#[derive(Debug, Clone)]
pub struct ExponentialDistribution {
    lambda: f64,
    dist: Exp<f64>,
}

impl ExponentialDistribution {
    /// Create a new exponential distribution
    ///
    /// Fails with `InvalidParameter` unless `lambda` is finite and at least
    /// [`MIN_RATE`].
    pub fn new(lambda: f64) -> Result<Self, SampleError> {
        Ok(Self {
            lambda,
            dist: exp_for(NAME, "lambda", lambda)?,
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draw a raw `f64`, used by composite samplers
    #[inline]
    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

/// Build an `Exp` after checking the rate, attributing errors to `distribution`
pub(crate) fn exp_for(
    distribution: &'static str,
    name: &str,
    rate: f64,
) -> Result<Exp<f64>, SampleError> {
    require_positive(distribution, name, rate)?;
    if rate < MIN_RATE {
        return Err(SampleError::invalid(
            distribution,
            format!("{} must be >= {:e}, got {:e}", name, MIN_RATE, rate),
        ));
    }
    Exp::new(rate).map_err(|e| SampleError::invalid(distribution, e.to_string()))
}

impl Sampler for ExponentialDistribution {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        Ok(SampleResult::Real(self.draw(rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::seeded_engine;

    #[test]
    fn test_exponential_invalid() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ExponentialDistribution::new(lambda).unwrap_err();
            assert!(err.is_invalid_parameter(), "lambda={} should be rejected", lambda);
        }
    }

    #[test]
    fn test_exponential_tiny_rate() {
        for lambda in [5e-324, 1e-308, MIN_RATE / 2.0] {
            let err = ExponentialDistribution::new(lambda).unwrap_err();
            assert!(err.is_invalid_parameter(), "lambda={:e} should be rejected", lambda);
        }

        let dist = ExponentialDistribution::new(MIN_RATE).unwrap();
        let mut rng = seeded_engine(17);
        for _ in 0..10_000 {
            assert!(dist.sample(&mut rng).unwrap().is_finite());
        }
    }

    #[test]
    fn test_exponential_non_negative() {
        let dist = ExponentialDistribution::new(3.0).unwrap();
        let mut rng = seeded_engine(9);
        for _ in 0..10_000 {
            let v = dist.sample(&mut rng).unwrap().as_f64();
            assert!(v >= 0.0 && v.is_finite());
        }
    }

    #[test]
    fn test_exponential_mean() {
        let lambda = 2.0;
        let dist = ExponentialDistribution::new(lambda).unwrap();
        let mut rng = seeded_engine(42);
        let n = 100_000;

        let total: f64 = (0..n)
            .map(|_| dist.sample(&mut rng).unwrap().as_f64())
            .sum();
        let mean = total / n as f64;
        let expected = 1.0 / lambda;

        assert!(
            (mean - expected).abs() < expected * 0.05,
            "mean {} not within 5% of {}",
            mean,
            expected
        );
    }
}
