//! Uniform random distributions
//!
//! Two flavours:
//!
//! - [`UniformIntDistribution`]: integers on the closed interval `[min, max]`
//! - [`UniformRealDistribution`]: reals on the half-open interval `[min, max)`
//!
//! # Example
//!
//! ```
//! use pseudo_rand::distribution::Sampler;
//! use pseudo_rand::distribution::uniform::UniformIntDistribution;
//! use pseudo_rand::engine::fresh_engine;
//!
//! let die = UniformIntDistribution::new(1, 6).unwrap();
//! let mut rng = fresh_engine();
//!
//! for _ in 0..10 {
//!     let face = die.sample(&mut rng).unwrap().as_i64().unwrap();
//!     assert!((1..=6).contains(&face));
//! }
//! ```

use super::error::require_finite;
use super::{SampleError, SampleResult, Sampler};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::Distribution;

pub(crate) const UNIFORM_INT: &str = "uniform_int";
pub(crate) const UNIFORM_REAL: &str = "uniform_real";

/// Integer uniform distribution over `[min, max]`
#[derive(Debug, Clone)]
pub struct UniformIntDistribution {
    min: i64,
    max: i64,
    dist: Uniform<i64>,
}

impl UniformIntDistribution {
    /// Create a new integer uniform distribution
    ///
    /// Fails with `InvalidParameter` if `min > max`. `min == max` is allowed and
    /// always yields `min`.
    pub fn new(min: i64, max: i64) -> Result<Self, SampleError> {
        if min > max {
            return Err(SampleError::invalid(
                UNIFORM_INT,
                format!("min ({}) must be <= max ({})", min, max),
            ));
        }

        Ok(Self {
            min,
            max,
            dist: Uniform::new_inclusive(min, max),
        })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Sampler for UniformIntDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        Ok(SampleResult::Integer(self.dist.sample(rng)))
    }
}

/// Real uniform distribution over `[min, max)`
#[derive(Debug, Clone)]
pub struct UniformRealDistribution {
    min: f64,
    max: f64,
    /// `None` for the degenerate interval `min == max`
    dist: Option<Uniform<f64>>,
}

impl UniformRealDistribution {
    /// Create a new real uniform distribution
    ///
    /// Fails with `InvalidParameter` if either bound is not finite, if
    /// `min > max`, or if `max - min` overflows. The degenerate interval
    /// `min == max` always yields `min`.
    pub fn new(min: f64, max: f64) -> Result<Self, SampleError> {
        require_finite(UNIFORM_REAL, "min", min)?;
        require_finite(UNIFORM_REAL, "max", max)?;

        if min > max {
            return Err(SampleError::invalid(
                UNIFORM_REAL,
                format!("min ({}) must be <= max ({})", min, max),
            ));
        }

        if !(max - min).is_finite() {
            return Err(SampleError::invalid(
                UNIFORM_REAL,
                format!("range [{}, {}) is too wide", min, max),
            ));
        }

        let dist = if min < max {
            Some(Uniform::new(min, max))
        } else {
            None
        };

        Ok(Self { min, max, dist })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Sampler for UniformRealDistribution {
    #[inline(always)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        let value = match &self.dist {
            Some(dist) => dist.sample(rng),
            None => self.min,
        };
        Ok(SampleResult::Real(value))
    }
}
