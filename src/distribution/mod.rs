//! Random distribution implementations
//!
//! This module provides the distributions the sampler core can draw from. Each
//! distribution validates its parameters once, at construction, and then draws
//! from any engine implementing [`rand::Rng`].
//!
//! # Distributions
//!
//! - **UniformInt**: integer uniform on the closed interval `[min, max]`
//! - **UniformReal**: real uniform on the half-open interval `[min, max)`
//! - **Geometric**: failures before the first success, success probability `p`
//! - **Exponential**: interarrival time with rate `lambda`
//! - **Normal**: Gaussian with `mean` and `stddev`
//! - **ProactiveExpNormal**: composite exponential/normal draw, see [`proactive`]
//!
//! # Requests
//!
//! Callers describe a draw with a [`DistributionRequest`]. The request is a
//! closed tagged enum so that parameter validation and dispatch live here rather
//! than in whatever front end built the request.
//!
//! # Example
//!
//! ```
//! use pseudo_rand::distribution::{DistributionRequest, Sampler};
//! use pseudo_rand::engine::seeded_engine;
//!
//! let request = DistributionRequest::UniformInt { min: 1, max: 6 };
//! let sampler = request.build(Default::default()).unwrap();
//!
//! let mut rng = seeded_engine(42);
//! let roll = sampler.sample(&mut rng).unwrap().as_i64().unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

pub mod error;
pub mod exponential;
pub mod geometric;
pub mod normal;
pub mod proactive;
pub mod uniform;

pub use error::SampleError;
pub use proactive::{NonPositivePolicy, ProactiveOptions};

use exponential::ExponentialDistribution;
use geometric::GeometricDistribution;
use normal::NormalDistribution;
use proactive::ProactiveExpNormalDistribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uniform::{UniformIntDistribution, UniformRealDistribution};

/// Sampler trait for a single draw
///
/// Implementations hold already-validated parameters, so a draw can only fail
/// for reasons that depend on the random values themselves (see
/// [`NonPositivePolicy`]).
///
/// # Thread Safety
///
/// Samplers must be `Send`. They hold no engine of their own; the caller lends
/// one per draw, which keeps engine ownership confined to the calling thread.
pub trait Sampler: Send {
    /// Draw one sample from `rng`
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError>;
}

/// A single drawn value
///
/// Serialized untagged so JSON output carries plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleResult {
    /// Signed integer (uniform integer draws)
    Integer(i64),
    /// Non-negative count (geometric draws)
    Count(u64),
    /// Real number
    Real(f64),
}

impl SampleResult {
    /// Value as `f64` (lossy for integers beyond 2^53)
    pub fn as_f64(&self) -> f64 {
        match *self {
            SampleResult::Integer(v) => v as f64,
            SampleResult::Count(v) => v as f64,
            SampleResult::Real(v) => v,
        }
    }

    /// Value as `i64` when the sample is integral and fits
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            SampleResult::Integer(v) => Some(v),
            SampleResult::Count(v) => i64::try_from(v).ok(),
            SampleResult::Real(_) => None,
        }
    }

    /// True for integer and count results
    pub fn is_integral(&self) -> bool {
        !matches!(self, SampleResult::Real(_))
    }

    /// True unless the value is a non-finite real
    pub fn is_finite(&self) -> bool {
        match *self {
            SampleResult::Real(v) => v.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for SampleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleResult::Integer(v) => write!(f, "{}", v),
            SampleResult::Count(v) => write!(f, "{}", v),
            SampleResult::Real(v) => write!(f, "{}", v),
        }
    }
}

/// Distribution kind plus its parameters
///
/// In TOML the variant is selected by a `kind` key:
///
/// ```toml
/// [distribution]
/// kind = "normal"
/// mean = 0.0
/// stddev = 1.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionRequest {
    UniformInt { min: i64, max: i64 },
    UniformReal { min: f64, max: f64 },
    Geometric { p: f64 },
    Exponential { lambda: f64 },
    Normal { mean: f64, stddev: f64 },
    ProactiveExpNormal { mean_rate: f64, stddev_rate: f64 },
}

impl DistributionRequest {
    /// Short kind name, used in errors and logs
    pub fn name(&self) -> &'static str {
        match self {
            DistributionRequest::UniformInt { .. } => uniform::UNIFORM_INT,
            DistributionRequest::UniformReal { .. } => uniform::UNIFORM_REAL,
            DistributionRequest::Geometric { .. } => geometric::NAME,
            DistributionRequest::Exponential { .. } => exponential::NAME,
            DistributionRequest::Normal { .. } => normal::NAME,
            DistributionRequest::ProactiveExpNormal { .. } => proactive::NAME,
        }
    }

    /// True when this kind yields integer results
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            DistributionRequest::UniformInt { .. } | DistributionRequest::Geometric { .. }
        )
    }

    /// Check parameters against the distribution's domain
    pub fn validate(&self) -> Result<(), SampleError> {
        self.build(ProactiveOptions::default()).map(|_| ())
    }

    /// Validate parameters and build the concrete sampler
    ///
    /// `options` only affects [`DistributionRequest::ProactiveExpNormal`].
    pub fn build(&self, options: ProactiveOptions) -> Result<DistributionSampler, SampleError> {
        let sampler = match *self {
            DistributionRequest::UniformInt { min, max } => {
                DistributionSampler::UniformInt(UniformIntDistribution::new(min, max)?)
            }
            DistributionRequest::UniformReal { min, max } => {
                DistributionSampler::UniformReal(UniformRealDistribution::new(min, max)?)
            }
            DistributionRequest::Geometric { p } => {
                DistributionSampler::Geometric(GeometricDistribution::new(p)?)
            }
            DistributionRequest::Exponential { lambda } => {
                DistributionSampler::Exponential(ExponentialDistribution::new(lambda)?)
            }
            DistributionRequest::Normal { mean, stddev } => {
                DistributionSampler::Normal(NormalDistribution::new(mean, stddev)?)
            }
            DistributionRequest::ProactiveExpNormal {
                mean_rate,
                stddev_rate,
            } => DistributionSampler::ProactiveExpNormal(
                ProactiveExpNormalDistribution::with_options(mean_rate, stddev_rate, options)?,
            ),
        };
        Ok(sampler)
    }
}

impl fmt::Display for DistributionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionRequest::UniformInt { min, max } => {
                write!(f, "uniform_int(min={}, max={})", min, max)
            }
            DistributionRequest::UniformReal { min, max } => {
                write!(f, "uniform_real(min={}, max={})", min, max)
            }
            DistributionRequest::Geometric { p } => write!(f, "geometric(p={})", p),
            DistributionRequest::Exponential { lambda } => {
                write!(f, "exponential(lambda={})", lambda)
            }
            DistributionRequest::Normal { mean, stddev } => {
                write!(f, "normal(mean={}, stddev={})", mean, stddev)
            }
            DistributionRequest::ProactiveExpNormal {
                mean_rate,
                stddev_rate,
            } => write!(
                f,
                "proactive_exp_normal(mean_rate={}, stddev_rate={})",
                mean_rate, stddev_rate
            ),
        }
    }
}

/// A validated, ready-to-draw distribution
#[derive(Debug, Clone)]
pub enum DistributionSampler {
    UniformInt(UniformIntDistribution),
    UniformReal(UniformRealDistribution),
    Geometric(GeometricDistribution),
    Exponential(ExponentialDistribution),
    Normal(NormalDistribution),
    ProactiveExpNormal(ProactiveExpNormalDistribution),
}

impl Sampler for DistributionSampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        match self {
            DistributionSampler::UniformInt(dist) => dist.sample(rng),
            DistributionSampler::UniformReal(dist) => dist.sample(rng),
            DistributionSampler::Geometric(dist) => dist.sample(rng),
            DistributionSampler::Exponential(dist) => dist.sample(rng),
            DistributionSampler::Normal(dist) => dist.sample(rng),
            DistributionSampler::ProactiveExpNormal(dist) => dist.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::seeded_engine;

    #[test]
    fn test_request_validation() {
        assert!(DistributionRequest::UniformInt { min: 1, max: 6 }.validate().is_ok());
        assert!(DistributionRequest::UniformInt { min: 5, max: 1 }.validate().is_err());
        assert!(DistributionRequest::Geometric { p: 0.0 }.validate().is_err());
        assert!(DistributionRequest::Geometric { p: 1.5 }.validate().is_err());
        assert!(DistributionRequest::Exponential { lambda: 0.0 }.validate().is_err());
        assert!(DistributionRequest::Exponential { lambda: -2.0 }.validate().is_err());
        assert!(DistributionRequest::Normal { mean: 0.0, stddev: -1.0 }.validate().is_err());
        assert!(DistributionRequest::ProactiveExpNormal {
            mean_rate: 1.0,
            stddev_rate: 0.0
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_result_kinds() {
        let mut rng = seeded_engine(7);
        let requests = [
            (DistributionRequest::UniformInt { min: -3, max: 3 }, true),
            (DistributionRequest::UniformReal { min: 0.0, max: 1.0 }, false),
            (DistributionRequest::Geometric { p: 0.5 }, true),
            (DistributionRequest::Exponential { lambda: 1.0 }, false),
            (DistributionRequest::Normal { mean: 0.0, stddev: 1.0 }, false),
            (
                DistributionRequest::ProactiveExpNormal {
                    mean_rate: 1.0,
                    stddev_rate: 1.0,
                },
                false,
            ),
        ];

        for (request, integral) in requests {
            assert_eq!(request.is_integral(), integral, "{}", request);
            let sampler = request.build(ProactiveOptions::default()).unwrap();
            let value = sampler.sample(&mut rng).unwrap();
            assert_eq!(value.is_integral(), integral, "{}", request);
        }
    }

    #[test]
    fn test_request_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            distribution: DistributionRequest,
        }

        let parsed: Wrapper = ::toml::from_str(
            r#"
            [distribution]
            kind = "proactive_exp_normal"
            mean_rate = 1.5
            stddev_rate = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(
            parsed.distribution,
            DistributionRequest::ProactiveExpNormal {
                mean_rate: 1.5,
                stddev_rate: 0.5
            }
        );
    }

    #[test]
    fn test_sample_result_json() {
        let values = vec![
            SampleResult::Integer(-4),
            SampleResult::Count(9),
            SampleResult::Real(0.25),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, "[-4,9,0.25]");
    }

    #[test]
    fn test_display() {
        let request = DistributionRequest::Normal { mean: 1.0, stddev: 2.5 };
        assert_eq!(request.to_string(), "normal(mean=1, stddev=2.5)");
        assert_eq!(request.name(), "normal");
        assert_eq!(SampleResult::Count(3).to_string(), "3");
    }
}
