//! Proactive exponential-normal distribution
//!
//! A composite draw built from three simpler ones:
//!
//! 1. `m` from Exponential(`mean_rate`)
//! 2. `d` from Exponential(`stddev_rate`)
//! 3. `x` from Normal(`m`, `d`)
//! 4. `res = ln(x)`
//! 5. if `res < m`, reflect around `m`: `res = 2m - res`
//!
//! The result is therefore always `>= m`.
//!
//! # Non-positive inner draws
//!
//! Step 4 is undefined for `x <= 0`, which a normal draw can produce. The
//! [`NonPositivePolicy`] decides what happens:
//!
//! - **Resample** (default): redraw the whole `(m, d, x)` triple, up to
//!   `max_attempts` times
//! - **Reject**: fail on the first non-positive `x`
//!
//! Both fail with [`SampleError::NonPositiveDraw`] when no usable `x` was found.
//! A draw whose reflected result overflows counts as unusable too, so neither
//! NaN nor infinity leaves this module. Since `m >= 0`, each attempt succeeds with
//! probability of at least one half.
//!
//! # Example
//!
//! ```
//! use pseudo_rand::distribution::Sampler;
//! use pseudo_rand::distribution::proactive::ProactiveExpNormalDistribution;
//! use pseudo_rand::engine::seeded_engine;
//!
//! let dist = ProactiveExpNormalDistribution::new(1.0, 1.0).unwrap();
//! let mut rng = seeded_engine(7);
//! let value = dist.sample(&mut rng).unwrap().as_f64();
//! assert!(value.is_finite());
//! ```

use super::exponential::exp_for;
use super::{SampleError, SampleResult, Sampler};
use rand::Rng;
use rand_distr::{Distribution, Exp, StandardNormal};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const NAME: &str = "proactive_exp_normal";

/// Default bound on resample attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

/// Handling of an inner normal draw `x <= 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonPositivePolicy {
    /// Redraw the composite triple until `x > 0`
    #[default]
    Resample,
    /// Fail immediately
    Reject,
}

impl fmt::Display for NonPositivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonPositivePolicy::Resample => write!(f, "resample"),
            NonPositivePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Tuning for the proactive sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProactiveOptions {
    pub policy: NonPositivePolicy,
    /// Total attempts allowed under `Resample` (must be >= 1)
    pub max_attempts: u32,
}

impl Default for ProactiveOptions {
    fn default() -> Self {
        Self {
            policy: NonPositivePolicy::Resample,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ProactiveOptions {
    /// Attempts actually made under this policy
    fn attempts(&self) -> u32 {
        match self.policy {
            NonPositivePolicy::Resample => self.max_attempts,
            NonPositivePolicy::Reject => 1,
        }
    }
}

/// Composite exponential-normal distribution
#[derive(Debug, Clone)]
pub struct ProactiveExpNormalDistribution {
    mean_rate: f64,
    stddev_rate: f64,
    mean_dist: Exp<f64>,
    stddev_dist: Exp<f64>,
    options: ProactiveOptions,
}

impl ProactiveExpNormalDistribution {
    /// Create with the default policy (resample, 64 attempts)
    pub fn new(mean_rate: f64, stddev_rate: f64) -> Result<Self, SampleError> {
        Self::with_options(mean_rate, stddev_rate, ProactiveOptions::default())
    }

    /// Create with an explicit non-positive policy
    ///
    /// Fails with `InvalidParameter` unless both rates are finite and at least
    /// [`MIN_RATE`](super::exponential::MIN_RATE), and `options.max_attempts >= 1`.
    pub fn with_options(
        mean_rate: f64,
        stddev_rate: f64,
        options: ProactiveOptions,
    ) -> Result<Self, SampleError> {
        let mean_dist = exp_for(NAME, "mean_rate", mean_rate)?;
        let stddev_dist = exp_for(NAME, "stddev_rate", stddev_rate)?;

        if options.max_attempts == 0 {
            return Err(SampleError::invalid(NAME, "max_attempts must be >= 1"));
        }

        Ok(Self {
            mean_rate,
            stddev_rate,
            mean_dist,
            stddev_dist,
            options,
        })
    }

    pub fn mean_rate(&self) -> f64 {
        self.mean_rate
    }

    pub fn stddev_rate(&self) -> f64 {
        self.stddev_rate
    }

    pub fn options(&self) -> ProactiveOptions {
        self.options
    }

    /// One attempt: `Some(res)` when the inner normal draw was usable
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f64> {
        let m = self.mean_dist.sample(rng);
        let d = self.stddev_dist.sample(rng);
        let z: f64 = StandardNormal.sample(rng);
        let x = m + d * z;

        if !(x > 0.0 && x.is_finite() && m.is_finite()) {
            log::trace!("{}: unusable inner draw x={} (m={}, d={})", NAME, x, m, d);
            return None;
        }

        let res = reflect(x.ln(), m);
        if !res.is_finite() {
            log::trace!("{}: non-finite result {} (m={}, x={})", NAME, res, m, x);
            return None;
        }

        Some(res)
    }
}

/// Reflect `res` around `m` when it falls below it
#[inline]
fn reflect(res: f64, m: f64) -> f64 {
    if res < m {
        2.0 * m - res
    } else {
        res
    }
}

impl Sampler for ProactiveExpNormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleResult, SampleError> {
        let attempts = self.options.attempts();
        for _ in 0..attempts {
            if let Some(res) = self.attempt(rng) {
                return Ok(SampleResult::Real(res));
            }
        }

        log::debug!(
            "{}: no positive inner draw after {} attempt(s) under {} policy",
            NAME,
            attempts,
            self.options.policy
        );
        Err(SampleError::NonPositiveDraw { attempts })
    }
}
