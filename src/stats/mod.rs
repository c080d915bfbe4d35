//! Summary statistics over drawn samples
//!
//! Samples are folded into a [`SummaryAccumulator`] in one pass using
//! Welford's update, and accumulators from separate workers can be merged
//! (Chan et al. pairwise combination) without revisiting the samples.
//!
//! # Example
//!
//! ```
//! use pseudo_rand::stats::SummaryAccumulator;
//!
//! let mut acc = SummaryAccumulator::new();
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     acc.record(v);
//! }
//!
//! let summary = acc.finish().unwrap();
//! assert_eq!(summary.count, 4);
//! assert_eq!(summary.mean, 2.5);
//! ```

use crate::distribution::SampleResult;
use serde::{Deserialize, Serialize};

/// Final summary of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator), 0 for a single sample
    pub stddev: f64,
}

impl SampleSummary {
    /// Summarise a slice of samples; `None` when empty
    pub fn from_samples(samples: &[SampleResult]) -> Option<Self> {
        let mut acc = SummaryAccumulator::new();
        for sample in samples {
            acc.record(sample.as_f64());
        }
        acc.finish()
    }
}

/// Running one-pass statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryAccumulator {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    min: f64,
    max: f64,
}

impl SummaryAccumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fold one value in
    #[inline]
    pub fn record(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Combine another accumulator into this one
    pub fn merge(&mut self, other: &SummaryAccumulator) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let total = self.count + other.count;
        let delta = other.mean - self.mean;
        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = total as f64;

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.count = total;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Produce the summary; `None` if nothing was recorded
    pub fn finish(&self) -> Option<SampleSummary> {
        if self.count == 0 {
            return None;
        }

        let stddev = if self.count > 1 {
            (self.m2 / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(SampleSummary {
            count: self.count,
            min: self.min,
            max: self.max,
            mean: self.mean,
            stddev,
        })
    }
}

impl Default for SummaryAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
