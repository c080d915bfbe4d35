//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! A configuration file looks like:
//!
//! ```toml
//! [distribution]
//! kind = "proactive_exp_normal"
//! mean_rate = 1.0
//! stddev_rate = 0.5
//!
//! [sampler]
//! engine = "thread_local"
//! non_positive = "resample"
//! max_attempts = 64
//!
//! [run]
//! count = 1000
//! seed = 42
//! threads = 4
//!
//! [output]
//! format = "json"
//! path = "samples.json"
//! summary = true
//! ```
//!
//! Every table except `[distribution]` is optional; the distribution may also
//! come from a CLI subcommand.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::{DistributionRequest, NonPositivePolicy, ProactiveOptions};
use crate::engine::EngineMode;
use crate::sampler::SamplerCore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use crate::distribution::proactive::DEFAULT_MAX_ATTEMPTS;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// What to sample
    #[serde(default)]
    pub distribution: Option<DistributionRequest>,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// The configured request, or an error if none was given
    pub fn request(&self) -> Result<DistributionRequest> {
        self.distribution.ok_or_else(|| {
            anyhow::anyhow!(
                "no distribution specified: pass a subcommand or add a [distribution] table"
            )
        })
    }
}

/// Sampler core settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Engine acquisition mode
    #[serde(default)]
    pub engine: EngineMode,
    /// Handling of non-positive inner draws in the proactive sampler
    #[serde(default)]
    pub non_positive: NonPositivePolicy,
    /// Attempt bound for `non_positive = "resample"`
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            engine: EngineMode::default(),
            non_positive: NonPositivePolicy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SamplerConfig {
    pub fn proactive_options(&self) -> ProactiveOptions {
        ProactiveOptions {
            policy: self.non_positive,
            max_attempts: self.max_attempts,
        }
    }

    /// Build the sampler core these settings describe
    pub fn core(&self) -> SamplerCore {
        SamplerCore::new(self.engine, self.proactive_options())
    }
}

/// Batch settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of samples to draw
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seed for reproducible runs (entropy-seeded when absent)
    pub seed: Option<u64>,
    /// Worker threads (0 = one per CPU)
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_count() -> usize {
    1
}

fn default_threads() -> usize {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            threads: default_threads(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file (stdout when absent)
    pub path: Option<PathBuf>,
    /// Include summary statistics
    #[serde(default)]
    pub summary: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.distribution.is_none());
        assert!(config.request().is_err());
        assert_eq!(config.run.count, 1);
        assert_eq!(config.run.threads, 1);
        assert_eq!(config.sampler.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_sampler_core_from_config() {
        let sampler = SamplerConfig {
            engine: EngineMode::ThreadLocal,
            non_positive: NonPositivePolicy::Reject,
            max_attempts: 3,
        };
        let core = sampler.core();
        assert_eq!(core.engine_mode(), EngineMode::ThreadLocal);
        assert_eq!(core.proactive_options().policy, NonPositivePolicy::Reject);
        assert_eq!(core.proactive_options().max_attempts, 3);
    }
}
