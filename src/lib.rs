//! pseudo-rand - random distribution samplers
//!
//! pseudo-rand draws single values from standard random distributions, plus a
//! composite "proactive" exponential-normal distribution, with a fresh
//! entropy-seeded engine per call by default.
//!
//! # Architecture
//!
//! - **Sampler core**: validates a [`DistributionRequest`] and draws once
//! - **Distributions**: uniform int/real, geometric, exponential, normal, proactive
//! - **Engines**: per-call or thread-local xoshiro256++, or caller-seeded
//! - **Batch runner**: parallel, optionally reproducible, multi-sample draws
//! - **Output**: text, JSON and CSV writers with summary statistics
//!
//! # Example
//!
//! ```
//! use pseudo_rand::{sample, DistributionRequest, SampleResult};
//!
//! let roll = sample(DistributionRequest::UniformInt { min: 1, max: 6 }).unwrap();
//! assert!(matches!(roll, SampleResult::Integer(1..=6)));
//! ```

pub mod config;
pub mod distribution;
pub mod engine;
pub mod output;
pub mod sampler;
pub mod stats;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{DistributionRequest, SampleError, SampleResult, Sampler};
pub use sampler::{sample, SamplerCore};

/// Result type used by the application layers (config, output, batch)
pub type Result<T> = anyhow::Result<T>;
