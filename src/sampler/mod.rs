//! Sampler core
//!
//! The single entry point for drawing a value: validate the request, obtain an
//! engine, draw once, return. Nothing is kept between calls except, in
//! [`EngineMode::ThreadLocal`], the calling thread's own engine.
//!
//! # Example
//!
//! ```
//! use pseudo_rand::{sample, DistributionRequest};
//!
//! let v = sample(DistributionRequest::Exponential { lambda: 2.0 }).unwrap();
//! assert!(v.as_f64() >= 0.0);
//!
//! let err = sample(DistributionRequest::UniformInt { min: 5, max: 1 }).unwrap_err();
//! assert!(err.is_invalid_parameter());
//! ```

use crate::distribution::{
    DistributionRequest, DistributionSampler, ProactiveOptions, SampleError, SampleResult, Sampler,
};
use crate::engine::{with_engine, EngineMode};

/// Validates requests and draws samples
///
/// Cheap to copy; it carries only the engine mode and proactive options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerCore {
    engine: EngineMode,
    proactive: ProactiveOptions,
}

impl SamplerCore {
    pub fn new(engine: EngineMode, proactive: ProactiveOptions) -> Self {
        Self { engine, proactive }
    }

    pub fn engine_mode(&self) -> EngineMode {
        self.engine
    }

    pub fn proactive_options(&self) -> ProactiveOptions {
        self.proactive
    }

    /// Validate `request` and build its sampler without drawing
    pub fn prepare(&self, request: &DistributionRequest) -> Result<DistributionSampler, SampleError> {
        request.build(self.proactive).map_err(|e| {
            log::debug!("rejected {}: {}", request, e);
            e
        })
    }

    /// Draw one sample using an engine obtained per the configured mode
    ///
    /// Parameters are validated before any engine is created.
    pub fn sample(&self, request: &DistributionRequest) -> Result<SampleResult, SampleError> {
        let sampler = self.prepare(request)?;
        with_engine(self.engine, |rng| sampler.sample(rng))
    }
}

/// Draw one sample with a fresh entropy-seeded engine and default options
pub fn sample(request: DistributionRequest) -> Result<SampleResult, SampleError> {
    SamplerCore::default().sample(&request)
}
