//! Batch sampling across worker threads
//!
//! The batch runner draws many samples for one request on a rayon pool. Work is
//! split into fixed-size chunks; each chunk is drawn by one worker thread with
//! an engine that thread alone owns, and folded into a per-chunk summary that
//! is merged once all chunks finish.
//!
//! # Reproducibility
//!
//! With a seed, chunk `i` uses an engine seeded from `seed` mixed with `i`
//! (see `chunk_seed`), so runs with nearby seeds do not share chunks. Chunk
//! boundaries do not depend on the thread count, so the same seed yields the
//! same samples whether the pool has one thread or sixty-four.
//!
//! Without a seed, each draw obtains its engine from the sampler core's
//! [`EngineMode`](crate::engine::EngineMode).
//!
//! # Example
//!
//! ```
//! use pseudo_rand::worker::BatchRunner;
//! use pseudo_rand::{DistributionRequest, SamplerCore};
//!
//! let runner = BatchRunner::new(SamplerCore::default(), 2).with_seed(Some(7));
//! let batch = runner.run(&DistributionRequest::UniformInt { min: 1, max: 6 }, 100).unwrap();
//! assert_eq!(batch.samples.len(), 100);
//! assert_eq!(batch.summary.unwrap().count, 100);
//! ```

use crate::distribution::{DistributionRequest, SampleError, SampleResult, Sampler};
use crate::engine::{seeded_engine, with_engine};
use crate::sampler::SamplerCore;
use crate::stats::{SampleSummary, SummaryAccumulator};
use anyhow::Context;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Samples per chunk
pub const CHUNK_SIZE: usize = 4096;

/// Largest batch a single run may draw
pub const MAX_COUNT: usize = 100_000_000;

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct Batch {
    pub samples: Vec<SampleResult>,
    pub summary: Option<SampleSummary>,
    pub elapsed: Duration,
}

impl Batch {
    fn empty() -> Self {
        Self {
            samples: Vec::new(),
            summary: None,
            elapsed: Duration::ZERO,
        }
    }
}

/// Draws batches of samples on a dedicated thread pool
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    core: SamplerCore,
    threads: usize,
    seed: Option<u64>,
}

impl BatchRunner {
    /// Create a runner; `threads == 0` means one thread per CPU
    pub fn new(core: SamplerCore, threads: usize) -> Self {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        Self {
            core,
            threads,
            seed: None,
        }
    }

    /// Use seeded per-chunk engines instead of the core's engine mode
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Draw `count` samples for `request`
    ///
    /// The request is validated before any thread is started. Fails when
    /// `count` exceeds [`MAX_COUNT`]. The whole batch fails on the first draw
    /// error.
    pub fn run(&self, request: &DistributionRequest, count: usize) -> crate::Result<Batch> {
        let sampler = self
            .core
            .prepare(request)
            .with_context(|| format!("Invalid request {}", request))?;

        if count == 0 {
            return Ok(Batch::empty());
        }

        if count > MAX_COUNT {
            anyhow::bail!("count must be at most {}, got {}", MAX_COUNT, count);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .context("Failed to build sampling thread pool")?;

        log::info!(
            "drawing {} sample(s) from {} on {} thread(s), seed {:?}",
            count,
            request,
            self.threads,
            self.seed
        );

        let start = Instant::now();
        let num_chunks = count.div_ceil(CHUNK_SIZE);
        let mode = self.core.engine_mode();
        let seed = self.seed;

        let chunks: Result<Vec<(Vec<SampleResult>, SummaryAccumulator)>, SampleError> =
            pool.install(|| {
                (0..num_chunks)
                    .into_par_iter()
                    .map(|chunk| {
                        let len = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
                        let mut samples = Vec::with_capacity(len);
                        let mut acc = SummaryAccumulator::new();

                        let mut push = |value: SampleResult| {
                            acc.record(value.as_f64());
                            samples.push(value);
                        };

                        match seed {
                            Some(seed) => {
                                let mut rng = seeded_engine(chunk_seed(seed, chunk));
                                for _ in 0..len {
                                    push(sampler.sample(&mut rng)?);
                                }
                            }
                            None => {
                                for _ in 0..len {
                                    push(with_engine(mode, |rng| sampler.sample(rng))?);
                                }
                            }
                        }

                        Ok((samples, acc))
                    })
                    .collect()
            });

        let chunks = chunks.with_context(|| format!("Sampling {} failed", request))?;

        let mut samples = Vec::with_capacity(count);
        let mut summary = SummaryAccumulator::new();
        for (chunk_samples, acc) in chunks {
            samples.extend(chunk_samples);
            summary.merge(&acc);
        }

        let elapsed = start.elapsed();
        log::debug!("drew {} sample(s) in {:.3}s", samples.len(), elapsed.as_secs_f64());

        Ok(Batch {
            samples,
            summary: summary.finish(),
            elapsed,
        })
    }
}

/// Seed for chunk `chunk` of a seeded run
///
/// The chunk index is spread by the golden-ratio constant so that chunk 1 of
/// seed `s` does not reuse chunk 0 of seed `s + 1`. Chunk 0 keeps `seed`.
#[inline]
fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
