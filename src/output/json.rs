//! JSON output formatting
//!
//! A batch is serialized as a single report document:
//!
//! ```json
//! {
//!   "generated_at": "2024-05-01T12:00:00.000000+00:00",
//!   "distribution": { "kind": "uniform_int", "min": 1, "max": 6 },
//!   "seed": 42,
//!   "count": 3,
//!   "elapsed": { "micros": 120, "human": "120µs" },
//!   "samples": [4, 1, 6],
//!   "summary": { "count": 3, "min": 1.0, "max": 6.0, "mean": 3.67, "stddev": 2.52 }
//! }
//! ```

use crate::distribution::{DistributionRequest, SampleResult};
use crate::stats::SampleSummary;
use crate::worker::Batch;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = d.as_micros() as u64;
        let human = format_duration_human(d);
        Self { micros, human }
    }
}

/// Complete JSON report for one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReport {
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    pub distribution: DistributionRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub count: usize,
    pub elapsed: JsonDuration,
    pub samples: Vec<SampleResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SampleSummary>,
}

impl SampleReport {
    /// Build a report; `include_summary` controls the `summary` field
    pub fn new(
        request: &DistributionRequest,
        seed: Option<u64>,
        batch: &Batch,
        include_summary: bool,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            distribution: *request,
            seed,
            count: batch.samples.len(),
            elapsed: JsonDuration::from_duration(batch.elapsed),
            samples: batch.samples.clone(),
            summary: if include_summary { batch.summary } else { None },
        }
    }
}

/// Write a report as pretty-printed JSON followed by a newline
pub fn write_report<W: Write>(out: &mut W, report: &SampleReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Format duration in human-readable format
fn format_duration_human(d: Duration) -> String {
    let micros = d.as_micros() as u64;

    if micros == 0 {
        return "0µs".to_string();
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.3}ms", micros as f64 / 1000.0)
    } else if micros < 60_000_000 {
        format!("{:.3}s", micros as f64 / 1_000_000.0)
    } else if micros < 3_600_000_000 {
        format!("{:.2}m", micros as f64 / 60_000_000.0)
    } else {
        format!("{:.2}h", micros as f64 / 3_600_000_000.0)
    }
}
