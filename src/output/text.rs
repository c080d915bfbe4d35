//! Human-readable text output

use crate::distribution::{DistributionRequest, SampleResult};
use crate::worker::Batch;
use crate::Result;
use std::io::Write;

/// Write one sample per line
pub fn write_samples<W: Write>(out: &mut W, samples: &[SampleResult]) -> Result<()> {
    for sample in samples {
        writeln!(out, "{}", sample)?;
    }
    Ok(())
}

/// Write the summary block for a batch
///
/// Displays the request, sample count, min/max, mean, standard deviation and
/// the time spent drawing.
pub fn write_summary<W: Write>(out: &mut W, request: &DistributionRequest, batch: &Batch) -> Result<()> {
    writeln!(out, "═══════════════════════════════════════════════════════════")?;
    writeln!(out, "                    SAMPLE SUMMARY")?;
    writeln!(out, "═══════════════════════════════════════════════════════════")?;
    writeln!(out, "Distribution: {}", request)?;
    writeln!(out, "Elapsed Time: {:.3}s", batch.elapsed.as_secs_f64())?;

    match batch.summary {
        Some(summary) => {
            writeln!(out, "Samples:      {}", format_number(summary.count))?;
            writeln!(out, "Min:          {}", summary.min)?;
            writeln!(out, "Max:          {}", summary.max)?;
            writeln!(out, "Mean:         {:.6}", summary.mean)?;
            writeln!(out, "Std Dev:      {:.6}", summary.stddev)?;
        }
        None => {
            writeln!(out, "Samples:      0")?;
        }
    }

    Ok(())
}

/// Format a count with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
