//! Output formatting
//!
//! Batches are written in one of three formats:
//!
//! - **text**: one value per line, optional summary block
//! - **json**: a single report document, see [`json::SampleReport`]
//! - **csv**: `index,value` rows
//!
//! Output goes to stdout unless a path is configured.

pub mod csv;
pub mod json;
pub mod text;

use crate::config::{OutputConfig, OutputFormat};
use crate::distribution::DistributionRequest;
use crate::worker::Batch;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write `batch` according to `output`
pub fn write_batch(
    output: &OutputConfig,
    request: &DistributionRequest,
    seed: Option<u64>,
    batch: &Batch,
) -> Result<()> {
    match output.path {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_to(&mut writer, output, request, seed, batch)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            log::info!("wrote {} sample(s) to {}", batch.samples.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_to(&mut writer, output, request, seed, batch)?;
            writer.flush().context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Write `batch` to an arbitrary writer in the configured format
pub fn write_to<W: Write>(
    writer: &mut W,
    output: &OutputConfig,
    request: &DistributionRequest,
    seed: Option<u64>,
    batch: &Batch,
) -> Result<()> {
    match output.format {
        OutputFormat::Text => {
            text::write_samples(writer, &batch.samples)?;
            if output.summary {
                text::write_summary(writer, request, batch)?;
            }
        }
        OutputFormat::Json => {
            let report = json::SampleReport::new(request, seed, batch, output.summary);
            json::write_report(writer, &report)?;
        }
        OutputFormat::Csv => {
            let mut csv = csv::CsvWriter::new(writer)?;
            csv.append_all(&batch.samples)?;
            log::debug!("wrote {} csv row(s)", csv.rows());
            csv.finish()?;
            if output.summary {
                // CSV rows stay machine-readable; the summary goes to stderr
                text::write_summary(&mut io::stderr(), request, batch)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::SampleResult;
    use crate::stats::SampleSummary;
    use std::time::Duration;

    fn batch() -> Batch {
        let samples = vec![SampleResult::Integer(3), SampleResult::Integer(5)];
        Batch {
            summary: SampleSummary::from_samples(&samples),
            samples,
            elapsed: Duration::from_millis(2),
        }
    }

    #[test]
    fn test_write_to_each_format() {
        let request = DistributionRequest::UniformInt { min: 1, max: 6 };

        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
            let output = OutputConfig {
                format,
                path: None,
                summary: false,
            };
            let mut buf = Vec::new();
            write_to(&mut buf, &output, &request, Some(1), &batch()).unwrap();
            let text = String::from_utf8(buf).unwrap();
            assert!(text.contains('3') && text.contains('5'), "{} output: {}", format, text);
        }
    }

    #[test]
    fn test_write_batch_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        let output = OutputConfig {
            format: OutputFormat::Csv,
            path: Some(path.clone()),
            summary: false,
        };

        let request = DistributionRequest::UniformInt { min: 1, max: 6 };
        write_batch(&output, &request, None, &batch()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "index,value\n0,3\n1,5\n");
    }
}
