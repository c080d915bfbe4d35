//! CSV output formatting
//!
//! One row per sample with a header row:
//!
//! ```text
//! index,value
//! 0,4
//! 1,2
//! ```
//!
//! Integer samples are written without a decimal point; reals use Rust's
//! shortest round-trip formatting.

use crate::distribution::SampleResult;
use crate::Result;
use std::io::Write;

/// CSV writer for sample rows
pub struct CsvWriter<W: Write> {
    out: W,
    rows: u64,
}

impl<W: Write> CsvWriter<W> {
    /// Create a new CSV writer and emit the header row
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "index,value")?;
        Ok(Self { out, rows: 0 })
    }

    /// Append one sample
    pub fn append(&mut self, value: &SampleResult) -> Result<()> {
        writeln!(self.out, "{},{}", self.rows, value)?;
        self.rows += 1;
        Ok(())
    }

    /// Append every sample in order
    pub fn append_all(&mut self, values: &[SampleResult]) -> Result<()> {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Rows written so far (excluding the header)
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let writer = CsvWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.rows(), 0);
        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "index,value\n");
    }

    #[test]
    fn test_rows() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        writer
            .append_all(&[
                SampleResult::Integer(-2),
                SampleResult::Count(7),
                SampleResult::Real(0.5),
            ])
            .unwrap();
        assert_eq!(writer.rows(), 3);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "index,value\n0,-2\n1,7\n2,0.5\n");
    }

    #[test]
    fn test_write_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut writer = CsvWriter::new(file.reopen().unwrap()).unwrap();
        writer.append(&SampleResult::Real(1.25)).unwrap();
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "index,value\n0,1.25\n");
    }
}
