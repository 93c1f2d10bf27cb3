// SPDX-License-Identifier: MIT
//! Benchmark driver
//!
//! Runs the fixed sequence: generate, encode JSON, encode protobuf, print the
//! header, then measure and print each encoding in turn. Any failure aborts
//! the run; partial results are never reported.

use crate::compression::{CompressError, CompressionConfig, CompressionEngine};
use crate::dataset::Dataset;
use crate::encoding::{self, EncodeError, Format};
use crate::report::{self, LabeledReport};
use std::io::Write;
use tracing::info;

/// Errors that abort a benchmark run
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Compression error: {0}")]
    Compress(#[from] CompressError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Encoding size benchmark
#[derive(Debug, Default)]
pub struct Bench {
    engine: CompressionEngine,
}

impl Bench {
    /// Create a benchmark with a validated compression config
    pub fn new(config: CompressionConfig) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self {
            engine: CompressionEngine::new(config),
        })
    }

    /// Run the benchmark, writing the report to `out`
    ///
    /// Returns the reports in print order (json, protobuf).
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<LabeledReport>, BenchError> {
        info!("Running encoding size benchmark");

        let dataset = Dataset::generate();
        let json = encoding::encode(Format::Json, &dataset)?;
        let protobuf = encoding::encode(Format::Protobuf, &dataset)?;

        report::write_header(out)?;
        let reports = vec![
            self.harness(out, Format::Json, &json)?,
            self.harness(out, Format::Protobuf, &protobuf)?,
        ];

        info!(reports = reports.len(), "Benchmark complete");
        Ok(reports)
    }

    /// Measure one encoded buffer and print its line
    pub fn harness<W: Write>(
        &self,
        out: &mut W,
        format: Format,
        raw: &[u8],
    ) -> Result<LabeledReport, BenchError> {
        let sizes = self.engine.measure(raw)?;
        let report = LabeledReport::new(format.label(), sizes);
        report::write_line(out, &report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::GZIP_FRAMING_OVERHEAD;

    #[test]
    fn test_run_output_shape() {
        let bench = Bench::default();
        let mut out = Vec::new();
        let reports = bench.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], report::HEADER);
        assert!(lines[1].starts_with("json      "));
        assert!(lines[2].starts_with("protobuf  "));

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, "json");
        assert_eq!(reports[1].label, "protobuf");
        assert_eq!(lines[1], reports[0].to_string());
        assert_eq!(lines[2], reports[1].to_string());
    }

    #[test]
    fn test_run_sizes() {
        let mut out = Vec::new();
        let reports = Bench::default().run(&mut out).unwrap();
        let (json, protobuf) = (reports[0].sizes, reports[1].sizes);

        assert!(protobuf.raw < json.raw);
        assert_eq!(
            json.gzip_framing_overhead(),
            Some(GZIP_FRAMING_OVERHEAD)
        );
        assert_eq!(
            protobuf.gzip_framing_overhead(),
            Some(GZIP_FRAMING_OVERHEAD)
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CompressionConfig {
            brotli_quality: 42,
            ..CompressionConfig::best()
        };
        assert!(matches!(
            Bench::new(config),
            Err(BenchError::Compress(CompressError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_output_failure_is_fatal() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = Bench::default().run(&mut FailingWriter);
        assert!(matches!(result, Err(BenchError::Output(_))));
    }
}
