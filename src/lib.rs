// SPDX-License-Identifier: MIT
//! # Encoding Size Benchmark
//!
//! Compares the byte size of a small fixed dataset encoded as JSON and as
//! protobuf, before and after general-purpose compression.
//!
//! ## Overview
//!
//! ```text
//! Dataset::generate()           12 records, closed-form values
//!   ├─ encode_json()            indented JSON (serde_json)
//!   └─ encode_protobuf()        protobuf wire format (prost)
//!        │
//!        └─ CompressionEngine::measure()
//!             ├─ gzip           flate2, level 9
//!             ├─ deflate        flate2, level 9, raw RFC 1951 stream
//!             └─ brotli         quality 11, window 22
//! ```
//!
//! Output (one header line, then one line per encoding):
//!
//! ```text
//! Byte sizes (smaller is better):
//! json        raw=NNNN  gzip= NNN  deflate= NNN  brotli= NNN
//! protobuf    raw= NNN  gzip= NNN  deflate= NNN  brotli= NNN
//! ```
//!
//! The run is fully deterministic: no randomness, no timestamps (gzip MTIME
//! is written as zero), and struct fields serialize in declaration order.
//!
//! ## Usage
//!
//! ```rust
//! use encbench::{Bench, CompressionConfig};
//!
//! let bench = Bench::new(CompressionConfig::best())?;
//! let mut out = Vec::new();
//! let reports = bench.run(&mut out)?;
//!
//! assert_eq!(reports.len(), 2);
//! assert!(reports[1].sizes.raw < reports[0].sizes.raw);
//! # Ok::<(), encbench::BenchError>(())
//! ```

pub mod bench;
pub mod compression;
pub mod dataset;
pub mod encoding;
pub mod report;

// Re-export main types
pub use bench::{Bench, BenchError};
pub use compression::{
    Codec, CompressError, CompressionConfig, CompressionEngine, SizeReport, GZIP_FRAMING_OVERHEAD,
};
pub use dataset::{DataMessage, Dataset, Record, RecordMessage, RECORD_COUNT};
pub use encoding::{EncodeError, Format};
pub use report::LabeledReport;
