// SPDX-License-Identifier: MIT
//! Compression harness
//!
//! Compresses a buffer with each codec at its strongest setting and reports
//! the resulting sizes. Every stream is fully written and finalized before
//! its length is taken, since the encoders buffer internally.

use std::io::Write;

/// Bytes flate2 adds around a raw DEFLATE stream in gzip framing:
/// a 10-byte header (no name, comment or extra fields) and an 8-byte
/// CRC32/ISIZE trailer.
pub const GZIP_FRAMING_OVERHEAD: usize = 18;

/// Maximum flate2 compression level
pub const MAX_FLATE_LEVEL: u32 = 9;

/// Maximum brotli quality
pub const MAX_BROTLI_QUALITY: u32 = 11;

/// Errors that can occur during compression
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("{codec} write failed: {source}")]
    Write {
        codec: Codec,
        source: std::io::Error,
    },

    #[error("{codec} finish failed: {source}")]
    Finish {
        codec: Codec,
        source: std::io::Error,
    },

    #[error("Invalid compression config: {0}")]
    InvalidConfig(String),
}

/// Compression codec under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// DEFLATE in gzip framing (RFC 1952)
    Gzip,
    /// Raw DEFLATE, no header or checksum (RFC 1951)
    Deflate,
    Brotli,
}

impl Codec {
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Gzip => "gzip",
            Codec::Deflate => "deflate",
            Codec::Brotli => "brotli",
        }
    }

    /// Codecs in report order
    pub fn all() -> [Codec; 3] {
        [Codec::Gzip, Codec::Deflate, Codec::Brotli]
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compression settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionConfig {
    /// gzip level (0-9)
    pub gzip_level: u32,

    /// raw DEFLATE level (0-9)
    pub deflate_level: u32,

    /// Brotli quality (0-11)
    pub brotli_quality: u32,

    /// Brotli window size, log2 (10-24)
    pub brotli_lgwin: u32,
}

impl CompressionConfig {
    /// Strongest setting for every codec
    pub fn best() -> Self {
        Self {
            gzip_level: MAX_FLATE_LEVEL,
            deflate_level: MAX_FLATE_LEVEL,
            brotli_quality: MAX_BROTLI_QUALITY,
            brotli_lgwin: 22,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.gzip_level > MAX_FLATE_LEVEL {
            return Err(CompressError::InvalidConfig(format!(
                "gzip level must be at most {}, got {}",
                MAX_FLATE_LEVEL, self.gzip_level
            )));
        }

        if self.deflate_level > MAX_FLATE_LEVEL {
            return Err(CompressError::InvalidConfig(format!(
                "deflate level must be at most {}, got {}",
                MAX_FLATE_LEVEL, self.deflate_level
            )));
        }

        if self.brotli_quality > MAX_BROTLI_QUALITY {
            return Err(CompressError::InvalidConfig(format!(
                "brotli quality must be at most {}, got {}",
                MAX_BROTLI_QUALITY, self.brotli_quality
            )));
        }

        if !(10..=24).contains(&self.brotli_lgwin) {
            return Err(CompressError::InvalidConfig(format!(
                "brotli window must be between 10 and 24, got {}",
                self.brotli_lgwin
            )));
        }

        Ok(())
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self::best()
    }
}

/// Sizes of one buffer before and after each codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeReport {
    pub raw: usize,
    pub gzip: usize,
    pub deflate: usize,
    pub brotli: usize,
}

impl SizeReport {
    /// Compressed size for a codec
    pub fn size_of(&self, codec: Codec) -> usize {
        match codec {
            Codec::Gzip => self.gzip,
            Codec::Deflate => self.deflate,
            Codec::Brotli => self.brotli,
        }
    }

    fn size_of_mut(&mut self, codec: Codec) -> &mut usize {
        match codec {
            Codec::Gzip => &mut self.gzip,
            Codec::Deflate => &mut self.deflate,
            Codec::Brotli => &mut self.brotli,
        }
    }

    /// Bytes gzip framing added on top of the raw DEFLATE stream
    ///
    /// `None` if the gzip stream came out smaller, which only happens when
    /// the two were compressed at different levels.
    pub fn gzip_framing_overhead(&self) -> Option<usize> {
        self.gzip.checked_sub(self.deflate)
    }
}

/// Compression engine applying one config to every buffer
#[derive(Debug, Default)]
pub struct CompressionEngine {
    config: CompressionConfig,
}

impl CompressionEngine {
    /// Create a new compression engine with the given config
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Compress `data` with one codec, returning the finalized stream
    pub fn compress(&self, codec: Codec, data: &[u8]) -> Result<Vec<u8>, CompressError> {
        let compressed = match codec {
            Codec::Gzip => self.compress_gzip(data)?,
            Codec::Deflate => self.compress_deflate(data)?,
            Codec::Brotli => self.compress_brotli(data)?,
        };

        tracing::debug!(
            codec = codec.name(),
            raw = data.len(),
            compressed = compressed.len(),
            "Compressed buffer"
        );
        Ok(compressed)
    }

    /// Compress `data` with every codec and collect the sizes
    ///
    /// The first failure aborts; no partial report is produced.
    pub fn measure(&self, data: &[u8]) -> Result<SizeReport, CompressError> {
        let mut report = SizeReport {
            raw: data.len(),
            ..SizeReport::default()
        };

        for codec in Codec::all() {
            *report.size_of_mut(codec) = self.compress(codec, data)?.len();
        }

        Ok(report)
    }

    fn compress_gzip(&self, data: &[u8]) -> Result<Vec<u8>, CompressError> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.config.gzip_level));
        encoder
            .write_all(data)
            .map_err(|source| CompressError::Write {
                codec: Codec::Gzip,
                source,
            })?;

        encoder.finish().map_err(|source| CompressError::Finish {
            codec: Codec::Gzip,
            source,
        })
    }

    fn compress_deflate(&self, data: &[u8]) -> Result<Vec<u8>, CompressError> {
        use flate2::write::DeflateEncoder;
        use flate2::Compression;

        let mut encoder =
            DeflateEncoder::new(Vec::new(), Compression::new(self.config.deflate_level));
        encoder
            .write_all(data)
            .map_err(|source| CompressError::Write {
                codec: Codec::Deflate,
                source,
            })?;

        encoder.finish().map_err(|source| CompressError::Finish {
            codec: Codec::Deflate,
            source,
        })
    }

    fn compress_brotli(&self, data: &[u8]) -> Result<Vec<u8>, CompressError> {
        let mut compressed = Vec::new();
        self.compress_brotli_into(data, &mut compressed)?;
        Ok(compressed)
    }

    /// Brotli-compress `data` into `sink`, finishing the stream
    ///
    /// Fails if any part of the stream, final meta-block included, could
    /// not be emitted.
    fn compress_brotli_into<W: Write>(
        &self,
        data: &[u8],
        sink: &mut W,
    ) -> Result<(), CompressError> {
        let mut params = brotli::enc::BrotliEncoderParams::default();
        params.quality = self.config.brotli_quality as i32;
        params.lgwin = self.config.brotli_lgwin as i32;

        let mut input = data;
        brotli::BrotliCompress(&mut input, sink, &params)
            .map(|_| ())
            .map_err(|source| CompressError::Finish {
                codec: Codec::Brotli,
                source,
            })
    }
}
