// SPDX-License-Identifier: MIT
//! Report formatting

use crate::compression::{Codec, SizeReport};
use std::fmt;
use std::io::Write;

/// Header line printed before the per-format lines
pub const HEADER: &str = "Byte sizes (smaller is better):";

/// Minimum label column width
pub const LABEL_WIDTH: usize = 10;

/// Minimum size column width
pub const SIZE_WIDTH: usize = 4;

/// Sizes for one encoded buffer, tagged with its format label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledReport {
    pub label: &'static str,
    pub sizes: SizeReport,
}

impl LabeledReport {
    pub fn new(label: &'static str, sizes: SizeReport) -> Self {
        Self { label, sizes }
    }
}

impl fmt::Display for LabeledReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<lw$}  raw={:>sw$}",
            self.label,
            self.sizes.raw,
            lw = LABEL_WIDTH,
            sw = SIZE_WIDTH,
        )?;

        for codec in Codec::all() {
            write!(
                f,
                "  {}={:>sw$}",
                codec.name(),
                self.sizes.size_of(codec),
                sw = SIZE_WIDTH,
            )?;
        }

        Ok(())
    }
}

/// Write the header line
pub fn write_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER)
}

/// Write one report line
pub fn write_line<W: Write>(out: &mut W, report: &LabeledReport) -> std::io::Result<()> {
    writeln!(out, "{}", report)
}
