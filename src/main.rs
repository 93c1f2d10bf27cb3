// SPDX-License-Identifier: MIT
use std::io::{self, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use encbench::{Bench, CompressionConfig};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("Starting encoding size benchmark");

    let bench = Bench::new(CompressionConfig::best()).context("invalid compression config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench.run(&mut out).context("benchmark run failed")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}
