//! Generate command - stream a KeyValues fixture file to disk.

use crate::fixture::{self, BlockSpec};
use crate::utils::format_bytes;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the generate command.
///
/// `count` is the exact number of entries to emit (zero is allowed).
/// On success prints a one-line summary unless `quiet` is set; on any
/// I/O failure the error propagates and a partially written file may
/// remain at `output`.
pub fn execute(output: PathBuf, name: String, count: u64, quiet: bool) -> Result<()> {
    let spec = BlockSpec::new(name, count)?;

    let started = Instant::now();
    let report = fixture::generate(&spec, &output)
        .with_context(|| format!("Failed to generate fixture at {}", output.display()))?;
    let elapsed = started.elapsed();

    if !quiet {
        println!(
            "{} Wrote {} entries ({}) to {} in {:.2?}",
            "✓".green().bold(),
            report.entries,
            format_bytes(report.bytes),
            output.display(),
            elapsed
        );
    }

    Ok(())
}
