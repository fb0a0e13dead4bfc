//! Fixture core - the KeyValues block model and the streaming writer.
//!
//! A fixture file is one top-level named block holding a run of
//! `"key_i" "value i"` entry lines, one per line, tab-indented:
//!
//! ```text
//! test
//! {
//! 	"key_1" "value 1"
//! 	"key_2" "value 2"
//! }
//! ```
//!
//! Entries are produced lazily and written as they are produced, so peak
//! memory stays bounded no matter how large the requested count is.

use crate::validation::validate_block_name;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffer size for the output stream. Entry lines are short, so a modest
/// buffer amortizes syscalls without holding much memory.
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// One key-value entry line within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Specification of a single top-level block: its name and how many
/// entries it holds.
///
/// `count` is inclusive: requesting `count` entries yields indices
/// `1..=count`. A count of zero is valid and produces a block with only
/// the header and footer lines.
#[derive(Debug, Clone)]
pub struct BlockSpec {
    name: String,
    count: u64,
}

impl BlockSpec {
    /// Create a block spec, rejecting names that would corrupt the
    /// unescaped output format.
    pub fn new(name: impl Into<String>, count: u64) -> Result<Self> {
        let name = name.into();
        validate_block_name(&name)?;
        Ok(Self { name, count })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Lazily produce the block's entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        (1..=self.count).map(|i| Entry {
            key: format!("key_{i}"),
            value: format!("value {i}"),
        })
    }

    /// Stream the full block to `out`: header, entry lines, footer.
    /// Returns the number of entries written.
    ///
    /// Output ordering and content are independent of any buffering the
    /// caller wraps around `out`. A failure part-way through leaves
    /// whatever was already flushed; atomicity is the caller's concern.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<u64> {
        out.write_all(self.name.as_bytes())?;
        out.write_all(b"\n{\n")?;

        let mut written = 0u64;
        for entry in self.entries() {
            writeln!(out, "\t\"{}\" \"{}\"", entry.key, entry.value)?;
            written += 1;
        }

        out.write_all(b"}\n")?;
        Ok(written)
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateReport {
    pub entries: u64,
    pub bytes: u64,
}

/// Generate the fixture file at `path`, creating or truncating it.
///
/// The parent directory must already exist. Any I/O failure aborts the
/// run; a partially written file is left behind in that case.
pub fn generate(spec: &BlockSpec, path: &Path) -> Result<GenerateReport> {
    tracing::debug!(
        name = spec.name(),
        count = spec.count(),
        path = %path.display(),
        "generating fixture"
    );

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let entries = spec
        .write_to(&mut writer)
        .with_context(|| format!("Failed to write fixture to {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to flush fixture to {}", path.display()))?;

    let bytes = writer
        .get_ref()
        .metadata()
        .with_context(|| format!("Failed to stat output file: {}", path.display()))?
        .len();

    tracing::debug!(entries, bytes, "fixture written");

    Ok(GenerateReport { entries, bytes })
}
