use anyhow::Result;
use clap::Parser;
use kvgen::commands::generate;
use kvgen::validation::{clap_block_name_validator, clap_count_validator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kvgen")]
#[command(about = "KeyValues test fixture generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Destination file (parent directory must exist)
    #[arg(short, long, default_value = "large_test.kv")]
    output: PathBuf,

    /// Number of entries to emit (0 produces an empty block)
    #[arg(short = 'n', long, default_value = "9999999", value_parser = clap_count_validator)]
    count: u64,

    /// Name of the top-level block
    #[arg(long, default_value = "test", value_parser = clap_block_name_validator)]
    name: String,

    /// Suppress the summary line on success
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    generate::execute(cli.output, cli.name, cli.count, cli.quiet)
}
