//! codonscan - DNA Codon Analyzer
//!
//! Analyzes DNA sequences from `input.txt` in the working directory,
//! grouping nucleotides into codons and reporting start/stop anomalies,
//! repetition runs, known mutations, and palindromic codons.
//!
//! ## Input files (working directory)
//!
//! - `input.txt`: one DNA sequence per line (required)
//! - `mutations.txt`: one known-mutation codon per line (optional)
//! - `descriptions.txt`: `<codon>:<free text>` lines (optional)

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use codonscan::controller::run;

/// codonscan - analyze DNA sequences from input.txt in the working
/// directory.
///
/// Reference files mutations.txt and descriptions.txt are picked up from
/// the same directory when present. Diagnostics go to stderr; control the
/// verbosity with the RUST_LOG environment variable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn try_main() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    run(Path::new("."), &mut handle).context("failed to write analysis report")?;
    Ok(())
}

fn main() {
    let _args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Unexpected faults end the run with the full error chain instead of a
    // raw panic.
    if let Err(err) = try_main() {
        eprintln!("\nError has happened: {err:?}");
        std::process::exit(1);
    }
}
