//! Orchestration of one analysis run.
//!
//! Wires the pipeline together: load references and sequences, segment and
//! analyze each line in input order, then render the aggregate report. All
//! per-sequence conditions are findings in the output; the only early exit
//! is `input.txt` yielding zero usable lines, which prints guidance and
//! returns without a report.

use std::io::{self, Write};
use std::path::Path;

use crate::analyze::analyze_sequence;
use crate::reference::{load_references, load_sequences};
use crate::report::{
    write_analysis_header, write_banner, write_findings, write_sequence_header, write_summary,
};
use crate::segment::extract_codons;
use crate::stats::RunStats;

/// Runs the full analysis against the fixed input files in `dir`, writing
/// the report to `out`.
///
/// Missing `mutations.txt` or `descriptions.txt` degrade to empty
/// references; an empty or missing `input.txt` ends the run after printing
/// guidance.
pub fn run(dir: &Path, out: &mut impl Write) -> io::Result<()> {
    write_banner(out)?;

    let refs = load_references(dir);
    let sequences = load_sequences(dir);

    if sequences.is_empty() {
        writeln!(out, "\nError: no sequences to analyze")?;
        writeln!(out, "Please create input.txt with DNA sequences.")?;
        return Ok(());
    }

    write_analysis_header(out)?;

    let mut stats = RunStats::new();
    for (number, line) in sequences.iter().enumerate() {
        write_sequence_header(out, number + 1)?;

        let segmented = extract_codons(line);
        let findings = analyze_sequence(&segmented, &refs, &mut stats);
        write_findings(out, &findings)?;
    }

    writeln!(out)?;
    write_summary(out, &stats)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{DESCRIPTIONS_FILE, INPUT_FILE, MUTATIONS_FILE};
    use tempfile::tempdir;

    fn run_in(dir: &Path) -> String {
        let mut buf = Vec::new();
        run(dir, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_missing_input_prints_guidance() {
        let dir = tempdir().unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("DNA SEQUENCE ANALYZER"));
        assert!(output.contains("Error: no sequences to analyze"));
        assert!(output.contains("Please create input.txt with DNA sequences."));
        // No report is produced
        assert!(!output.contains("ANALYSIS RESULTS"));
    }

    #[test]
    fn test_blank_input_prints_guidance() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "\n   \n\n").unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("Error: no sequences to analyze"));
    }

    #[test]
    fn test_end_to_end_healthy_sequence() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "ATGAAATAAXYZ123\n").unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("Analyzing sequence #1:"));
        assert!(output.contains("Valid start codon ATG found"));
        assert!(output.contains("Valid stop codon at the end."));
        assert!(output.contains("Stop codons found: 1"));
        assert!(output.contains("  1. AAA - nucleotides: 3"));
        assert!(output.contains("  2. TAA - nucleotides: 3"));
        assert!(output.contains("Total palindrome codons: 2"));
        assert!(output.contains("ATG \u{2192} 1 time(s)"));
    }

    #[test]
    fn test_end_to_end_mutated_sequence() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "TAAATGATG\n").unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("Mutation! Expected ATG but found: TAA"));
        assert!(output.contains("Mutation! Premature stop codon found at codon index(es): [0]"));
        assert!(output.contains("Mutation! Sequence does not end with a stop codon."));
        assert!(output.contains("Warning! Internal start codon ATG found."));
    }

    #[test]
    fn test_end_to_end_with_references() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "ATGGGGTAA\n").unwrap();
        std::fs::write(dir.path().join(MUTATIONS_FILE), "ggg\n").unwrap();
        std::fs::write(dir.path().join(DESCRIPTIONS_FILE), "GGG: glycine marker\n").unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("Known mutation found: GGG"));
        assert!(output.contains("     \u{2192} glycine marker"));
    }

    #[test]
    fn test_sequences_processed_in_input_order() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "ATGTAA\nXYZ\nATGAAA\n").unwrap();
        let output = run_in(dir.path());

        let first = output.find("Analyzing sequence #1:").unwrap();
        let second = output.find("Analyzing sequence #2:").unwrap();
        let third = output.find("Analyzing sequence #3:").unwrap();
        assert!(first < second && second < third);

        // The junk line yields a single no-valid-codons finding
        assert!(output.contains("No valid codons found"));
        // The third sequence has no stop codon
        assert!(output.contains("Mutation! No stop codon found (TAA/TAG/TGA)."));
    }

    #[test]
    fn test_frequency_totals_across_sequences() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_FILE), "ATGTAA\nATGAAATAA\n").unwrap();
        let output = run_in(dir.path());

        assert!(output.contains("ATG \u{2192} 2 time(s)"));
        assert!(output.contains("TAA \u{2192} 2 time(s)"));
        assert!(output.contains("AAA \u{2192} 1 time(s)"));
    }
}
