//! Console report rendering.
//!
//! The report structure is fixed: a banner, one section per sequence with
//! its findings in rule order, then the aggregate results (palindrome
//! occurrences, total count, and the frequency table sorted by descending
//! count). All writers are generic over [`io::Write`] so tests can render
//! into a buffer.

use std::io::{self, Write};

use crate::analyze::Finding;
use crate::codon::CODON_LEN;
use crate::stats::RunStats;

/// Writes the run banner.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "DNA SEQUENCE ANALYZER")
}

/// Writes the header opening the per-sequence sections.
pub fn write_analysis_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "SEQUENCE ANALYSIS")
}

/// Writes the section header for one sequence (1-based numbering).
pub fn write_sequence_header(out: &mut impl Write, number: usize) -> io::Result<()> {
    writeln!(out, "\nAnalyzing sequence #{}:", number)
}

/// Writes one sequence's findings in the order they were produced.
///
/// A known-mutation description, when present, follows its finding on an
/// indented arrow line.
pub fn write_findings(out: &mut impl Write, findings: &[Finding]) -> io::Result<()> {
    for finding in findings {
        writeln!(out, "{}", finding)?;
        if let Finding::KnownMutation {
            description: Some(description),
            ..
        } = finding
        {
            writeln!(out, "     \u{2192} {}", description)?;
        }
    }
    Ok(())
}

/// Writes the final aggregate report.
pub fn write_summary(out: &mut impl Write, stats: &RunStats) -> io::Result<()> {
    writeln!(out, "ANALYSIS RESULTS")?;

    writeln!(out, "\nPalindrome codons found:")?;
    if stats.palindromes().is_empty() {
        writeln!(out, "  No palindrome codons found.")?;
    } else {
        for (i, codon) in stats.palindromes().iter().enumerate() {
            writeln!(out, "  {}. {} - nucleotides: {}", i + 1, codon, CODON_LEN)?;
        }
    }

    writeln!(out, "\nTotal palindrome codons: {}", stats.palindromes().len())?;

    writeln!(out, "Codon frequency in sequence:")?;
    if stats.is_empty() {
        writeln!(out, "  No codons to display.")?;
    } else {
        for (codon, count) in stats.by_frequency() {
            writeln!(out, "  {} \u{2192} {} time(s)", codon, count)?;
        }
    }

    Ok(())
}
