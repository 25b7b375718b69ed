//! Per-sequence rule evaluation.
//!
//! One sequence's codons are run through a fixed rule set, in order:
//!
//! 1. Start codon check (ATG expected at position 0)
//! 2. Stop codon check (premature stops, terminal stop, total count)
//! 3. Internal start check (ATG anywhere past position 0)
//! 4. Repetition run check (medium >= 10, severe >= 20; both can fire)
//! 5. Per-codon pass: frequency tally, invalid codons, known mutations,
//!    palindrome collection
//!
//! Every condition is modeled as a [`Finding`], never as an error; under
//! normal string input this module does not fail.

use std::collections::HashSet;
use std::fmt;

use crate::codon::{is_palindromic, is_stop, is_valid, START_CODON};
use crate::reference::ReferenceData;
use crate::segment::Segmented;
use crate::stats::RunStats;

/// Repetition run length that triggers the medium warning.
pub const MEDIUM_RUN: usize = 10;

/// Repetition run length that triggers the severe finding.
pub const SEVERE_RUN: usize = 20;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Expected structure confirmed, or a neutral count.
    Info,
    /// Suspicious but not a mutation signal by itself.
    Warning,
    /// A mutation-like anomaly.
    Mutation,
}

/// One analytical observation about a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The line yielded no codons at all; no further checks ran.
    NoValidCodons,
    /// The sequence starts with ATG.
    StartCodonPresent,
    /// The first codon is not ATG.
    StartCodonMissing { found: String },
    /// Stop codons occur before the final position (0-based indices).
    PrematureStops { positions: Vec<usize> },
    /// No stop codon anywhere in the sequence.
    NoStopCodon,
    /// The final codon is a stop codon and nothing trails it.
    TerminalStop,
    /// The final full codon is a stop codon, but leftover nucleotides
    /// follow it.
    TerminalStopWithLeftover,
    /// Stop codons exist but the sequence does not end with one.
    MissingTerminalStop,
    /// Total number of stop codons found.
    StopCodonTotal { count: usize },
    /// ATG occurs past position 0.
    InternalStart,
    /// Longest run of identical consecutive codons reached the medium
    /// threshold.
    MediumRepetition { run: usize },
    /// Longest run reached the severe threshold.
    SevereRepetition { run: usize },
    /// A codon that is neither a stop codon nor valid; only possible if
    /// the segmentation contract was violated upstream.
    InvalidCodon { codon: String },
    /// A codon listed in the known-mutation reference.
    KnownMutation {
        codon: String,
        description: Option<String>,
    },
}

impl Finding {
    /// Severity classification of this finding.
    pub fn severity(&self) -> Severity {
        match self {
            Finding::StartCodonPresent
            | Finding::TerminalStop
            | Finding::StopCodonTotal { .. } => Severity::Info,
            Finding::NoValidCodons
            | Finding::TerminalStopWithLeftover
            | Finding::InternalStart
            | Finding::MediumRepetition { .. } => Severity::Warning,
            Finding::StartCodonMissing { .. }
            | Finding::PrematureStops { .. }
            | Finding::NoStopCodon
            | Finding::MissingTerminalStop
            | Finding::SevereRepetition { .. }
            | Finding::InvalidCodon { .. }
            | Finding::KnownMutation { .. } => Severity::Mutation,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NoValidCodons => write!(f, "No valid codons found"),
            Finding::StartCodonPresent => write!(f, "Valid start codon ATG found"),
            Finding::StartCodonMissing { found } => {
                write!(f, "Mutation! Expected ATG but found: {}", found)
            }
            Finding::PrematureStops { positions } => {
                write!(
                    f,
                    "Mutation! Premature stop codon found at codon index(es): {:?}",
                    positions
                )
            }
            Finding::NoStopCodon => {
                write!(f, "Mutation! No stop codon found (TAA/TAG/TGA).")
            }
            Finding::TerminalStop => write!(f, "Valid stop codon at the end."),
            Finding::TerminalStopWithLeftover => write!(
                f,
                "Stop codon is last full codon, but extra nucleotides remain after it (incomplete codon)."
            ),
            Finding::MissingTerminalStop => {
                write!(f, "Mutation! Sequence does not end with a stop codon.")
            }
            Finding::StopCodonTotal { count } => {
                write!(f, "Stop codons found: {}", count)
            }
            Finding::InternalStart => {
                write!(f, "Warning! Internal start codon ATG found.")
            }
            Finding::MediumRepetition { run } => {
                write!(f, "Warning! Medium codon repetition detected (run of {}).", run)
            }
            Finding::SevereRepetition { run } => {
                write!(
                    f,
                    "Severe mutation pattern detected! Extreme repetition (run of {}).",
                    run
                )
            }
            Finding::InvalidCodon { codon } => {
                write!(f, "Invalid codon found: {}", codon)
            }
            Finding::KnownMutation { codon, .. } => {
                write!(f, "Known mutation found: {}", codon)
            }
        }
    }
}

/// Returns the longest run of identical consecutive codons.
///
/// A single codon with no repeats counts as a run of 1; an empty list
/// yields 0.
fn longest_run(codons: &[String]) -> usize {
    if codons.is_empty() {
        return 0;
    }
    let mut max_run = 1;
    let mut current = 1;
    for window in codons.windows(2) {
        if window[0] == window[1] {
            current += 1;
            max_run = max_run.max(current);
        } else {
            current = 1;
        }
    }
    max_run
}

/// Runs the full rule set over one segmented sequence.
///
/// Findings come back in evaluation order; the frequency tally and
/// palindrome occurrences go into `stats`, shared across the run.
pub fn analyze_sequence(
    seq: &Segmented,
    refs: &ReferenceData,
    stats: &mut RunStats,
) -> Vec<Finding> {
    let codons = &seq.codons;
    let mut findings = Vec::new();

    if codons.is_empty() {
        findings.push(Finding::NoValidCodons);
        return findings;
    }

    // 1. Start codon
    if codons[0] == START_CODON {
        findings.push(Finding::StartCodonPresent);
    } else {
        findings.push(Finding::StartCodonMissing {
            found: codons[0].clone(),
        });
    }

    // 2. Stop codons
    let last_index = codons.len() - 1;
    let stop_positions: Vec<usize> = codons
        .iter()
        .enumerate()
        .filter(|(_, codon)| is_stop(codon))
        .map(|(i, _)| i)
        .collect();
    let premature_positions: Vec<usize> = stop_positions
        .iter()
        .copied()
        .filter(|&i| i != last_index)
        .collect();

    if stop_positions.is_empty() {
        findings.push(Finding::NoStopCodon);
    } else {
        if !premature_positions.is_empty() {
            findings.push(Finding::PrematureStops {
                positions: premature_positions.clone(),
            });
        }

        if is_stop(&codons[last_index]) {
            if seq.remainder == 0 {
                findings.push(Finding::TerminalStop);
            } else {
                findings.push(Finding::TerminalStopWithLeftover);
            }
        } else {
            findings.push(Finding::MissingTerminalStop);
        }

        findings.push(Finding::StopCodonTotal {
            count: stop_positions.len(),
        });
    }

    // 3. Internal start
    if codons[1..].iter().any(|codon| codon == START_CODON) {
        findings.push(Finding::InternalStart);
    }

    // 4. Repetition runs; both thresholds can fire
    let max_run = longest_run(codons);
    if max_run >= MEDIUM_RUN {
        findings.push(Finding::MediumRepetition { run: max_run });
    }
    if max_run >= SEVERE_RUN {
        findings.push(Finding::SevereRepetition { run: max_run });
    }

    // 5. Per-codon pass. Stop codons are reported as known mutations only
    // when this occurrence sits at a premature position; non-stop codons
    // are reported wherever they occur.
    let premature_stop_codons: HashSet<&str> = premature_positions
        .iter()
        .map(|&i| codons[i].as_str())
        .collect();

    for codon in codons {
        stats.tally(codon);

        if !is_stop(codon) && !is_valid(codon) {
            findings.push(Finding::InvalidCodon {
                codon: codon.clone(),
            });
        }

        if refs.known_mutations.contains(codon) {
            let flagged = if is_stop(codon) {
                premature_stop_codons.contains(codon.as_str())
            } else {
                true
            };
            if flagged {
                findings.push(Finding::KnownMutation {
                    codon: codon.clone(),
                    description: refs.descriptions.get(codon).cloned(),
                });
            }
        }

        if is_palindromic(codon) {
            stats.add_palindrome(codon);
        }
    }

    findings
}
