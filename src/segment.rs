//! Codon segmentation of raw input lines.
//!
//! A raw line may contain arbitrary text (annotations, digits, whitespace).
//! Segmentation uppercases every character, keeps only nucleotides in their
//! original order, and splits the cleaned string into consecutive
//! non-overlapping triplets. Trailing nucleotides that do not form a full
//! codon are dropped from the codon list and reported as the remainder.

use crate::codon::{is_nucleotide, CODON_LEN};

/// The codons extracted from one input line, plus the count of leftover
/// nucleotides (0-2) that did not form a full codon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    /// Full codons in input order; every entry is exactly 3 characters.
    pub codons: Vec<String>,
    /// Leftover nucleotide count after the last full codon.
    pub remainder: usize,
}

impl Segmented {
    /// Returns true if the line yielded no codons at all.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

/// Cleans a raw line to the nucleotide alphabet and splits it into codons.
///
/// A line with no valid nucleotide characters produces an empty codon list
/// with remainder 0; callers treat this as "nothing to analyze", not an
/// error. A nonzero remainder is logged as a diagnostic, not reported as a
/// finding.
pub fn extract_codons(line: &str) -> Segmented {
    let cleaned: String = line
        .chars()
        .filter(|&c| is_nucleotide(c))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return Segmented {
            codons: Vec::new(),
            remainder: 0,
        };
    }

    let chars: Vec<char> = cleaned.chars().collect();
    let mut codons = Vec::with_capacity(chars.len() / CODON_LEN);
    let mut pos = 0;
    while pos + CODON_LEN <= chars.len() {
        codons.push(chars[pos..pos + CODON_LEN].iter().collect());
        pos += CODON_LEN;
    }

    let remainder = chars.len() % CODON_LEN;
    if remainder != 0 {
        log::warn!(
            "Incomplete codon found ({} nucleotide(s) remaining)",
            remainder
        );
    }

    Segmented { codons, remainder }
}
