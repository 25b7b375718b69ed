//! Codon alphabet and classification rules.
//!
//! This module defines:
//! - The nucleotide alphabet filter ({A, T, G, C}, case-insensitive)
//! - Stop codon membership (TAA, TAG, TGA)
//! - The valid/stop/invalid classification used by the analyzer
//! - The palindromic codon test

/// Length of a codon in nucleotides.
pub const CODON_LEN: usize = 3;

/// The expected start codon at sequence position 0.
pub const START_CODON: &str = "ATG";

/// The three stop codons of the standard genetic code.
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Returns true if the character denotes a nucleotide (A, T, G, or C),
/// case-insensitively. Everything else is discarded before segmentation.
pub fn is_nucleotide(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C')
}

/// Returns true if the codon is a stop codon (TAA, TAG, or TGA).
pub fn is_stop(codon: &str) -> bool {
    STOP_CODONS.contains(&codon)
}

/// Returns true if the codon is a valid non-stop codon.
///
/// Stop codons are deliberately excluded from "valid": the rule set keeps
/// stop, valid, and invalid as mutually exclusive categories feeding
/// distinct downstream checks.
pub fn is_valid(codon: &str) -> bool {
    codon.len() == CODON_LEN && !is_stop(codon)
}

/// Returns true if the codon is palindromic, i.e. its first and last
/// nucleotide are identical (e.g. "ATA", "AAA"; not "ATG").
pub fn is_palindromic(codon: &str) -> bool {
    let bytes = codon.as_bytes();
    bytes.len() == CODON_LEN && bytes.first() == bytes.last()
}
