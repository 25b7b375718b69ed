//! Run-wide accumulation state.
//!
//! `RunStats` collects the codon frequency table and the palindrome
//! occurrence list across all sequences of a run. It is passed explicitly
//! to each sequence-analysis call rather than living as ambient mutable
//! state, so the pipeline stays composable and testable per sequence.

/// Aggregated statistics for one analysis run.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Codon occurrence counts in first-encountered order.
    counts: Vec<(String, u32)>,
    /// Every palindromic codon occurrence, in encounter order.
    palindromes: Vec<String>,
}

impl RunStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the occurrence count for a codon.
    ///
    /// First occurrence of a codon appends it, so the underlying table
    /// preserves insertion order for stable tie-breaking when sorted.
    pub fn tally(&mut self, codon: &str) {
        if let Some(entry) = self.counts.iter_mut().find(|(c, _)| c == codon) {
            entry.1 += 1;
        } else {
            self.counts.push((codon.to_string(), 1));
        }
    }

    /// Records one palindromic codon occurrence.
    pub fn add_palindrome(&mut self, codon: &str) {
        self.palindromes.push(codon.to_string());
    }

    /// Returns all palindromic occurrences in encounter order.
    pub fn palindromes(&self) -> &[String] {
        &self.palindromes
    }

    /// Returns the total number of codons tallied across the run.
    pub fn total_codons(&self) -> u64 {
        self.counts.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Returns true if no codons have been tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the frequency table sorted by descending count.
    ///
    /// Ties keep first-encountered order: the sort is stable and the
    /// underlying table preserves insertion order.
    pub fn by_frequency(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(codon, count)| (codon.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
