//! Loading of input sequences and reference data.
//!
//! Three fixed, line-oriented UTF-8 files drive a run, resolved against a
//! base directory:
//!
//! - `input.txt`: one DNA sequence per line (free-form text, filtered to
//!   the nucleotide alphabet later by the segmenter). Required: zero usable
//!   lines halts the run before analysis.
//! - `mutations.txt`: one known-mutation codon per line. Optional.
//! - `descriptions.txt`: `<codon>:<free text>` lines. Optional.
//!
//! Optional files that are missing or unreadable degrade to empty
//! collections with a logged warning; analysis continues with what could
//! be loaded.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Fixed filename for the DNA sequences to analyze.
pub const INPUT_FILE: &str = "input.txt";

/// Fixed filename for the known-mutation codon list.
pub const MUTATIONS_FILE: &str = "mutations.txt";

/// Fixed filename for the codon description map.
pub const DESCRIPTIONS_FILE: &str = "descriptions.txt";

/// Errors that can occur while reading a reference file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{0} was not found")]
    NotFound(String),

    #[error("failed to read {name}: {source}")]
    ReadFailed {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Known-mutation set and description map, read-only after load.
#[derive(Debug, Default)]
pub struct ReferenceData {
    /// Codons considered notable regardless of validity, uppercased.
    pub known_mutations: HashSet<String>,
    /// Free-text explanation per codon, keys uppercased.
    pub descriptions: HashMap<String, String>,
}

/// Reads a line-oriented file, trimming lines and skipping blanks.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(name.clone())
        } else {
            LoadError::ReadFailed {
                name: name.clone(),
                source,
            }
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads an optional reference file, degrading to empty on failure.
fn read_lines_tolerant(path: &Path, what: &str) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => {
            log::info!("Loaded {}: {} lines", path.display(), lines.len());
            lines
        }
        Err(LoadError::NotFound(name)) => {
            log::warn!("{} was not found. {} will be empty.", name, what);
            Vec::new()
        }
        Err(err) => {
            log::warn!("{}. {} will be empty.", err, what);
            Vec::new()
        }
    }
}

/// Parses description lines of the form `<codon>:<free text>`.
///
/// Each line is split at the first colon; the codon key is uppercased and
/// the description trimmed. Lines without a colon are skipped.
pub fn parse_descriptions(lines: &[String]) -> HashMap<String, String> {
    let mut descriptions = HashMap::new();
    for line in lines {
        if let Some((codon, description)) = line.split_once(':') {
            descriptions.insert(
                codon.trim().to_uppercase(),
                description.trim().to_string(),
            );
        }
    }
    descriptions
}

/// Parses mutation lines into a case-normalized codon set.
pub fn parse_mutations(lines: &[String]) -> HashSet<String> {
    lines
        .iter()
        .map(|line| line.trim().to_uppercase())
        .filter(|codon| !codon.is_empty())
        .collect()
}

/// Loads the known-mutation set and description map from a base directory.
///
/// Both files are optional; absence or read failure yields empty
/// collections and a warning, never an error.
pub fn load_references(dir: &Path) -> ReferenceData {
    let desc_lines = read_lines_tolerant(&dir.join(DESCRIPTIONS_FILE), "Descriptions");
    let mut_lines = read_lines_tolerant(&dir.join(MUTATIONS_FILE), "Mutations");

    ReferenceData {
        known_mutations: parse_mutations(&mut_lines),
        descriptions: parse_descriptions(&desc_lines),
    }
}

/// Loads the DNA sequence lines from a base directory.
///
/// Returns an empty vector when the file is missing or unreadable; the
/// caller decides whether that halts the run.
pub fn load_sequences(dir: &Path) -> Vec<String> {
    read_lines_tolerant(&dir.join(INPUT_FILE), "Sequences")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_descriptions_splits_at_first_colon() {
        let parsed = parse_descriptions(&lines(&[
            "TAA: premature termination",
            "tga : selenocysteine context: rare",
        ]));

        assert_eq!(parsed.get("TAA").unwrap(), "premature termination");
        // Split at the first colon only; the rest stays in the description
        assert_eq!(parsed.get("TGA").unwrap(), "selenocysteine context: rare");
    }

    #[test]
    fn test_parse_descriptions_skips_lines_without_colon() {
        let parsed = parse_descriptions(&lines(&["no colon here", "ATG:start"]));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("ATG").unwrap(), "start");
    }

    #[test]
    fn test_parse_mutations_normalizes_case() {
        let parsed = parse_mutations(&lines(&["taa", "GGG", " tga "]));
        assert!(parsed.contains("TAA"));
        assert!(parsed.contains("GGG"));
        assert!(parsed.contains("TGA"));
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn test_read_lines_trims_and_skips_blanks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "  ATGTAA  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "GGGCCC").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["ATGTAA", "GGGCCC"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_lines(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_load_references_tolerates_missing_files() {
        let dir = tempdir().unwrap();
        let refs = load_references(dir.path());
        assert!(refs.known_mutations.is_empty());
        assert!(refs.descriptions.is_empty());
    }

    #[test]
    fn test_load_references_from_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(MUTATIONS_FILE), "tag\nGGG\n").unwrap();
        std::fs::write(
            dir.path().join(DESCRIPTIONS_FILE),
            "TAG: amber stop\nmalformed line\n",
        )
        .unwrap();

        let refs = load_references(dir.path());
        assert!(refs.known_mutations.contains("TAG"));
        assert!(refs.known_mutations.contains("GGG"));
        assert_eq!(refs.descriptions.get("TAG").unwrap(), "amber stop");
        assert_eq!(refs.descriptions.len(), 1);
    }
}
