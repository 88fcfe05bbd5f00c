//! `word_list` — Module to load the word source a puzzle draws from.
//!
//! The expected format is the simplest possible: one word per line. Parsing
//! trims surrounding whitespace and drops blank lines, and that is all.
//! Casing is left alone here because the placement engine uppercases on
//! entry, and file order is preserved because the engine does its own
//! sampling and sorting.
//!
//! A missing or unreadable file is the one hard failure in the whole input
//! path, surfaced as [`PuzzleError::SourceUnavailable`] before any engine is
//! constructed. An empty (but readable) file is *not* an error: generation
//! with zero words is a valid degenerate run that produces an all-noise grid.

use crate::errors::PuzzleError;

/// A processed, ready-to-use word list.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Non-empty trimmed words, in file order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string, one word per line.
    ///
    /// Lines are trimmed; blank lines are skipped. Order is preserved.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        WordList { words }
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    /// Returns [`PuzzleError::SourceUnavailable`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, PuzzleError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| PuzzleError::SourceUnavailable {
            path: path_ref.display().to_string(),
            source: e,
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Number of words in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "sun\nmoon\nstar";
        let list = WordList::parse_from_str(input);

        assert_eq!(list.words, vec!["sun", "moon", "star"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = "  sun  \n\tmoon\t\nstar\r\n";
        let list = WordList::parse_from_str(input);

        assert_eq!(list.words, vec!["sun", "moon", "star"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let input = "sun\n\n   \nmoon\n\n";
        let list = WordList::parse_from_str(input);

        assert_eq!(list.words, vec!["sun", "moon"]);
    }

    #[test]
    fn test_parse_preserves_file_order_and_case() {
        let input = "Zebra\napple\nMANGO";
        let list = WordList::parse_from_str(input);

        // no sorting, no case normalization; the engine handles both
        assert_eq!(list.words, vec!["Zebra", "apple", "MANGO"]);
    }

    #[test]
    fn test_parse_empty_input_is_valid() {
        let list = WordList::parse_from_str("");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_load_missing_file_reports_source_unavailable() {
        let err = WordList::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "G001");
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
