//! Error types for puzzle generation with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G004) for documentation lookup:
//!
//! - G001: `SourceUnavailable` (Word-list file could not be read)
//! - G002: `InvalidGridSize` (Grid side length below 1)
//! - G003: `InvalidMaxAttempts` (Placement attempt budget below 1)
//! - G004: `WriteFailed` (Rendered puzzle could not be written to disk)
//!
//! Note what is deliberately *not* here: a word that fails to place is never
//! an error. Unplaceable words land in the skipped set and generation
//! continues, so the engine has no failure path of its own once it has been
//! constructed with valid parameters.
//!
//! # Example
//!
//! ```
//! use gridseek::errors::PuzzleError;
//! use gridseek::word_list::WordList;
//!
//! match WordList::load_from_path("no/such/file.txt") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Loaded"),
//! }
//! ```

use std::io;

/// Unified error type for the generation pipeline.
///
/// Everything here is a pre-engine or post-engine concern: bad construction
/// parameters, an unreadable word source, or a failed write of the finished
/// document. Callers only need to handle a single `Result<_, PuzzleError>`.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The word-list source could not be read. This is a collaborator-level
    /// I/O failure, raised before the engine is ever constructed.
    #[error("word list unavailable at '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The requested grid side length cannot hold a puzzle.
    #[error("grid size must be at least 1 (got {size})")]
    InvalidGridSize { size: usize },

    /// A zero attempt budget would make every placement fail without trying.
    #[error("max attempts must be at least 1")]
    InvalidMaxAttempts,

    /// The rendered puzzle document could not be written.
    #[error("failed to write puzzle to '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::SourceUnavailable { .. } => "G001",
            PuzzleError::InvalidGridSize { .. } => "G002",
            PuzzleError::InvalidMaxAttempts => "G003",
            PuzzleError::WriteFailed { .. } => "G004",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::SourceUnavailable { .. } => {
                Some("Supply a readable text file with one word per line (see --word-list)")
            }
            PuzzleError::InvalidGridSize { .. } => {
                Some("Pass a positive side length, e.g. --grid-size 28")
            }
            PuzzleError::InvalidMaxAttempts => {
                Some("Pass a positive attempt budget, e.g. --max-attempts 1000")
            }
            PuzzleError::WriteFailed { .. } => {
                Some("Check that the output directory is writable (see --output-dir)")
            }
        }
    }

    /// Formats the error with code and help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        if let Some(help) = self.help() {
            format!("{self} ({})\n{help}", self.code())
        } else {
            format!("{self} ({})", self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<PuzzleError> {
        vec![
            PuzzleError::SourceUnavailable {
                path: "words.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            PuzzleError::InvalidGridSize { size: 0 },
            PuzzleError::InvalidMaxAttempts,
            PuzzleError::WriteFailed {
                path: "puzzles/puzzle-1.txt".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ]
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_errors() {
            let code = err.code();
            assert!(code.starts_with('G'), "code '{code}' should start with 'G'");
            assert!(codes.insert(code), "duplicate error code: {code}");
        }
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in sample_errors() {
            let detailed = err.display_detailed();
            assert!(
                detailed.contains(err.code()),
                "detailed display should include the error code"
            );
            assert!(
                detailed.contains(&err.to_string()),
                "detailed display should include the base message"
            );
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_error_messages_include_offending_values() {
        let err = PuzzleError::InvalidGridSize { size: 0 };
        assert!(err.to_string().contains('0'));

        let err = PuzzleError::SourceUnavailable {
            path: "data/words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("data/words.txt"));
    }
}
