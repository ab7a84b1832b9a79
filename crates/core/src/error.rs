//! Error types for the confedit document store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Every error here is recoverable: a failed operation
//! leaves the store exactly as it was, and the Display message is suitable
//! for surfacing directly to a presentation layer.

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error raised by path-addressed mutations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The mutation path had no segments
    #[error("path is empty")]
    EmptyPath,

    /// An intermediate segment holds a non-mapping value
    ///
    /// Writing through such a value would destroy it; the operation is
    /// rejected instead.
    #[error("expected a mapping at '{at}', found {found}")]
    Conflict {
        /// Dotted path to the non-mapping value
        at: String,
        /// Type name of the value found there
        found: &'static str,
    },

    /// The path did not resolve to a sequence
    #[error("expected a sequence at '{at}', found {found}")]
    NotASequence {
        /// Dotted path that was addressed
        at: String,
        /// Type name of the value found, or "no value"
        found: &'static str,
    },

    /// Sequence index out of bounds
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The sequence length
        len: usize,
    },
}

/// Error raised when parsing a dotted path string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Empty key segment at the given position
    #[error("empty key in path at segment {0}")]
    EmptySegment(usize),
}

/// Top-level error for Document Store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Raw text was not syntactically valid
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// A path-addressed mutation failed
    #[error(transparent)]
    Path(#[from] PathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_display() {
        assert_eq!(PathError::EmptyPath.to_string(), "path is empty");
    }

    #[test]
    fn test_conflict_display() {
        let err = PathError::Conflict {
            at: "source.path".to_string(),
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "expected a mapping at 'source.path', found string"
        );
    }

    #[test]
    fn test_not_a_sequence_display() {
        let err = PathError::NotASequence {
            at: "testcases".to_string(),
            found: "no value",
        };
        assert_eq!(
            err.to_string(),
            "expected a sequence at 'testcases', found no value"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = PathError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(err.to_string(), "index out of range: 3 >= 3");
    }

    #[test]
    fn test_store_error_from_path_error() {
        let err: StoreError = PathError::EmptyPath.into();
        assert!(matches!(err, StoreError::Path(PathError::EmptyPath)));
        // Transparent: the message passes through unchanged
        assert_eq!(err.to_string(), "path is empty");
    }

    #[test]
    fn test_parse_display() {
        let err = StoreError::Parse("expected value at line 1 column 2".to_string());
        assert!(err.to_string().starts_with("invalid JSON:"));
    }
}
