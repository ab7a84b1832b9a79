//! Typed paths into a Document
//!
//! A FieldPath addresses a location in a document by descending through
//! mapping keys. Paths are built once, up front, from typed segments or a
//! dotted string, instead of being concatenated ad hoc at each call site.
//!
//! Sequences are not addressable by path segment. Elements of a sequence
//! are reached by passing the path of the sequence itself to the dedicated
//! array operations together with an index.

use crate::error::PathParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A path into a Document
///
/// Ordered sequence of mapping-key segments. The empty path is the root.
///
/// # Examples
///
/// ```
/// use confedit_core::FieldPath;
///
/// // Build from typed segments
/// let path = FieldPath::root().key("source").key("format");
/// assert_eq!(path.len(), 2);
///
/// // Parse from a dotted string
/// let parsed: FieldPath = "source.format".parse().unwrap();
/// assert_eq!(parsed, path);
///
/// // Parent and last segment
/// assert_eq!(path.parent().unwrap(), FieldPath::root().key("source"));
/// assert_eq!(path.last_segment(), Some("format"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        FieldPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of key segments
    ///
    /// Fails with [`PathParseError::EmptySegment`] if any segment is the
    /// empty string.
    pub fn from_segments(segments: Vec<String>) -> Result<Self, PathParseError> {
        for (i, seg) in segments.iter().enumerate() {
            if seg.is_empty() {
                return Err(PathParseError::EmptySegment(i));
            }
        }
        Ok(FieldPath { segments })
    }

    /// Append a key segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the parent path (None if root)
    pub fn parent(&self) -> Option<FieldPath> {
        if self.segments.is_empty() {
            None
        } else {
            let mut parent = self.clone();
            parent.segments.pop();
            Some(parent)
        }
    }

    /// Get the last segment (None if root)
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    /// Parse a path from a dotted string
    ///
    /// `"a.b.c"` parses to three key segments; the empty string parses to
    /// the root path. An empty segment (`"a..b"`, `".a"`, `"a."`) is
    /// rejected. Keys containing a literal dot cannot be expressed in the
    /// dotted syntax; build such paths with [`FieldPath::key`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(FieldPath::root());
        }
        FieldPath::from_segments(s.split('.').map(str::to_string).collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
