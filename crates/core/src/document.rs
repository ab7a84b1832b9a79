//! Document value type
//!
//! A Document is the tree-shaped configuration value being edited: strings,
//! numbers, booleans, null, sequences, and mappings with insertion-ordered
//! keys. It is a newtype around serde_json::Value so the whole serde_json
//! toolbox stays available through Deref.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Tree-shaped configuration value
///
/// Newtype around serde_json::Value providing:
/// - Direct access to the underlying serde_json::Value via Deref/DerefMut
/// - Easy construction from common leaf types
/// - Canonical serialization via [`Document::to_text`]
///
/// Mapping keys keep insertion order (serde_json's `preserve_order`
/// feature), so the canonical serialization of a document is stable across
/// parse/serialize cycles.
///
/// # Examples
///
/// ```
/// use confedit_core::Document;
///
/// let obj = Document::object();
/// let s = Document::from("csv");
/// let b = Document::from(true);
///
/// assert!(obj.is_object());
/// assert_eq!(s.as_str(), Some("csv"));
/// assert_eq!(b.as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Document(serde_json::Value);

impl Document {
    /// Create a null document value
    pub fn null() -> Self {
        Document(serde_json::Value::Null)
    }

    /// Create an empty mapping
    pub fn object() -> Self {
        Document(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Create an empty sequence
    pub fn array() -> Self {
        Document(serde_json::Value::Array(Vec::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: serde_json::Value) -> Self {
        Document(value)
    }

    /// Consume and return the underlying serde_json::Value
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the underlying serde_json::Value
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }

    /// Get a mutable reference to the underlying serde_json::Value
    pub fn as_inner_mut(&mut self) -> &mut serde_json::Value {
        &mut self.0
    }

    /// Canonical serialization: pretty-printed, two-space indent, mapping
    /// keys in insertion order
    ///
    /// This is the byte format exported files carry and the form the
    /// store's text mirror holds. Serializing an in-memory tree cannot
    /// fail, so a serializer error degrades to the compact rendering.
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl FromStr for Document {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Document)
    }
}

// Deref to access serde_json::Value methods directly
impl Deref for Document {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Default is null, matching serde_json
impl Default for Document {
    fn default() -> Self {
        Self::null()
    }
}

impl From<serde_json::Value> for Document {
    fn from(v: serde_json::Value) -> Self {
        Document(v)
    }
}

impl From<Document> for serde_json::Value {
    fn from(v: Document) -> Self {
        v.0
    }
}

impl From<bool> for Document {
    fn from(v: bool) -> Self {
        Document(serde_json::Value::Bool(v))
    }
}

impl From<i64> for Document {
    fn from(v: i64) -> Self {
        Document(serde_json::Value::Number(v.into()))
    }
}

impl From<u64> for Document {
    fn from(v: u64) -> Self {
        Document(serde_json::Value::Number(v.into()))
    }
}

impl From<f64> for Document {
    fn from(v: f64) -> Self {
        Document(
            serde_json::Number::from_f64(v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
        )
    }
}

impl From<&str> for Document {
    fn from(v: &str) -> Self {
        Document(serde_json::Value::String(v.to_string()))
    }
}

impl From<String> for Document {
    fn from(v: String) -> Self {
        Document(serde_json::Value::String(v))
    }
}

impl<T: Into<Document>> From<Vec<T>> for Document {
    fn from(v: Vec<T>) -> Self {
        Document(serde_json::Value::Array(
            v.into_iter().map(|x| x.into().0).collect(),
        ))
    }
}
