//! Path-addressed traversal and mutation
//!
//! Free functions over [`Document`] implementing the store's mutation
//! contract:
//!
//! - [`get_at_path`]: read the value at a path
//! - [`set_at_path`]: replace the value at a path, auto-vivifying missing
//!   intermediate mappings
//! - [`array_append`] / [`array_remove`]: edit a sequence addressed by path
//!
//! Mutations either fully apply or leave the document untouched. A
//! non-mapping value encountered where a mapping is required is a
//! [`PathError::Conflict`], never a silent overwrite: writing through a
//! leaf would destroy it.

use crate::document::Document;
use crate::error::PathError;
use crate::path::FieldPath;

/// Get the value at a path within a document
///
/// Descends through mapping keys. The root path returns the whole
/// document.
///
/// # Returns
///
/// * `Some(&Document)` - the value at the path
/// * `None` - the path does not exist or crosses a non-mapping value
///
/// # Examples
///
/// ```
/// use confedit_core::{get_at_path, Document, FieldPath};
///
/// let doc: Document = r#"{"source": {"format": "csv"}}"#.parse().unwrap();
///
/// let path: FieldPath = "source.format".parse().unwrap();
/// assert_eq!(get_at_path(&doc, &path).unwrap().as_str(), Some("csv"));
///
/// // Root path returns the entire document
/// assert_eq!(get_at_path(&doc, &FieldPath::root()), Some(&doc));
///
/// // Missing paths read as absent
/// let missing: FieldPath = "source.delimiter".parse().unwrap();
/// assert!(get_at_path(&doc, &missing).is_none());
/// ```
pub fn get_at_path<'a>(doc: &'a Document, path: &FieldPath) -> Option<&'a Document> {
    let mut current: &serde_json::Value = doc.as_inner();

    for key in path.segments() {
        match current {
            serde_json::Value::Object(obj) => current = obj.get(key)?,
            _ => return None,
        }
    }

    // SAFETY: This cast is safe because:
    // 1. Document has #[repr(transparent)], guaranteeing identical memory
    //    layout to serde_json::Value
    // 2. The returned reference's lifetime is tied to the input Document
    //    reference
    Some(unsafe { &*(current as *const serde_json::Value as *const Document) })
}

/// Set the value at a path within a document
///
/// Walks the document from its root, following the path segment by
/// segment. Missing intermediate keys are created as empty mappings
/// (auto-vivification). At the final segment, any existing value is
/// replaced wholesale.
///
/// On error the document is unchanged: vivification can only begin once
/// the walk steps into a missing key, and from there on every node is a
/// fresh empty mapping, so a conflict is always detected before the first
/// insertion.
///
/// # Errors
///
/// * [`PathError::EmptyPath`] - the path has no segments
/// * [`PathError::Conflict`] - an intermediate segment (or the root)
///   already holds a non-mapping value
///
/// # Examples
///
/// ```
/// use confedit_core::{get_at_path, set_at_path, Document, FieldPath};
///
/// let mut doc = Document::object();
/// let path: FieldPath = "source.format".parse().unwrap();
/// set_at_path(&mut doc, &path, Document::from("csv")).unwrap();
///
/// assert_eq!(get_at_path(&doc, &path).unwrap().as_str(), Some("csv"));
/// ```
pub fn set_at_path(
    root: &mut Document,
    path: &FieldPath,
    value: Document,
) -> Result<(), PathError> {
    let segments = path.segments();
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Err(PathError::EmptyPath),
    };

    let mut current = root.as_inner_mut();

    for (i, key) in parents.iter().enumerate() {
        let obj = match current {
            serde_json::Value::Object(obj) => obj,
            other => return Err(conflict(segments, i, other)),
        };
        current = obj
            .entry(key.clone())
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
    }

    match current {
        serde_json::Value::Object(obj) => {
            obj.insert(last.clone(), value.into_inner());
            Ok(())
        }
        other => Err(conflict(segments, segments.len() - 1, other)),
    }
}

/// Append an item to the sequence at a path
///
/// # Errors
///
/// * [`PathError::NotASequence`] - the path does not exist or resolves to
///   a non-sequence value
///
/// # Examples
///
/// ```
/// use confedit_core::{array_append, Document, FieldPath};
///
/// let mut doc: Document = r#"{"list": [1, 2, 3]}"#.parse().unwrap();
/// let path: FieldPath = "list".parse().unwrap();
/// array_append(&mut doc, &path, Document::from(4i64)).unwrap();
/// assert_eq!(doc["list"].as_array().unwrap().len(), 4);
/// ```
pub fn array_append(
    root: &mut Document,
    path: &FieldPath,
    item: Document,
) -> Result<(), PathError> {
    let seq = sequence_at_mut(root, path)?;
    seq.push(item.into_inner());
    Ok(())
}

/// Remove the element at `index` from the sequence at a path
///
/// Subsequent elements shift down; the removed value is returned.
///
/// # Errors
///
/// * [`PathError::NotASequence`] - the path does not exist or resolves to
///   a non-sequence value
/// * [`PathError::IndexOutOfRange`] - `index >= len`
///
/// # Examples
///
/// ```
/// use confedit_core::{array_remove, Document, FieldPath};
///
/// let mut doc: Document = r#"{"list": [1, 2, 3]}"#.parse().unwrap();
/// let path: FieldPath = "list".parse().unwrap();
/// let removed = array_remove(&mut doc, &path, 0).unwrap();
/// assert_eq!(removed.as_i64(), Some(1));
/// assert_eq!(doc["list"].as_array().unwrap().len(), 2);
/// ```
pub fn array_remove(
    root: &mut Document,
    path: &FieldPath,
    index: usize,
) -> Result<Document, PathError> {
    let seq = sequence_at_mut(root, path)?;
    if index >= seq.len() {
        return Err(PathError::IndexOutOfRange {
            index,
            len: seq.len(),
        });
    }
    Ok(Document::from_value(seq.remove(index)))
}

/// Resolve a path to a mutable sequence, without vivification
fn sequence_at_mut<'a>(
    root: &'a mut Document,
    path: &FieldPath,
) -> Result<&'a mut Vec<serde_json::Value>, PathError> {
    let mut current = root.as_inner_mut();

    for key in path.segments() {
        current = match current {
            serde_json::Value::Object(obj) => match obj.get_mut(key) {
                Some(next) => next,
                None => return Err(missing_sequence(path)),
            },
            _ => return Err(missing_sequence(path)),
        };
    }

    match current {
        serde_json::Value::Array(arr) => Ok(arr),
        other => Err(PathError::NotASequence {
            at: path.to_string(),
            found: value_type_name(other),
        }),
    }
}

fn missing_sequence(path: &FieldPath) -> PathError {
    PathError::NotASequence {
        at: path.to_string(),
        found: "no value",
    }
}

fn conflict(segments: &[String], depth: usize, found: &serde_json::Value) -> PathError {
    let at = if depth == 0 {
        "(root)".to_string()
    } else {
        segments[..depth].join(".")
    };
    PathError::Conflict {
        at,
        found: value_type_name(found),
    }
}

/// Helper to get type name for error messages
fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "sequence",
        serde_json::Value::Object(_) => "mapping",
    }
}
