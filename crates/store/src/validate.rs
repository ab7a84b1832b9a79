//! Required-field presence checks
//!
//! The only validation this system performs. A required path is missing
//! when it is absent from the document, null, or a blank string. There is
//! no type or schema checking; a document with unexpected shape is still a
//! valid document.

use confedit_core::{get_at_path, Document, FieldPath};

/// Return the paths from `required` that are missing in `doc`
///
/// Missing means absent, null, or a string that is empty or whitespace.
/// Values of any other type count as present.
///
/// # Examples
///
/// ```
/// use confedit_core::{Document, FieldPath};
/// use confedit_store::missing_required;
///
/// let doc: Document = r#"{"bucket_name": "b", "results_prefix": "  "}"#.parse().unwrap();
/// let required: Vec<FieldPath> = vec![
///     "bucket_name".parse().unwrap(),
///     "results_prefix".parse().unwrap(),
///     "processing_case".parse().unwrap(),
/// ];
///
/// let missing = missing_required(&doc, &required);
/// assert_eq!(missing.len(), 2); // blank prefix and absent processing_case
/// ```
pub fn missing_required(doc: &Document, required: &[FieldPath]) -> Vec<FieldPath> {
    required
        .iter()
        .filter(|path| is_missing(doc, path))
        .cloned()
        .collect()
}

fn is_missing(doc: &Document, path: &FieldPath) -> bool {
    match get_at_path(doc, path) {
        None => true,
        Some(v) => v.is_null() || v.as_str().is_some_and(|s| s.trim().is_empty()),
    }
}
