//! DocumentStore: the authoritative edit-session state
//!
//! Holds a single mutable document, a textual serialization of it, and the
//! current edit mode. Exposes path-addressed mutation and full-text
//! replacement, keeping both representations consistent.
//!
//! ## Dual Representation
//!
//! - In FORM mode the document is authoritative and the text mirror always
//!   equals its canonical serialization.
//! - In RAW mode the text buffer is authoritative for user input until a
//!   successful [`DocumentStore::replace_from_text`] folds it back into the
//!   document.
//!
//! ## Copy-on-Write
//!
//! Every mutation is applied to a clone of the document and the pair
//! (document, text) is swapped in together on success. A failed operation
//! changes nothing, and clones handed out before a mutation stay valid.

use crate::export::ExportArtifact;
use crate::seed::default_document;
use crate::validate;
use confedit_core::{ops, Document, FieldPath, Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Which representation is authoritative for user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Structured fields are authoritative
    Form,
    /// Free text is authoritative until applied
    Raw,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Form => write!(f, "form"),
            EditMode::Raw => write!(f, "raw"),
        }
    }
}

/// Document Store with path-addressed mutation
///
/// Owns the authoritative document value and its serialized-text mirror.
/// All reads and writes go through this API; no other component holds a
/// long-lived reference to the internals.
///
/// # Example
///
/// ```
/// use confedit_store::DocumentStore;
/// use confedit_core::{Document, FieldPath};
///
/// let mut store = DocumentStore::default();
/// let path: FieldPath = "bucket_name".parse().unwrap();
/// store.set_at_path(&path, Document::from("my-bucket")).unwrap();
///
/// assert_eq!(
///     store.get_at_path(&path).unwrap().as_str(),
///     Some("my-bucket")
/// );
/// // The text mirror reflects the change immediately
/// assert!(store.text().contains("my-bucket"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// The authoritative tree value
    document: Document,
    /// Serialized mirror; in FORM mode equals the canonical serialization
    /// of `document`
    text: String,
    /// Which representation is authoritative for user input
    mode: EditMode,
    /// Increments on every successful document mutation
    revision: u64,
    /// Millis since epoch of the last successful document mutation
    updated_at: i64,
}

impl DocumentStore {
    /// Create a store over an initial document
    pub fn new(document: Document) -> Self {
        let text = document.to_text();
        DocumentStore {
            document,
            text,
            mode: EditMode::Form,
            revision: 1,
            updated_at: now_millis(),
        }
    }

    /// The current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current text buffer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current edit mode
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Document revision; increments on every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Millis since epoch of the last successful mutation
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Read the value at a path
    pub fn get_at_path(&self, path: &FieldPath) -> Option<&Document> {
        ops::get_at_path(&self.document, path)
    }

    /// Set the value at a path
    ///
    /// Missing intermediate mappings are created; a non-mapping
    /// intermediate is rejected with a path conflict and the store is
    /// unchanged. On success the text mirror is regenerated together with
    /// the document swap.
    pub fn set_at_path(&mut self, path: &FieldPath, value: Document) -> Result<()> {
        let mut next = self.document.clone();
        ops::set_at_path(&mut next, path, value)?;
        self.commit(next);
        debug!(target: "confedit::store", path = %path, revision = self.revision, "set value at path");
        Ok(())
    }

    /// Append an item to the sequence at a path
    pub fn array_append(&mut self, path: &FieldPath, item: Document) -> Result<()> {
        let mut next = self.document.clone();
        ops::array_append(&mut next, path, item)?;
        self.commit(next);
        debug!(target: "confedit::store", path = %path, revision = self.revision, "appended to sequence");
        Ok(())
    }

    /// Remove the element at `index` from the sequence at a path
    ///
    /// Returns the removed value.
    pub fn array_remove(&mut self, path: &FieldPath, index: usize) -> Result<Document> {
        let mut next = self.document.clone();
        let removed = ops::array_remove(&mut next, path, index)?;
        self.commit(next);
        debug!(target: "confedit::store", path = %path, index, revision = self.revision, "removed from sequence");
        Ok(removed)
    }

    /// Replace the whole document from a candidate serialization
    ///
    /// On success the candidate becomes the authoritative document, the
    /// text buffer is set to its canonical re-serialization (whitespace
    /// and formatting normalized), and the store returns to FORM mode.
    /// On a parse failure nothing changes: document, text, and mode keep
    /// their pre-call values, so an invalid buffer stays visible for the
    /// user to correct.
    ///
    /// No schema validation happens here; any syntactically valid tree is
    /// accepted.
    pub fn replace_from_text(&mut self, text: &str) -> Result<()> {
        let candidate: Document = match text.parse() {
            Ok(candidate) => candidate,
            Err(e) => {
                let err = StoreError::Parse(e.to_string());
                warn!(target: "confedit::store", error = %err, "raw text rejected");
                return Err(err);
            }
        };
        self.commit(candidate);
        self.mode = EditMode::Form;
        info!(target: "confedit::store", revision = self.revision, "raw text applied");
        Ok(())
    }

    /// Replace the text buffer without touching the document
    ///
    /// This is the RAW-mode typing channel: the host mirrors keystrokes
    /// into the buffer here and applies them later with
    /// [`DocumentStore::replace_from_text`].
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Reset the text buffer to the canonical serialization of the
    /// current document, discarding unsaved edits made to the buffer
    ///
    /// The document itself is never mutated.
    pub fn reset_text_to_document(&mut self) -> &str {
        self.text = self.document.to_text();
        &self.text
    }

    /// Switch to RAW mode
    ///
    /// The text buffer is refreshed from the document at the transition
    /// instant so the raw view always starts consistent. Idempotent when
    /// already in RAW mode.
    pub fn enter_raw_edit(&mut self) {
        self.text = self.document.to_text();
        self.mode = EditMode::Raw;
    }

    /// Paths from `required` that are absent, null, or blank in the
    /// current document
    pub fn missing_required(&self, required: &[FieldPath]) -> Vec<FieldPath> {
        validate::missing_required(&self.document, required)
    }

    /// Render the current document as a downloadable artifact
    pub fn export(&self) -> ExportArtifact {
        ExportArtifact::from_document(&self.document)
    }

    /// Swap in a mutated document together with its regenerated text
    /// mirror; the pair changes atomically with the revision bump
    fn commit(&mut self, next: Document) {
        self.text = next.to_text();
        self.document = next;
        self.revision += 1;
        self.updated_at = now_millis();
    }
}

impl Default for DocumentStore {
    /// A store over the fixed default configuration document
    fn default() -> Self {
        DocumentStore::new(default_document())
    }
}

/// Current timestamp in milliseconds
fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
