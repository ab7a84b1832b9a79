//! SharedStore: lock-guarded handle over a DocumentStore
//!
//! The store itself is written for a single logical caller (a UI event
//! loop). Hosts with more than one caller go through this facade instead
//! of sharing the store directly: a cloneable handle whose operations
//! take the lock per call, so every mutation stays atomic and reads see a
//! consistent pair of document and text.

use crate::export::ExportArtifact;
use crate::store::{DocumentStore, EditMode};
use confedit_core::{Document, FieldPath, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`DocumentStore`]
///
/// All clones address the same underlying store. Read accessors return
/// owned copies so no lock is held across caller code.
///
/// # Example
///
/// ```
/// use confedit_store::SharedStore;
/// use confedit_core::{Document, FieldPath};
///
/// let store = SharedStore::default();
/// let handle = store.clone();
///
/// let path: FieldPath = "bucket_name".parse().unwrap();
/// handle.set_at_path(&path, Document::from("shared")).unwrap();
/// assert_eq!(store.get_at_path(&path).unwrap().as_str(), Some("shared"));
/// ```
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<DocumentStore>>,
}

impl SharedStore {
    /// Wrap a store in a shared handle
    pub fn new(store: DocumentStore) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Set the value at a path
    pub fn set_at_path(&self, path: &FieldPath, value: Document) -> Result<()> {
        self.inner.write().set_at_path(path, value)
    }

    /// Append an item to the sequence at a path
    pub fn array_append(&self, path: &FieldPath, item: Document) -> Result<()> {
        self.inner.write().array_append(path, item)
    }

    /// Remove the element at `index` from the sequence at a path
    pub fn array_remove(&self, path: &FieldPath, index: usize) -> Result<Document> {
        self.inner.write().array_remove(path, index)
    }

    /// Replace the whole document from a candidate serialization
    pub fn replace_from_text(&self, text: &str) -> Result<()> {
        self.inner.write().replace_from_text(text)
    }

    /// Replace the text buffer without touching the document
    pub fn set_raw_text(&self, text: impl Into<String>) {
        self.inner.write().set_raw_text(text)
    }

    /// Reset the text buffer to the document's canonical serialization
    pub fn reset_text_to_document(&self) -> String {
        self.inner.write().reset_text_to_document().to_string()
    }

    /// Switch to RAW mode, refreshing the text buffer
    pub fn enter_raw_edit(&self) {
        self.inner.write().enter_raw_edit()
    }

    /// Read the value at a path (owned copy)
    pub fn get_at_path(&self, path: &FieldPath) -> Option<Document> {
        self.inner.read().get_at_path(path).cloned()
    }

    /// The current document (owned copy)
    pub fn document(&self) -> Document {
        self.inner.read().document().clone()
    }

    /// The current text buffer (owned copy)
    pub fn text(&self) -> String {
        self.inner.read().text().to_string()
    }

    /// The current edit mode
    pub fn mode(&self) -> EditMode {
        self.inner.read().mode()
    }

    /// Document revision
    pub fn revision(&self) -> u64 {
        self.inner.read().revision()
    }

    /// Paths from `required` that are missing in the current document
    pub fn missing_required(&self, required: &[FieldPath]) -> Vec<FieldPath> {
        self.inner.read().missing_required(required)
    }

    /// Render the current document as a downloadable artifact
    pub fn export(&self) -> ExportArtifact {
        self.inner.read().export()
    }

    /// Run a closure against the locked store for a multi-read snapshot
    pub fn read<R>(&self, f: impl FnOnce(&DocumentStore) -> R) -> R {
        f(&self.inner.read())
    }
}

impl Default for SharedStore {
    /// A shared handle over the default store
    fn default() -> Self {
        SharedStore::new(DocumentStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> FieldPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let store = SharedStore::new(DocumentStore::new("{}".parse().unwrap()));
        let handle = store.clone();
        handle.set_at_path(&path("a"), Document::from(1i64)).unwrap();
        assert_eq!(store.get_at_path(&path("a")).unwrap().as_i64(), Some(1));
        assert_eq!(store.revision(), handle.revision());
    }

    #[test]
    fn test_concurrent_writers_all_land() {
        let store = SharedStore::new(DocumentStore::new("{}".parse().unwrap()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let p: FieldPath = format!("field_{i}").parse().unwrap();
                    store.set_at_path(&p, Document::from(i as i64)).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        for i in 0..8 {
            let p: FieldPath = format!("field_{i}").parse().unwrap();
            assert_eq!(store.get_at_path(&p).unwrap().as_i64(), Some(i as i64));
        }
        assert_eq!(store.revision(), 9);
    }

    #[test]
    fn test_read_snapshot_sees_consistent_pair() {
        let store = SharedStore::default();
        let (doc_text, mirror) = store.read(|s| (s.document().to_text(), s.text().to_string()));
        assert_eq!(doc_text, mirror);
    }
}
