//! Confedit - path-addressed configuration document store
//!
//! Confedit keeps a tree-shaped configuration document and a canonical
//! textual rendering of it consistent while a host edits either one: a
//! structured form writes through typed paths, a raw-text view replaces
//! the whole document at once, and the result can be exported
//! byte-exactly.
//!
//! # Quick Start
//!
//! ```
//! use confedit::{Document, DocumentStore, FieldPath};
//!
//! let mut store = DocumentStore::default();
//!
//! // Edit a field through its path
//! let path: FieldPath = "source.format".parse().unwrap();
//! store.set_at_path(&path, Document::from("parquet")).unwrap();
//!
//! // The text mirror tracks every mutation
//! assert!(store.text().contains("parquet"));
//!
//! // Export the current document
//! let artifact = store.export();
//! assert_eq!(artifact.filename(), "config.json");
//! ```
//!
//! # Architecture
//!
//! The document and path types live in `confedit-core`; the edit-session
//! state machine (form/raw modes, text mirror, export) lives in
//! `confedit-store`. This crate re-exports both as the public API.

// Re-export the public API from the member crates
pub use confedit_core::*;
pub use confedit_store::*;
