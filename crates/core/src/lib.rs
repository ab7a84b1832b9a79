//! Core types for the confedit document store
//!
//! This crate defines the foundational types used throughout the system:
//! - Document: the tree-shaped configuration value being edited
//! - FieldPath: typed path of mapping keys addressing a location in a Document
//! - Path operations: get_at_path, set_at_path, array_append, array_remove
//! - Error: error type hierarchy (PathError, StoreError)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod ops;
pub mod path;

// Re-export commonly used types
pub use document::Document;
pub use error::{PathError, PathParseError, Result, StoreError};
pub use ops::{array_append, array_remove, get_at_path, set_at_path};
pub use path::FieldPath;
