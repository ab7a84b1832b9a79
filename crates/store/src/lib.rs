//! Document Store layer for confedit
//!
//! Provides the edit-session state machine over the core document types:
//! - **DocumentStore**: authoritative document + serialized-text mirror +
//!   edit mode, with path-addressed mutation entry points
//! - **SharedStore**: cloneable, lock-guarded handle for hosts with more
//!   than one logical caller
//! - **ExportArtifact**: downloadable rendering of the current document
//! - **default_document**: the fixed starting configuration
//! - **missing_required**: presence checks for required fields
//!
//! ## Design Principle: Single Source of Truth
//!
//! The store owns the document exclusively. A presentation layer reads the
//! current document, text, and mode for rendering and funnels every write
//! through the store's operations; it never holds an independent copy of
//! truth. Each mutation is all-or-nothing: on error the store is exactly
//! as it was before the call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod seed;
pub mod shared;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use export::{ExportArtifact, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
pub use seed::default_document;
pub use shared::SharedStore;
pub use store::{DocumentStore, EditMode};
pub use validate::missing_required;
