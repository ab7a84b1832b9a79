//! Export: render the current document as a downloadable artifact
//!
//! The artifact body is byte-for-byte the canonical serialization of the
//! document. Downstream consumers parse the exported file as
//! configuration, so exactness matters: stable key order, fixed
//! indentation. Producing the artifact from an in-memory tree cannot
//! fail; only writing it out can.

use confedit_core::Document;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default name of the exported file
pub const EXPORT_FILENAME: &str = "config.json";

/// Content type of the exported file
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// A downloadable rendering of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    filename: String,
    content_type: &'static str,
    body: String,
}

impl ExportArtifact {
    /// Render a document into an artifact
    pub fn from_document(document: &Document) -> Self {
        ExportArtifact {
            filename: EXPORT_FILENAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE,
            body: document.to_text(),
        }
    }

    /// The file name offered for the download
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The content type of the artifact
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// The artifact body as text
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// The artifact body as bytes
    pub fn bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Write the artifact into `dir`, returning the written path
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, self.bytes())?;
        info!(
            target: "confedit::export",
            path = %path.display(),
            bytes = self.bytes().len(),
            "wrote export artifact"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> Document {
        s.parse().unwrap()
    }

    #[test]
    fn test_artifact_metadata() {
        let artifact = ExportArtifact::from_document(&doc(r#"{"a": 1}"#));
        assert_eq!(artifact.filename(), "config.json");
        assert_eq!(artifact.content_type(), "application/json");
    }

    #[test]
    fn test_body_is_canonical_serialization() {
        let d = doc(r#"{"b": 2, "a": 1}"#);
        let artifact = ExportArtifact::from_document(&d);
        assert_eq!(artifact.as_str(), d.to_text());
        assert_eq!(artifact.bytes(), d.to_text().as_bytes());
    }

    #[test]
    fn test_exported_bytes_parse_back() {
        let d = doc(r#"{"list": [1, 2, 3], "name": "export"}"#);
        let artifact = ExportArtifact::from_document(&d);
        let reparsed: Document = artifact.as_str().parse().unwrap();
        assert_eq!(reparsed, d);
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let d = doc(r#"{"a": 1}"#);
        let artifact = ExportArtifact::from_document(&d);

        let written = artifact.write_to(dir.path()).unwrap();
        assert_eq!(written, dir.path().join("config.json"));
        let contents = fs::read_to_string(&written).unwrap();
        assert_eq!(contents, d.to_text());
    }
}
