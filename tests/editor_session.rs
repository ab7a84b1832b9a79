//! End-to-end editing-session tests through the public facade
//!
//! Walks the store through the same sequences a hosting UI produces:
//! form edits at nested paths, sequence add/remove, the raw-text round
//! trip, and export.

use confedit::{default_document, Document, DocumentStore, EditMode, FieldPath, StoreError};

fn path(s: &str) -> FieldPath {
    s.parse().unwrap()
}

#[test]
fn form_edit_session_round_trip() {
    let mut store = DocumentStore::default();

    // Edit scattered fields the way the form does
    store
        .set_at_path(&path("bucket_name"), Document::from("prod-bucket"))
        .unwrap();
    store
        .set_at_path(
            &path("inputfileconfig.sources_and_targets.source.delimiter"),
            Document::from("|"),
        )
        .unwrap();
    store
        .set_at_path(
            &path("testcaseconfig_config_new.execution.priority"),
            Document::from("low"),
        )
        .unwrap();

    assert_eq!(
        store.get_at_path(&path("bucket_name")).unwrap().as_str(),
        Some("prod-bucket")
    );
    assert_eq!(
        store
            .get_at_path(&path("inputfileconfig.sources_and_targets.source.delimiter"))
            .unwrap()
            .as_str(),
        Some("|")
    );

    // Untouched siblings survive every edit
    assert_eq!(
        store
            .get_at_path(&path("inputfileconfig.sources_and_targets.source.format"))
            .unwrap()
            .as_str(),
        Some("csv")
    );

    // The mirror equals the canonical serialization after each mutation
    assert_eq!(store.text(), store.document().to_text());
}

#[test]
fn test_plan_add_and_remove() {
    let mut store = DocumentStore::default();
    let plans = path("testcaseconfig_config_new.execution.test_plan");

    store
        .array_append(
            &plans,
            Document::from_value(serde_json::json!({
                "status": ["TO DO"],
                "summary": "New Plan",
                "test_plan_id": ""
            })),
        )
        .unwrap();
    assert_eq!(store.get_at_path(&plans).unwrap().as_array().unwrap().len(), 2);

    let removed = store.array_remove(&plans, 0).unwrap();
    assert_eq!(removed["summary"].as_str(), Some("Demo Test Plan"));

    let remaining = store.get_at_path(&plans).unwrap().as_array().unwrap().clone();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["summary"].as_str(), Some("New Plan"));
}

#[test]
fn raw_edit_apply_and_recover() {
    let mut store = DocumentStore::default();

    store.enter_raw_edit();
    assert_eq!(store.mode(), EditMode::Raw);
    assert_eq!(store.text(), store.document().to_text());

    // A typo keeps the session in RAW with the bad buffer intact
    store.set_raw_text("{\"bucket_name\": \"oops\"");
    let buffer = store.text().to_string();
    let err = store.replace_from_text(&buffer).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
    assert_eq!(store.mode(), EditMode::Raw);
    assert_eq!(store.text(), "{\"bucket_name\": \"oops\"");
    assert_eq!(store.document(), &default_document());

    // Fixing the text applies it and returns to FORM
    store.set_raw_text("{\"bucket_name\": \"fixed\"}");
    let buffer = store.text().to_string();
    store.replace_from_text(&buffer).unwrap();
    assert_eq!(store.mode(), EditMode::Form);
    assert_eq!(
        store.get_at_path(&path("bucket_name")).unwrap().as_str(),
        Some("fixed")
    );
    assert_eq!(store.text(), store.document().to_text());
}

#[test]
fn reset_discards_raw_scratch() {
    let mut store = DocumentStore::default();
    store.enter_raw_edit();
    store.set_raw_text("scratch that never applies");

    let text = store.reset_text_to_document().to_string();
    assert_eq!(text, default_document().to_text());
    assert_eq!(store.document(), &default_document());
    assert_eq!(store.mode(), EditMode::Raw);
}

#[test]
fn conflicting_form_write_is_rejected_whole() {
    let mut store = DocumentStore::default();
    let before = store.document().clone();

    // bucket_name holds a string; writing beneath it must not destroy it
    let err = store
        .set_at_path(&path("bucket_name.nested"), Document::from("x"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a mapping at 'bucket_name', found string"
    );
    assert_eq!(store.document(), &before);
    assert_eq!(store.text(), before.to_text());
}

#[test]
fn export_matches_canonical_serialization_exactly() {
    let mut store = DocumentStore::default();
    store
        .set_at_path(&path("results_prefix"), Document::from("OUT"))
        .unwrap();

    let artifact = store.export();
    assert_eq!(artifact.filename(), "config.json");
    assert_eq!(artifact.content_type(), "application/json");
    assert_eq!(artifact.as_str(), store.document().to_text());

    let dir = tempfile::tempdir().unwrap();
    let written = artifact.write_to(dir.path()).unwrap();
    let on_disk = std::fs::read_to_string(written).unwrap();
    assert_eq!(on_disk, store.document().to_text());

    // A downstream consumer parses the exported bytes back to the same tree
    let reparsed: Document = on_disk.parse().unwrap();
    assert_eq!(&reparsed, store.document());
}

#[test]
fn missing_required_presence_checks() {
    let mut store = DocumentStore::default();
    let required = vec![
        path("bucket_name"),
        path("results_prefix"),
        path("testcaseconfig_config_new.execution.affectversion"),
    ];

    // affectversion is blank in the default document
    assert_eq!(
        store.missing_required(&required),
        vec![path("testcaseconfig_config_new.execution.affectversion")]
    );

    store
        .set_at_path(
            &path("testcaseconfig_config_new.execution.affectversion"),
            Document::from("1.0"),
        )
        .unwrap();
    assert!(store.missing_required(&required).is_empty());
}
