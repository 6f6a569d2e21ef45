//! Tests for loading question catalogs.

use coach_core::CatalogError;
use coach_session::{CatalogEntry, CatalogLoader};

#[test]
fn loads_records_in_order() {
    let catalog = CatalogLoader::load_from_str(
        r#"[
            {"ja": "自己紹介をしてください", "en": "Tell me about yourself"},
            {"ja": "あなたの強みは？", "en": "What is your strength?"}
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.entries()[1],
        CatalogEntry::new("あなたの強みは？", "What is your strength?")
    );
}

#[test]
fn extra_fields_are_ignored() {
    let catalog =
        CatalogLoader::load_from_str(r#"[{"ja": "質問", "en": "Question", "id": 7}]"#).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn missing_field_names_record_and_field() {
    let result = CatalogLoader::load_from_str(
        r#"[
            {"ja": "一", "en": "One"},
            {"ja": "二"}
        ]"#,
    );
    match result {
        Err(CatalogError::MissingField { record, field }) => {
            assert_eq!(record, 2);
            assert_eq!(field, "en");
        }
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

#[test]
fn non_string_field_counts_as_missing() {
    let result = CatalogLoader::load_from_str(r#"[{"ja": 1, "en": "One"}]"#);
    assert!(matches!(
        result,
        Err(CatalogError::MissingField { record: 1, .. })
    ));
}

#[test]
fn non_array_document_is_a_parse_error() {
    let result = CatalogLoader::load_from_str(r#"{"ja": "一", "en": "One"}"#);
    assert!(matches!(result, Err(CatalogError::ParseError { .. })));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let result = CatalogLoader::load_from_str("[{");
    assert!(matches!(result, Err(CatalogError::ParseError { .. })));
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(
        CatalogLoader::load_from_str("[]"),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn loads_from_file_and_reports_missing_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, r#"[{"ja": "一", "en": "One"}]"#).unwrap();
    assert_eq!(CatalogLoader::load_from_file(&path).unwrap().len(), 1);

    let missing = dir.path().join("nope.json");
    assert!(matches!(
        CatalogLoader::load_from_file(&missing),
        Err(CatalogError::FileNotFound { .. })
    ));
}
