//! Catalog and settings loading from real files

use std::fs;

use concierge_config::{load_settings_from, FileCatalogProvider};
use concierge_core::{CatalogError, CatalogProvider};

const JSON_CATALOG: &str = r#"{
    "intents": [
        { "tag": "greeting", "patterns": ["hello", "hi there"], "responses": ["Welcome!"] },
        { "tag": "goodbye", "patterns": ["bye", "goodbye"], "responses": ["Farewell!"] }
    ]
}"#;

const YAML_CATALOG: &str = r#"
intents:
  - tag: greeting
    patterns: ["hello", "hi there"]
    responses: ["Welcome!"]
  - tag: goodbye
    patterns: ["bye", "goodbye"]
    responses: ["Farewell!"]
"#;

#[test]
fn test_json_and_yaml_catalogs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("intents.json");
    let yaml_path = dir.path().join("intents.yaml");
    fs::write(&json_path, JSON_CATALOG).unwrap();
    fs::write(&yaml_path, YAML_CATALOG).unwrap();

    let from_json = FileCatalogProvider::new(&json_path).load().unwrap();
    let from_yaml = FileCatalogProvider::new(&yaml_path).load().unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json.tags(), vec!["greeting", "goodbye"]);
}

#[test]
fn test_bare_array_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newintents.json");
    fs::write(
        &path,
        r#"[{ "tag": "checkout", "patterns": ["check out time"], "responses": ["Check-out is at 11 AM."] }]"#,
    )
    .unwrap();

    let catalog = FileCatalogProvider::new(&path).load().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.intents()[0].tag, "checkout");
}

#[test]
fn test_malformed_catalog_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intents.json");
    fs::write(&path, "{ not json").unwrap();

    let provider = FileCatalogProvider::new(&path);
    assert_eq!(provider.source_name(), path.display().to_string());
    assert!(matches!(provider.load(), Err(CatalogError::Parse { .. })));
}

#[test]
fn test_invalid_intent_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intents.json");
    fs::write(
        &path,
        r#"{ "intents": [{ "tag": "empty", "patterns": ["hello"], "responses": [] }] }"#,
    )
    .unwrap();

    assert_eq!(
        FileCatalogProvider::new(&path).load(),
        Err(CatalogError::NoResponses("empty".to_string()))
    );
}

#[test]
fn test_settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.yaml"),
        "server:\n  port: 9000\nmatcher:\n  fuzzy_threshold: 0.75\n  random_seed: 42\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("test.yaml"),
        "catalog:\n  path: fixtures/intents.yaml\n",
    )
    .unwrap();

    let config_dir = dir.path().display().to_string();
    let settings = load_settings_from(&config_dir, Some("test")).unwrap();

    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.matcher.fuzzy_threshold, 0.75);
    assert_eq!(settings.matcher.random_seed, Some(42));
    assert_eq!(settings.catalog.path, "fixtures/intents.yaml");
    assert_eq!(settings.matcher.farewell_phrases, vec!["goodbye", "bye"]);
}

#[test]
fn test_invalid_settings_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.yaml"),
        "matcher:\n  fuzzy_threshold: 3.0\n",
    )
    .unwrap();

    let config_dir = dir.path().display().to_string();
    assert!(load_settings_from(&config_dir, None).is_err());
}
