//! Tests for the coach configuration system.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use coach_core::config::{CoachConfig, ConfigOverrides};
use coach_core::{ConfigurationError, Language};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_coach_env_vars() {
    for key in ["COACH_CATALOG_PATH", "COACH_RULES_PATH", "COACH_LANGUAGE"] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_overrides_beat_env_beat_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coach_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("coach.toml"),
        r#"
[content]
catalog_path = "project_questions.json"
rules_path = "project_rules.yaml"

[session]
default_language = "en"
"#,
    )
    .unwrap();

    std::env::set_var("COACH_RULES_PATH", "env_rules.yaml");
    std::env::set_var("COACH_LANGUAGE", "ja");

    let overrides = ConfigOverrides {
        default_language: Some("en".to_string()),
        ..Default::default()
    };

    let config = CoachConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(
        config.content.catalog_path,
        Some(PathBuf::from("project_questions.json"))
    );
    assert_eq!(config.content.rules_path, Some(PathBuf::from("env_rules.yaml")));
    assert_eq!(config.session.effective_default_language(), Language::En);

    clear_coach_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coach_env_vars();

    let dir = tempdir();
    let config = CoachConfig::load(dir.path(), None).unwrap();

    assert_eq!(
        config.content.effective_catalog_path(dir.path()),
        dir.path().join("questions.json")
    );
    assert_eq!(
        config.content.effective_rules_path(dir.path()),
        dir.path().join("feedback_rules.yaml")
    );
    assert_eq!(config.session.effective_default_language(), Language::Ja);
}

#[test]
fn absolute_paths_are_not_joined_onto_root() {
    let config = CoachConfig::from_toml(
        r#"
[content]
catalog_path = "/srv/coach/questions.json"
"#,
    )
    .unwrap();

    assert_eq!(
        config.content.effective_catalog_path(Path::new("/elsewhere")),
        PathBuf::from("/srv/coach/questions.json")
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coach_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("coach.toml"), "this is not valid toml {{{{").unwrap();

    match CoachConfig::load(dir.path(), None) {
        Err(ConfigurationError::ParseError { path, .. }) => assert!(path.ends_with("coach.toml")),
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn unsupported_language_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coach_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        default_language: Some("fr".to_string()),
        ..Default::default()
    };

    match CoachConfig::load(dir.path(), Some(&overrides)) {
        Err(ConfigurationError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "session.default_language");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn empty_rules_path_fails_validation() {
    let config = CoachConfig::from_toml(
        r#"
[content]
rules_path = ""
"#,
    )
    .unwrap();

    assert!(matches!(
        CoachConfig::validate(&config),
        Err(ConfigurationError::ValidationFailed { .. })
    ));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = CoachConfig::from_toml(
        r#"
[session]
default_language = "en"
theme = "dark"

[display]
progress_bar = true
"#,
    )
    .unwrap();
    assert_eq!(config.session.effective_default_language(), Language::En);
}

#[test]
fn to_toml_round_trips_through_from_toml() {
    let mut config = CoachConfig::default();
    config.session.default_language = Some("en".to_string());
    config.content.rules_path = Some(PathBuf::from("rules/feedback.yaml"));

    let text = config.to_toml().unwrap();
    let back = CoachConfig::from_toml(&text).unwrap();

    assert_eq!(back.session.default_language.as_deref(), Some("en"));
    assert_eq!(back.content.rules_path, Some(PathBuf::from("rules/feedback.yaml")));
    assert_eq!(back.content.catalog_path, None);
}
