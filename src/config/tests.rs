//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml()` must parse back
//! into the same value. Adding a field without serializing it fails here.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    match toml::from_str(toml_str) {
        Ok(file) => file,
        Err(e) => panic!("TOML should parse.\nTOML:\n{}\nError: {}", toml_str, e),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let restored = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(restored.author, config.author);
    assert_eq!(restored.default_category, config.default_category);
    assert_eq!(restored.theme, config.theme);
    assert_eq!(restored.use_theme_background, config.use_theme_background);
    assert_eq!(restored.features.logs_panel, config.features.logs_panel);
    assert_eq!(restored.features.relative_time, config.features.relative_time);
    assert_eq!(restored.logging.level, config.logging.level);
    assert_eq!(restored.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config {
        author: "ada \"the\" dev@example.com".to_string(),
        default_category: Category::Salaries,
        theme: "Nord".to_string(),
        use_theme_background: false,
        ..Config::default()
    };
    config.features.logs_panel = false;
    config.features.relative_time = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("/tmp/feedbox-logs");
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "fb".to_string();

    let restored = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(restored.author, config.author);
    assert_eq!(restored.default_category, Category::Salaries);
    assert_eq!(restored.theme, "Nord");
    assert!(!restored.use_theme_background);
    assert!(!restored.features.logs_panel);
    assert!(!restored.features.relative_time);
    assert_eq!(restored.logging.level, "debug");
    assert!(restored.logging.file_enabled);
    assert_eq!(restored.logging.file_dir, PathBuf::from("/tmp/feedbox-logs"));
    assert_eq!(restored.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(restored.logging.file_prefix, "fb");
}

#[test]
fn test_control_characters_stay_valid_toml() {
    let config = Config {
        author: "line one\nline two\ttab \u{7} bell \\ \"q\"".to_string(),
        ..Config::default()
    };

    let restored = Config::from_sources(parse(&config.to_toml()), no_env);
    assert_eq!(restored.author, config.author);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
author = "file@example.com"
theme = "Feed Light"
"#,
    );
    let env: HashMap<&str, &str> = [
        ("FEEDBOX_AUTHOR", "env@example.com"),
        ("FEEDBOX_DEMO", "true"),
    ]
    .into_iter()
    .collect();

    let config = Config::from_sources(file, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.author, "env@example.com");
    assert_eq!(config.theme, "Feed Light");
    assert!(config.demo_mode);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(parse(""), no_env);
    assert_eq!(config.author, crate::feed::DEFAULT_AUTHOR);
    assert_eq!(config.default_category, Category::CareerAdvice);
    assert_eq!(config.theme, DEFAULT_THEME);
    assert!(!config.demo_mode);
    assert!(config.features.logs_panel);
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_blank_author_falls_back() {
    let file = parse(r#"author = "   ""#);
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.author, crate::feed::DEFAULT_AUTHOR);
}

#[test]
fn test_category_labels_are_case_insensitive() {
    let file = parse(r#"default_category = "job search - interviewing""#);
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.default_category, Category::JobSearch);

    let unknown = parse(r#"default_category = "All""#);
    let config = Config::from_sources(unknown, no_env);
    assert_eq!(config.default_category, Category::CareerAdvice);
}

#[test]
fn test_unknown_rotation_means_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse(" Hourly "), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let result: Result<FileConfig, _> = toml::from_str("author = 3");
    assert!(result.is_err());
}
