//! Integration tests for configuration management

use unichart::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.templates_dir.is_empty(),
        "Default templates_dir should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
templates_dir = "./templates"
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.templates_dir, "./templates");
    assert_eq!(config.paths.exports_dir, "./exports");
}

#[test]
fn test_config_from_toml_missing_sections() {
    let config = Config::from_toml("[logging]\nlevel = \"warn\"\n").expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "warn");
    assert!(config.paths.templates_dir.is_empty());
}

#[test]
fn test_config_expands_unichart_variable() {
    let toml_str = r#"
[logging]
level = "info"
file = "$UNICHART/logs/unichart.log"

[paths]
templates_dir = "$UNICHART/templates"
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert!(!config.logging.file.contains("$UNICHART"));
    assert!(!config.paths.templates_dir.contains("$UNICHART"));
    assert!(config.paths.templates_dir.ends_with("templates"));
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml("[logging]\nlevel = \"error\"\n").expect("parse");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));

    // Existing value preserved, empty fields filled
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.paths.templates_dir, defaults.paths.templates_dir);
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);

    // A second merge changes nothing new for these fields
    let level_before = config.logging.level.clone();
    config.merge_defaults(&defaults);
    assert_eq!(config.logging.level, level_before);
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        templates_dir: Some("/custom/templates".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.templates_dir, "/custom/templates");
    // Untouched fields keep their defaults
    assert!(!config.paths.exports_dir.is_empty());
}

#[test]
fn test_get_and_set_round_trip() {
    let mut config = Config::from_defaults();

    config.set("level", "warn").expect("set level");
    assert_eq!(config.get("level"), Some("warn".to_string()));

    config.set("templates_dir", "/t").expect("set templates_dir");
    assert_eq!(config.get("templates-dir"), Some("/t".to_string()));

    assert!(config.set("verbose", "not-a-bool").is_err());
    assert!(config.set("unknown", "x").is_err());
    assert_eq!(config.get("unknown"), None);
}

#[test]
fn test_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("set level");
    config.unset("level", &defaults).expect("unset level");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("unknown", &defaults).is_err());
}
