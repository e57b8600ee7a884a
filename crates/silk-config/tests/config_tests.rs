// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Silk configuration system.

use silk_config::diagnostic::ConfigError;
use silk_config::model::SilkConfig;
use silk_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_silk_config() {
    let toml = r#"
[logging]
level = "debug"

[catalog]
builtin = false
manifest_dirs = ["/usr/share/silk/plugins", "plugins"]

[autocompletion]
limit = 25
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert!(!config.catalog.builtin);
    assert_eq!(
        config.catalog.manifest_dirs,
        vec!["/usr/share/silk/plugins", "plugins"]
    );
    assert_eq!(config.autocompletion.limit, 25);
}

/// Missing sections fall back to defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config, SilkConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.catalog.builtin);
    assert!(config.catalog.manifest_dirs.is_empty());
    assert_eq!(config.autocompletion.limit, 100);
}

/// A typo in a key yields an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[catalog]
manifest_dir = ["plugins"]
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should be rejected");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "manifest_dir");
            assert_eq!(suggestion.as_deref(), Some("manifest_dirs"));
            assert!(valid_keys.contains("builtin"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level sections are rejected too.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[plugins]\nenabled = true\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

/// Wrong value types are reported as InvalidType.
#[test]
fn invalid_type_is_reported() {
    let errors = load_and_validate_str("[autocompletion]\nlimit = \"many\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { detail, .. } => assert!(detail.starts_with("found ")),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

/// Semantic validation runs after deserialization.
#[test]
fn zero_limit_fails_validation() {
    let errors = load_and_validate_str("[autocompletion]\nlimit = 0\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
    assert!(errors[0].to_string().contains("autocompletion.limit"));
}

/// Dotted overrides (as produced by the env provider) win over file values.
#[test]
fn dotted_override_wins() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: SilkConfig = Figment::new()
        .merge(Serialized::defaults(SilkConfig::default()))
        .merge(Toml::string("[logging]\nlevel = \"warn\"\n"))
        .merge(("catalog.manifest_dirs", vec!["from-env"]))
        .extract()
        .expect("should merge override");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.catalog.manifest_dirs, vec!["from-env"]);
}

/// Loading from an explicit path reads that file.
#[test]
fn load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("silk.toml");
    std::fs::write(&path, "[catalog]\nbuiltin = false\n").unwrap();

    let config = load_and_validate_path(&path).expect("file config should load");
    assert!(!config.catalog.builtin);
}

/// Diagnostics carry miette codes.
#[test]
fn diagnostics_have_codes() {
    use miette::Diagnostic;

    let errors = load_and_validate_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
    let code = errors[0].code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("silk::config::validation"));
}
