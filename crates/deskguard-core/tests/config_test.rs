use std::io::Write;

use deskguard_core::errors::DeskguardError;
use deskguard_core::PrivacyConfig;

#[test]
fn default_config_has_no_extra_patterns() {
    let config = PrivacyConfig::default();
    assert!(config.preserve_patterns.is_empty());
    assert_eq!(config.mask_char, 'X');
}

#[test]
fn config_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
mask_char = "#"

[[preserve_patterns]]
name = "asset_tag"
pattern = "\\bAST-\\d{{6}}\\b"
"##
    )
    .unwrap();

    let config = PrivacyConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.mask_char, '#');
    assert_eq!(config.preserve_patterns.len(), 1);
    assert_eq!(config.preserve_patterns[0].name, "asset_tag");
    assert_eq!(config.preserve_patterns[0].pattern, r"\bAST-\d{6}\b");
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[preserve_patterns]]
name = "case_id"
pattern = "\\bCASE-\\d{{10}}\\b"
"#
    )
    .unwrap();

    let config = PrivacyConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.mask_char, 'X');
    assert_eq!(config.preserve_patterns.len(), 1);
}

#[test]
fn missing_config_file_is_io_error() {
    let err = PrivacyConfig::from_toml_file("/nonexistent/deskguard.toml").unwrap_err();
    assert!(matches!(err, DeskguardError::ConfigIo { .. }), "{err}");
}

#[test]
fn malformed_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "mask_char = [not toml").unwrap();

    let err = PrivacyConfig::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, DeskguardError::ConfigParse { .. }), "{err}");
}
