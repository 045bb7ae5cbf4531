/// Render command tests
/// Tests config overrides, output formatting and input errors
use auth_model::{ModelError, NullPolicy};
use auth_model_cli::{render, resolve_config, RenderOptions};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

const PARTIAL_RECORD: &str = r#"{"id":"user-1815","first_name":"Ada","email":null}"#;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

/// Test that the configured emit policy writes nulls
#[test]
fn test_emit_config_keeps_nulls() {
    let file = config_file("null_policy = \"emit\"");
    let config = resolve_config(Some(file.path()), RenderOptions::default()).unwrap();
    assert_eq!(config.null_policy, NullPolicy::Emit);

    let out = render(PARTIAL_RECORD.as_bytes(), config).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "user-1815",
            "first_name": "Ada",
            "last_name": null,
            "phone_number": null,
            "email": null,
        })
    );
}

/// Test that --omit-nulls wins over a config that says emit
#[test]
fn test_omit_nulls_overrides_emit_config() {
    let file = config_file("null_policy = \"emit\"");
    let options = RenderOptions {
        omit_nulls: true,
        ..RenderOptions::default()
    };
    let config = resolve_config(Some(file.path()), options).unwrap();
    assert_eq!(config.null_policy, NullPolicy::Omit);

    let out = render(PARTIAL_RECORD.as_bytes(), config).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, json!({ "id": "user-1815", "first_name": "Ada" }));
}

/// Test that --pretty turns on pretty output when config leaves it off
#[test]
fn test_pretty_flag_formats_output() {
    let file = config_file("pretty = false");

    let compact = resolve_config(Some(file.path()), RenderOptions::default()).unwrap();
    let out = render(PARTIAL_RECORD.as_bytes(), compact).unwrap();
    assert!(!out.contains('\n'));

    let options = RenderOptions {
        pretty: true,
        ..RenderOptions::default()
    };
    let pretty = resolve_config(Some(file.path()), options).unwrap();
    assert!(pretty.pretty);
    let out = render(PARTIAL_RECORD.as_bytes(), pretty).unwrap();
    assert!(out.contains('\n'));
    assert!(out.contains("\"first_name\": \"Ada\""));
}

/// Test that config pretty = true is kept without the flag
#[test]
fn test_pretty_config_is_not_cleared_by_missing_flag() {
    let file = config_file("pretty = true");
    let config = resolve_config(Some(file.path()), RenderOptions::default()).unwrap();
    assert!(config.pretty);
}

/// Test that a textual phone number is rejected
#[test]
fn test_string_phone_number_is_an_error() {
    let file = config_file("");
    let config = resolve_config(Some(file.path()), RenderOptions::default()).unwrap();

    let input = r#"{"first_name":"Ada","phone_number":"555-123-4567"}"#;
    let err = render(input.as_bytes(), config).unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
}

/// Test that malformed JSON is reported rather than rendered
#[test]
fn test_malformed_input_is_an_error() {
    let file = config_file("");
    let config = resolve_config(Some(file.path()), RenderOptions::default()).unwrap();

    let result = render("{\"first_name\":".as_bytes(), config);
    assert!(result.is_err());
}

/// Test the field mapping table lists every key
#[test]
fn test_field_table_lists_all_keys() {
    let table = auth_model_cli::render::field_table();
    for key in ["first_name", "last_name", "phone_number", "email"] {
        assert!(table.contains(key), "missing {key}");
    }
    assert!(table.contains("phone number"));
}
