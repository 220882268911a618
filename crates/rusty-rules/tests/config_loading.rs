/// Building validators from TOML and JSON configuration

use pretty_assertions::assert_eq;
use rusty_rules::{FormData, RuleError, SubstitutionMode, Validator, ValidatorConfig};
use std::fs;
use std::path::PathBuf;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rusty-rules-{}-{}.toml", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

const SIGNUP_TOML: &str = r#"
[rules]
name = "required|min_length[5]"
age = "required|integer|greater_than_equal_to[18]|less_than_equal_to[60]"

[error_messages.age]
greater_than_equal_to = "You are only {value}. Minimum age requirement is {param}"
"#;

#[test]
fn test_load_toml_file() {
    let path = temp_config("signup", SIGNUP_TOML);
    let config = ValidatorConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.placeholders, SubstitutionMode::FirstOccurrence);

    let validator = Validator::from_config(config).unwrap();
    let outcome = validator.validate(&FormData::from_fields([("name", "Jonas"), ("age", "17")]));
    assert_eq!(
        outcome.get_error("age"),
        Some("You are only 17. Minimum age requirement is 18")
    );
}

#[test]
fn test_empty_file_is_default() {
    let path = temp_config("empty", "   \n");
    let config = ValidatorConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config, ValidatorConfig::default());
}

#[test]
fn test_unparseable_file_names_path() {
    let path = temp_config("broken", "[rules\nname = ");
    let err = ValidatorConfig::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to parse validation config"));
    assert!(message.contains("rusty-rules-broken"));
}

#[test]
fn test_unreadable_path_is_error() {
    let dir = std::env::temp_dir();
    let err = ValidatorConfig::load(&dir).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read validation config"));
}

#[test]
fn test_strict_config_rejects_unknown_rule() {
    let config = ValidatorConfig::from_toml_str(
        r#"
        strict = true

        [rules]
        nickname = "permit_empty|alpha|shout"
        "#,
    )
    .unwrap();

    match Validator::from_config(config) {
        Err(RuleError::UnknownRule { field, rule }) => {
            assert_eq!(field, "nickname");
            assert_eq!(rule, "shout");
        }
        other => panic!("expected unknown rule error, got {:?}", other),
    }
}

#[test]
fn test_json_config_stop_on_first_error() {
    let config = ValidatorConfig::from_json_str(
        r#"{
            "rules": { "code": "min_length[5]|numeric" },
            "stopOnFirstError": true
        }"#,
    )
    .unwrap();
    let validator = Validator::from_config(config).unwrap();

    let outcome = validator.validate(&FormData::from_fields([("code", "ab")]));
    assert_eq!(outcome.get_errors("code").unwrap().len(), 1);
}

#[test]
fn test_accumulate_override_for_single_value() {
    let mut validator = Validator::new();
    validator.set_stop_on_first_error(Some(false));

    let outcome = validator.validate_value("ab", "min_length[5]|numeric", None);
    let rules: Vec<_> = outcome.get_errors("value").unwrap().rules().collect();
    assert_eq!(rules, vec!["min_length", "numeric"]);
}
