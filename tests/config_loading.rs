use rngbias::config::{AppConfig, ConfigManager};
use rngbias::data::InputFormat;
use rngbias::RngbiasError;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rngbias-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn isolated() -> ConfigManager {
    ConfigManager::new().without_file().without_env()
}

#[test]
fn test_defaults_without_sources() {
    let config = isolated().load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let path = temp_file(
        "partial.toml",
        r#"
[sequence]
variables = 30
format = "digits"

[objective]
groups = [[1, 2, 3], [7, 8, 9]]
"#,
    );

    let config = ConfigManager::new().without_env().with_file(&path).load().unwrap();

    assert_eq!(config.sequence.variables, 30);
    assert_eq!(config.sequence.format, InputFormat::Digits);
    assert_eq!(config.objective.groups, vec![vec![1, 2, 3], vec![7, 8, 9]]);
    assert_eq!(config.bias, AppConfig::default().bias);
    assert_eq!(config.constraint, AppConfig::default().constraint);
}

#[test]
fn test_json_file_is_supported() {
    let path = temp_file(
        "bias.json",
        r#"{"bias": {"gamma": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]}}"#,
    );

    let config = ConfigManager::new().without_env().with_file(&path).load().unwrap();
    assert_eq!(config.bias.gamma, vec![1.0; 15]);
}

#[test]
fn test_environment_lists_are_json_text() {
    std::env::set_var("RNGBIASTEST_CONSTRAINT__FEATURES", "[6, 7]");
    std::env::set_var("RNGBIASTEST_CONSTRAINT__LOWER_BOUNDS", "[20, 0]");
    std::env::set_var("RNGBIASTEST_CONSTRAINT__UPPER_BOUNDS", "[30, 10.5]");
    std::env::set_var("RNGBIASTEST_SEQUENCE__VARIABLES", "64");

    let config = ConfigManager::new()
        .without_file()
        .with_env_prefix("RNGBIASTEST")
        .load()
        .unwrap();

    assert_eq!(config.constraint.features, vec![6, 7]);
    assert_eq!(config.constraint.lower_bounds, vec![20.0, 0.0]);
    assert_eq!(config.constraint.upper_bounds, vec![30.0, 10.5]);
    assert_eq!(config.sequence.variables, 64);
}

#[test]
fn test_overrides_win_over_file() {
    let path = temp_file("variables.toml", "[sequence]\nvariables = 30\n");

    let config = ConfigManager::new()
        .without_env()
        .with_file(&path)
        .set_override("sequence.variables", 12i64)
        .load()
        .unwrap();

    assert_eq!(config.sequence.variables, 12);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = ConfigManager::new()
        .without_env()
        .with_file("/nonexistent/rngbias/config.toml")
        .load()
        .unwrap_err();
    assert!(matches!(err, RngbiasError::Configuration(_)));
}

#[test]
fn test_inconsistent_configuration_is_rejected() {
    let cases: [(&str, &str); 6] = [
        ("objective.groups", "[[16]]"),
        ("constraint.features", "[0]"),
        ("constraint.lower_bounds", "[0.0]"),
        ("bias.alpha", "[1, 2, 3]"),
        ("sequence.variables", "0"),
        ("objective.groups", "not json"),
    ];

    for (key, value) in cases {
        let result = isolated().set_override(key, value).load();
        assert!(
            matches!(result, Err(RngbiasError::Configuration(_))),
            "{} = {} should be rejected",
            key,
            value
        );
    }
}

#[test]
fn test_reversed_bounds_are_rejected() {
    let err = isolated()
        .set_override("constraint.features", "[1]")
        .set_override("constraint.lower_bounds", "[5.0]")
        .set_override("constraint.upper_bounds", "[1.0]")
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("invalid bounds"));
}

#[test]
fn test_saved_config_loads_back() {
    let mut config = AppConfig::default();
    config.objective.groups = vec![vec![1], vec![2, 2]];
    let dir = std::env::temp_dir().join(format!("rngbias-save-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("saved.toml");

    ConfigManager::save_to_file(&config, &path).unwrap();
    let loaded = ConfigManager::new().without_env().with_file(&path).load().unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_example_config_matches_defaults() {
    let config = ConfigManager::new()
        .without_env()
        .with_file("config.example.toml")
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}
