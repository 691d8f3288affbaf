//! Config loading, validation, and live reload.

use std::fs;
use std::path::PathBuf;

use tourdesk::config::{Config, ConfigError, ConfigStore};

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(&PathBuf::from("/nonexistent/tourdesk.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[fares]
tax_rate = 0.2

[[fares.promos]]
code = "SPRING10"
amount = 10

[assistant]
delay_ticks = 4
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.fares.tax_rate, 0.2);
    assert_eq!(config.fares.promos.len(), 1);
    assert_eq!(config.fares.promos[0].code, "SPRING10");
    assert_eq!(config.assistant.delay_ticks, 4);
    // Untouched sections keep their defaults.
    assert_eq!(config.fares.service_fee_rate, 0.04);
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn out_of_range_rate_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[fares]\ntax_rate = 1.5\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[fares\ntax_rate = ???\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn store_reload_picks_up_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let store = ConfigStore::new(Config::default(), path.clone());
    assert_eq!(store.get().ui.currency, "$");

    fs::write(&path, "[ui]\ncurrency = \"€\"\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().ui.currency, "€");
}

#[test]
fn failed_reload_keeps_the_previous_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let store = ConfigStore::new(Config::default(), path.clone());

    fs::write(&path, "[assistant]\ndelay_ticks = 0\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get(), Config::default());
}
