//! Configuration file loading tests
//!
//! Missing files degrade to defaults; malformed files are reported.

use songmeta_common::config::{load_toml_config, LoggingConfig};
use songmeta_common::{ConfigOverrides, Error, ServiceConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_explicit_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let config = load_toml_config(Some(&path)).expect("missing file should not be fatal");

    assert!(config.port.is_none());
    assert!(config.music_service_url.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
fn test_loads_values_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
bind = "127.0.0.1"
port = 5800
database_url = "sqlite::memory:"
search_limit = 10

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let toml_config = load_toml_config(Some(&path)).unwrap();
    assert_eq!(toml_config.port, Some(5800));
    assert_eq!(toml_config.search_limit, Some(10));

    let config = ServiceConfig::resolve(ConfigOverrides::default(), toml_config).unwrap();
    assert_eq!(config.listen_addr(), "127.0.0.1:5800");
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.search_limit, 10);
}

#[test]
fn test_malformed_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "port = [1, 2").unwrap();

    let result = load_toml_config(Some(&path));
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("config.toml")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_empty_file_is_all_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let toml_config = load_toml_config(Some(&path)).unwrap();
    assert!(toml_config.bind.is_none());
    assert!(matches!(toml_config.logging, LoggingConfig { level: None }));
}
