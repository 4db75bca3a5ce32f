use std::io::Write;
use std::path::PathBuf;

use kundli_config::{ConfigError, KundliConfig};

#[test]
fn load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[geocoder]
api_key = "abc123"
endpoint = "http://localhost:8080/geocode"
timeout_secs = 3

[chart]
size_px = 600
title = "Birth Chart"
output = "out/chart.svg"
"#
    )
    .unwrap();

    let cfg = KundliConfig::load(file.path()).unwrap();
    assert_eq!(cfg.require_api_key(), Ok("abc123"));
    assert_eq!(cfg.geocoder.endpoint, "http://localhost:8080/geocode");
    assert_eq!(cfg.geocoder.timeout_secs, 3);
    assert_eq!(cfg.chart.size_px, 600);
    assert_eq!(cfg.chart.title.as_deref(), Some("Birth Chart"));
    assert_eq!(cfg.chart.output, PathBuf::from("out/chart.svg"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KundliConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[geocoder\napi_key = ").unwrap();
    assert!(matches!(
        KundliConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn dotenv_file_supplies_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "# local secrets\nOPENCAGE_API_KEY=dotenv-key\nOTHER=1\n").unwrap();

    let mut cfg = KundliConfig::default();
    cfg.apply_dotenv(&path).unwrap();
    assert_eq!(cfg.require_api_key(), Ok("dotenv-key"));
}

#[test]
fn dotenv_without_key_keeps_file_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "OTHER=1\n").unwrap();

    let mut cfg = KundliConfig::from_toml_str("[geocoder]\napi_key = \"file-key\"\n").unwrap();
    cfg.apply_dotenv(&path).unwrap();
    assert_eq!(cfg.require_api_key(), Ok("file-key"));
}

#[test]
fn missing_dotenv_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = KundliConfig::default();
    assert!(matches!(
        cfg.apply_dotenv(&dir.path().join(".env")),
        Err(ConfigError::Io { .. })
    ));
}
