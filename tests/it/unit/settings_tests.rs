//! Unit tests for client settings.

use numwire::settings::{ClientSettings, ENV_ARCHIVE, ENV_BASE_URL, ENV_TIMEOUT_MS, default_settings_path};
use numwire::{NanInfFormat, OutputMode};
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let settings = ClientSettings::default();
    assert_eq!(settings.base_url, "http://localhost:9910");
    assert_eq!(settings.timeout(), Duration::from_secs(30));
    assert_eq!(settings.output_format.mode, OutputMode::Large);
    assert_eq!(settings.output_format.nan_inf_format, NanInfFormat::String);
}

#[test]
fn test_default_path() {
    let path = default_settings_path();
    assert!(path.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = path {
        assert!(path.ends_with("numwire/settings.json"));
    }
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"archive": "sinewave", "timeout_ms": 250}"#).unwrap();

    let settings = ClientSettings::load_from(&path).unwrap();
    assert_eq!(settings.archive.as_deref(), Some("sinewave"));
    assert_eq!(settings.timeout(), Duration::from_millis(250));
    assert_eq!(settings.base_url, ClientSettings::default().base_url);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = ClientSettings {
        base_url: "https://mps.example.com".to_string(),
        archive: Some("signals".to_string()),
        max_display_points: 200,
        ..ClientSettings::default()
    };

    settings.save_to(&path).unwrap();
    assert_eq!(ClientSettings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();

    let err = ClientSettings::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("settings.json"));
}

#[test]
fn test_overrides() {
    let env: HashMap<&str, &str> = [
        (ENV_BASE_URL, "http://10.0.0.5:9910"),
        (ENV_ARCHIVE, "sinewave"),
        (ENV_TIMEOUT_MS, "1200"),
    ]
    .into_iter()
    .collect();

    let settings = ClientSettings::default()
        .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(settings.base_url, "http://10.0.0.5:9910");
    assert_eq!(settings.timeout(), Duration::from_millis(1200));
    assert_eq!(
        settings.endpoint("sine").unwrap().as_str(),
        "http://10.0.0.5:9910/sinewave/sine"
    );
}

#[test]
fn test_bad_timeout_override_ignored() {
    let settings = ClientSettings::default().apply_overrides_from(|key| {
        (key == ENV_TIMEOUT_MS).then(|| "soon".to_string())
    });
    assert_eq!(settings.timeout_ms, ClientSettings::default().timeout_ms);
}

#[test]
fn test_endpoint_requires_archive() {
    assert!(ClientSettings::default().endpoint("sine").is_err());
}

#[test]
fn test_downsample_for_display() {
    let settings = ClientSettings {
        max_display_points: 4,
        ..ClientSettings::default()
    };
    let samples: Vec<f64> = (0..10).map(f64::from).collect();

    assert_eq!(settings.downsample_for_display(&samples), vec![0.0, 3.0, 6.0, 9.0]);
    assert_eq!(settings.downsample_for_display(&samples[..3]), vec![0.0, 1.0, 2.0]);
}
