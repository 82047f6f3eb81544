//! Config loading as seen by the application.

use std::fs;

use ordlist_engine::{App, ConfigError, OrdlistConfig, UiOptions};
use tempfile::tempdir;

#[test]
fn config_file_drives_ui_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nascii_only = true\ntui = \"inline\"\n").unwrap();

    let config = OrdlistConfig::load_from(&path).unwrap();
    let app = App::from_config(config.as_ref());
    assert!(app.ui_options().ascii_only);
    assert!(!app.ui_options().high_contrast);
}

#[test]
fn missing_config_is_not_an_error() {
    let dir = tempdir().unwrap();
    let config = OrdlistConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(config.is_none());
    assert_eq!(App::from_config(None).ui_options(), UiOptions::default());
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes").unwrap();

    let err = OrdlistConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}
