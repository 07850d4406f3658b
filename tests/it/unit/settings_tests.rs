//! Unit tests for settings loading and saving.

use moodboard::constants::{EXPORT_BACKGROUND, EXPORT_SCALE, NUDGE_STEP, SAMPLE_IMAGE_URLS};
use moodboard::settings::Settings;
use image::Rgba;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.export_dir, None);
    assert_eq!(settings.export_scale, EXPORT_SCALE);
    assert_eq!(settings.background_color, EXPORT_BACKGROUND);
    assert_eq!(settings.nudge_step, NUDGE_STEP);
    assert_eq!(settings.sample_urls.len(), SAMPLE_IMAGE_URLS.len());
    assert_eq!(settings.background_rgba(), Rgba([0xf8, 0xfa, 0xfc, 255]));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("nope.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "nudge_step": 4, "export_dir": "/tmp/boards" }"#).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.nudge_step, 4);
    assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/boards")));
    assert_eq!(settings.export_dir(), PathBuf::from("/tmp/boards"));
    assert_eq!(settings.export_scale, EXPORT_SCALE);
}

#[test]
fn test_invalid_values_are_sanitized() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "export_scale": 100.0,
            "background_color": "purple",
            "nudge_step": 0,
            "sample_urls": []
        }"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.export_scale, 8.0);
    assert_eq!(settings.background_color, EXPORT_BACKGROUND);
    assert_eq!(settings.nudge_step, NUDGE_STEP);
    assert_eq!(settings.sample_urls, Settings::default().sample_urls);
}

#[test]
fn test_malformed_json_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config").join("settings.json");

    let settings = Settings {
        export_scale: 1.0,
        background_color: "#000000".to_string(),
        nudge_step: 25,
        sample_urls: vec!["https://example.com/a.png".to_string()],
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_serialized_layout() {
    let settings = Settings {
        sample_urls: vec!["https://example.com/a.png".to_string()],
        ..Settings::default()
    };
    insta::assert_snapshot!(serde_json::to_string_pretty(&settings).unwrap(), @r###"
    {
      "export_dir": null,
      "export_scale": 2.0,
      "background_color": "#f8fafc",
      "nudge_step": 10,
      "sample_urls": [
        "https://example.com/a.png"
      ]
    }
    "###);
}

#[test]
fn test_first_launch_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moodboard").join("settings.json");

    let settings = Settings::load_or_init(&path);

    assert_eq!(settings, Settings::default());
    assert!(path.is_file());
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_existing_settings_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "nudge_step": 7 }"#).unwrap();

    let settings = Settings::load_or_init(&path);

    assert_eq!(settings.nudge_step, 7);
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{ "nudge_step": 7 }"#);
}
