//! Tests for loading and saving theme documents on disk

use std::fs;

use plume_theme::color::rgba8;
use plume_theme::config::{StyleConfig, ThemeSource};
use plume_theme::error::ThemeError;
use plume_theme::theme::{Theme, ThemeMeta};
use vello::peniko::Color;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ocean.json");

    let theme = Theme::light()
        .with_meta(ThemeMeta::new("Ocean", "2.1", "tester"))
        .with_colors(|colors| colors.primary = Color::from_rgb8(0x1b, 0x6a, 0xc9))
        .with_metrics(|metrics| metrics.border_radius = 7.0);
    theme.save(&path).unwrap();

    let loaded = Theme::from_file(&path).unwrap();
    assert_eq!(loaded, theme);
    assert_eq!(loaded.meta().name, "Ocean");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Theme::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ThemeError::ThemeFileNotFound { .. })));
}

#[test]
fn test_partial_override_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.json");
    fs::write(&path, r##"{ "primaryColor": "#FF0000", "notAKey": "#00ff00" }"##).unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(rgba8(theme.colors().primary), [255, 0, 0, 255]);
    assert_eq!(theme.colors().primary_disabled, Theme::light().colors().primary_disabled);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"primaryColor\": ").unwrap();

    assert!(matches!(Theme::from_file(&path), Err(ThemeError::Json(_))));
}

#[test]
fn test_config_file_selects_theme_document() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("custom.json");
    fs::write(&theme_path, r##"{ "meta": { "name": "Custom" }, "focusColor": "#00000000" }"##)
        .unwrap();

    let config_path = dir.path().join("style.toml");
    fs::write(
        &config_path,
        format!(
            "theme = \"file:{}\"\nanimations = false\n",
            theme_path.display()
        ),
    )
    .unwrap();

    let config = StyleConfig::from_file(&config_path).unwrap();
    assert_eq!(config.theme, ThemeSource::File(theme_path));
    assert!(!config.animations);

    let theme = config.resolve_theme().unwrap();
    assert_eq!(theme.meta().name, "Custom");
    assert_eq!(theme.colors().focus, Color::TRANSPARENT);
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(&path, "animations = \"maybe\"").unwrap();

    assert!(matches!(
        StyleConfig::from_file(&path),
        Err(ThemeError::Config { .. })
    ));
}

#[test]
fn test_unreadable_theme_source_falls_back() {
    let config = StyleConfig::new().with_theme(ThemeSource::parse("file:/nonexistent/plume.json"));
    assert_eq!(config.resolve_theme_or_default(), Theme::light());
}
