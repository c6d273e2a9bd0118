//! Theme configuration loading

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use velo_theme::{ColorScheme, ColorToken, ThemeConfig, ThemeError, ThemePreference};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("velo-theme-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn load_from_directory() {
    let dir = scratch_dir("dir");
    fs::write(
        dir.join("velo-theme.toml"),
        "initial_theme = \"light\"\nmarker_attribute = \"data-mode\"\n\n[palette.light]\noverlay = \"rgba(0, 0, 0, 0.5)\"\n",
    )
    .unwrap();

    let config = ThemeConfig::load_from_path(&dir).unwrap();
    assert_eq!(config.initial_theme, ThemePreference::Light);

    let stylesheet = config.stylesheet().unwrap();
    assert_eq!(stylesheet.marker_attribute(), "data-mode");
    assert_eq!(
        stylesheet
            .bundle()
            .for_scheme(ColorScheme::Light)
            .get(ColorToken::Overlay)
            .to_css(),
        "rgba(0,0,0,0.5)"
    );
    assert!(stylesheet.to_css().contains("body[data-mode='dark']"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_file_reports_path() {
    let path = scratch_dir("missing").join("absent.toml");
    let err = ThemeConfig::load_from_path(&path).unwrap_err();
    match err {
        ThemeError::Config { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn toml_round_trip() {
    let mut config = ThemeConfig::default();
    config.initial_theme = ThemePreference::Dark;
    config
        .palette
        .dark
        .insert("primary".to_string(), "#89b4fa".to_string());

    let text = config.to_toml().unwrap();
    assert!(text.contains("initial_theme = \"dark\""));
    assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
}
