//! Integration tests for Settings loading with layered precedence:
//! defaults → config file → POLYSUIT_* env vars → CLI workspace override.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use polysuit::config::Settings;
use polysuit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_no_sources_when_loading_then_defaults_apply() {
    let settings = Settings::load_with_file(None, None).expect("load");

    assert_eq!(settings.workspace_dir, PathBuf::from("."));
    assert_eq!(settings.layer_extension, "geojson");
    assert_eq!(settings.suitability_field, "suitability");
}

#[test]
fn given_config_file_when_loading_then_file_overrides_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join("polysuit.toml");
    fs::write(
        &config_path,
        r#"
layer_extension = "json"
suitability_field = "score_total"
"#,
    )
    .expect("write config");

    let settings = Settings::load_with_file(Some(&config_path), None).expect("load");

    assert_eq!(settings.layer_extension, "json");
    assert_eq!(settings.suitability_field, "score_total");
    // untouched field keeps its default
    assert_eq!(settings.workspace_dir, PathBuf::from("."));
}

#[test]
fn given_missing_config_file_when_loading_then_defaults_apply() {
    let settings =
        Settings::load_with_file(Some(Path::new("/nonexistent/polysuit.toml")), None)
            .expect("load");
    assert_eq!(settings.layer_extension, "geojson");
}

#[test]
fn given_workspace_override_when_loading_then_it_beats_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join("polysuit.toml");
    fs::write(&config_path, "workspace_dir = \"/from/file\"\n").expect("write config");

    let settings =
        Settings::load_with_file(Some(&config_path), Some(dir.path())).expect("load");

    assert_eq!(settings.workspace_dir, dir.path());
}

#[test]
fn given_env_var_when_loading_then_it_overrides_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join("polysuit.toml");
    fs::write(&config_path, "layer_extension = \"json\"\n").expect("write config");

    std::env::set_var("POLYSUIT_LAYER_EXTENSION", "gjson");
    let settings = Settings::load_with_file(Some(&config_path), None).expect("load");
    std::env::remove_var("POLYSUIT_LAYER_EXTENSION");

    assert_eq!(settings.layer_extension, "gjson");
}
