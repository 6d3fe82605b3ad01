// tests/config_test.rs
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;
use version_schema::config::{load_config, Config, CONFIG_FILE};
use version_schema::domain::{PreReleaseRule, Template};

#[test]
fn test_load_from_file() {
    let config = load_config(Some(Path::new("tests/fixtures/config_semver.toml")))
        .expect("Failed to load test config");

    assert_eq!(config.resolve.format, Template::SemVer);
    assert_eq!(
        config.resolve.metadata_file,
        PathBuf::from("tests/fixtures/version_clean.json")
    );
    assert_eq!(config.behavior.pre_release_rule(), PreReleaseRule::ZeroMajor);
}

#[test]
fn test_invalid_toml_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[resolve\nformat = ").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
#[serial]
fn test_config_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE),
        "[resolve]\nformat = \"dev\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");

    let config = load_config(None);

    env::set_current_dir(original_dir).unwrap();

    let config = config.expect("Should load config from working directory");
    assert_eq!(config.resolve.format, Template::Dev);
}

#[test]
#[serial]
fn test_empty_working_directory_uses_defaults_or_user_config() {
    let temp_dir = TempDir::new().unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");

    let config = load_config(None);

    env::set_current_dir(original_dir).unwrap();

    let user_config = dirs::config_dir().map(|dir| dir.join(format!(".{}", CONFIG_FILE)));
    if !user_config.is_some_and(|path| path.exists()) {
        assert_eq!(config.unwrap(), Config::default());
    }
}
