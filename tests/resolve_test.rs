// tests/resolve_test.rs
use std::io::Write;

use tempfile::NamedTempFile;
use version_schema::boundary::BoundaryWarning;
use version_schema::cli::resolve_version;
use version_schema::domain::{Template, Version, TAG};
use version_schema::metadata::{resolve_detailed, resolve_from_metadata, RepositoryMetadata};
use version_schema::VersionError;

#[test]
fn test_clean_tag_from_fixture() {
    let metadata = RepositoryMetadata::from_file("tests/fixtures/version_clean.json")
        .expect("Failed to load fixture");

    assert_eq!(resolve_from_metadata(&metadata, TAG).as_deref(), Some("v2.0.0"));
}

#[test]
fn test_dirty_branch_from_fixture() {
    let metadata = RepositoryMetadata::from_file("tests/fixtures/version_dirty.json")
        .expect("Failed to load fixture");

    let resolution = resolve_detailed(&metadata, TAG);
    assert_eq!(resolution.version.as_deref(), Some("v2.0.x-dev.3"));
    assert!(resolution
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::AheadOfTag { commits: 3, .. })));
}

#[test]
fn test_resolve_version_command_uses_format() {
    let resolution = resolve_version(
        "tests/fixtures/version_clean.json".as_ref(),
        &Template::SemVer,
    )
    .unwrap();
    assert_eq!(resolution.version.as_deref(), Some("2.0.0"));
    assert!(resolution.warnings.is_empty());
}

#[test]
fn test_metadata_file_round_trip() {
    let metadata = RepositoryMetadata {
        tag: Some("v0.9.1".to_string()),
        branch: Some("develop".to_string()),
        hash: Some("deadbee".to_string()),
        commits: 11,
        is_dirty: false,
    };

    let file = NamedTempFile::new().unwrap();
    metadata.write_to_file(file.path()).unwrap();

    let loaded = RepositoryMetadata::from_file(file.path()).unwrap();
    assert_eq!(loaded, metadata);
    assert_eq!(
        resolve_from_metadata(&loaded, TAG).as_deref(),
        Some("v0.9.x-dev.11")
    );
}

#[test]
fn test_version_from_metadata_file() {
    let version = Version::from_metadata_file("tests/fixtures/version_dirty.json").unwrap();
    assert_eq!(version, Some(Version::new(2, 0, 0)));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"branch": "main"}"#).unwrap();
    file.flush().unwrap();
    assert_eq!(Version::from_metadata_file(file.path()).unwrap(), None);
}

#[test]
fn test_unreadable_metadata_file() {
    let err = RepositoryMetadata::from_file("tests/fixtures/missing.json").unwrap_err();
    assert!(matches!(err, VersionError::Metadata { .. }));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    file.flush().unwrap();

    let err = RepositoryMetadata::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Unable to read version metadata"));
}
