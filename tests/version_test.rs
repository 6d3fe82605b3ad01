// tests/version_test.rs
use std::cmp::Ordering;

use version_schema::domain::{Operator, Strategy, Version, DEV, SEMVER, TAG};
use version_schema::VersionError;

fn version() -> Version {
    Version::parse("v1.0.14").expect("Should parse version")
}

#[test]
fn test_parsing() {
    let version = version();
    assert_eq!(version.major, Some(1));
    assert_eq!(version.minor, Some(0));
    assert_eq!(version.patch, Some(14));
    assert_eq!(version.build, None);
    assert!(!version.is_pre_release());
}

#[test]
fn test_advancing() {
    let version = version().advance(Strategy::Minor, Some("alpha"), None);

    assert_eq!(version.major, Some(1));
    assert_eq!(version.minor, Some(1));
    assert_eq!(version.patch, Some(0));
    assert_eq!(version.build, Some(1));
    assert_eq!(version.pre_release.as_deref(), Some("alpha"));
    assert!(version.is_pre_release());
}

#[test]
fn test_comparing() {
    let newer = Version::parse("v1.1.0-alpha.1").unwrap();
    let current = version();

    assert!(!newer.compare_with(&current, Operator::Less));
    assert!(!newer.compare_with(&current, Operator::Equal));
    assert!(newer.compare_with(&current, Operator::Greater));
    assert_eq!(newer.compare(&current), Ordering::Greater);
    assert_eq!(current.compare(&newer), Ordering::Less);
}

#[test]
fn test_formatting() {
    let version = version();
    assert_eq!(version.format(DEV), "v1.0.x");
    assert_eq!(version.format(TAG), "v1.0.14");
    assert_eq!(version.format(SEMVER), "1.0.14");
    assert_eq!(version.format("v%M.%m"), "v1.0");
}

#[test]
fn test_empty_construction() {
    assert_eq!(Version::from_optional(None).unwrap(), Version::default());
    assert_eq!(Version::parse("major").unwrap(), Version::default());
    assert!(Version::parse("").unwrap().is_empty());
}

#[test]
fn test_invalid_input() {
    let err = Version::parse("not-a-version").unwrap_err();
    assert!(matches!(err, VersionError::VersionInvalid(ref input) if input == "not-a-version"));
}

#[test]
fn test_release_cycle() {
    // 1.0.14 -> 1.1.0-alpha.1 -> alpha.2 -> beta.1 -> rc.1 -> 1.1.0
    let alpha = version().advance(Strategy::Minor, Some("alpha"), None);
    let alpha2 = alpha.advance(Strategy::Build, Some("alpha"), None);
    let beta = alpha2.advance(Strategy::Build, Some("beta"), None);
    let rc = beta.advance(Strategy::Build, Some("rc"), None);
    let release = Version {
        pre_release: None,
        build: None,
        ..rc.clone()
    };

    let chain = [&alpha, &alpha2, &beta, &rc, &release];
    let rendered: Vec<String> = chain.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        rendered,
        [
            "v1.1.0-alpha.1",
            "v1.1.0-alpha.2",
            "v1.1.0-beta.1",
            "v1.1.0-rc.1",
            "v1.1.0"
        ]
    );

    for pair in chain.windows(2) {
        assert_eq!(pair[0].compare(pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
    }
}
