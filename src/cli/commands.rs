//! Command handlers
//!
//! Each handler mirrors one CLI subcommand but takes plain arguments, so the
//! commands can be called programmatically without depending on clap.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{
    ordering_to_int, Operator, PreReleaseRule, Strategy, Template, Version, SEMVER, TAG,
};
use crate::error::{Result, VersionError};
use crate::git::{collect_metadata, Git2Repository};
use crate::metadata::{resolve_detailed, RepositoryMetadata, Resolution};

/// Fields and renderings of a parsed version
#[derive(Debug, Clone, PartialEq)]
pub struct VersionReport {
    pub version: Version,
    pub tag: String,
    pub semver: String,
    pub is_pre_release: bool,
}

impl VersionReport {
    pub fn new(version: Version, rule: PreReleaseRule) -> Self {
        VersionReport {
            tag: version.format(TAG),
            semver: version.format(SEMVER),
            is_pre_release: version.is_pre_release_by(rule),
            version,
        }
    }
}

/// Arguments for advancing a version
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// Version to advance
    pub version: String,

    /// Field to advance
    pub strategy: Strategy,

    /// Pre-release label to start or continue
    pub pre_release: Option<String>,

    /// Exact value for the advanced field
    pub value: Option<i64>,

    /// Output template
    pub format: Template,
}

/// Parse a version and describe it
pub fn parse_version(input: &str, rule: PreReleaseRule) -> Result<VersionReport> {
    let version = Version::parse(input)?;
    if version.is_empty() {
        return Err(VersionError::invalid(input));
    }

    Ok(VersionReport::new(version, rule))
}

/// Advance a version and render the result
pub fn bump_version(args: &BumpArgs) -> Result<String> {
    let version = Version::parse(&args.version)?;
    let next = version.try_advance(args.strategy, args.pre_release.as_deref(), args.value)?;

    debug!(from = %version, to = %next, strategy = %args.strategy, "advanced version");
    Ok(next.format(args.format.as_str()))
}

/// Compare two versions
///
/// Without an operator the result is `-1`, `0` or `1`; with one it is
/// `true` or `false`.
pub fn compare_versions(left: &str, right: &str, operator: Option<Operator>) -> Result<String> {
    let left = Version::parse(left)?;
    let right = Version::parse(right)?;

    Ok(match operator {
        Some(operator) => left.compare_with(&right, operator).to_string(),
        None => ordering_to_int(left.compare(&right)).to_string(),
    })
}

/// Resolve the version to report from a metadata file
pub fn resolve_version(metadata_file: &Path, format: &Template) -> Result<Resolution> {
    let metadata = RepositoryMetadata::from_file(metadata_file)?;
    Ok(resolve_detailed(&metadata, format.as_str()))
}

/// Arguments for collecting metadata from a git checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CollectArgs {
    /// Directory inside the repository
    pub path: PathBuf,

    /// File to write the metadata to; printed when absent
    pub output: Option<PathBuf>,
}

/// Describe the checkout at `args.path`, writing the result when asked to
pub fn collect(args: &CollectArgs) -> Result<RepositoryMetadata> {
    let repo = Git2Repository::open(&args.path)?;
    let metadata = collect_metadata(&repo)?;

    if let Some(output) = &args.output {
        metadata.write_to_file(output)?;
        debug!(path = %output.display(), "wrote metadata file");
    }

    Ok(metadata)
}
