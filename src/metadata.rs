//! Repository metadata and development version resolution
//!
//! A build step records where the checkout stands relative to its tags in a
//! small JSON file:
//!
//! ```json
//! {"tag": "v2.0.0", "branch": "main", "hash": "1a2b3c4", "commits": 3, "isDirty": true}
//! ```
//!
//! [`resolve_from_metadata`] turns that record into the version string to
//! report: the exact tag for a clean checkout sitting on it, a `-dev.N`
//! version otherwise.

use crate::boundary::BoundaryWarning;
use crate::domain::{Strategy, Version, DEV};
use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Branch assumed when neither branch nor tag is known
pub const DEFAULT_BRANCH: &str = "master";

/// Pre-release label of synthesized development versions
pub const DEV_LABEL: &str = "dev";

/// State of a checkout relative to its nearest tag
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryMetadata {
    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,

    /// Commits between the tag and HEAD
    #[serde(default)]
    pub commits: u64,

    #[serde(default)]
    pub is_dirty: bool,
}

impl RepositoryMetadata {
    /// Decode metadata from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read metadata from a JSON file
    ///
    /// # Returns
    /// * `Ok(RepositoryMetadata)` - Decoded metadata
    /// * `Err(VersionError::Metadata)` - If the file is missing or not valid metadata
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| VersionError::metadata(&display, e))?;

        serde_json::from_str(&content).map_err(|e| VersionError::metadata(&display, e))
    }

    /// Write metadata as pretty-printed JSON
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Whether HEAD differs from the tagged commit
    pub fn is_ahead(&self) -> bool {
        self.is_dirty || self.commits > 0
    }
}

impl Version {
    /// Read the tag recorded in a metadata file
    ///
    /// # Returns
    /// * `Ok(Some(Version))` - Parsed tag
    /// * `Ok(None)` - If the file records no tag
    /// * `Err` - If the file cannot be read or the tag is not a version
    pub fn from_metadata_file<P: AsRef<Path>>(path: P) -> Result<Option<Version>> {
        let metadata = RepositoryMetadata::from_file(path)?;

        match non_empty(metadata.tag.as_deref()) {
            Some(tag) => Version::parse(tag).map(Some),
            None => Ok(None),
        }
    }
}

/// Outcome of a resolution together with the warnings raised on the way
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    pub version: Option<String>,
    pub warnings: Vec<BoundaryWarning>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse one side of the metadata, treating failures as absent
fn parse_side(input: Option<&str>) -> std::result::Result<Option<Version>, String> {
    match input {
        None => Ok(None),
        Some(text) => match Version::parse(text) {
            Ok(version) if version.is_empty() => Ok(None),
            Ok(version) => Ok(Some(version)),
            Err(e) => Err(e.to_string()),
        },
    }
}

/// Resolve the version string to report for a checkout
///
/// 1. the branch defaults to the tag, then to `master`
/// 2. tag and branch are parsed; either may fail and is then ignored
/// 3. with no version on either side, returns `dev-<branch>@<hash>`
/// 4. a dirty checkout or one with commits past the tag advances the branch
///    version (else the tag version) to `-dev.<commits>` and renders it with
///    [`DEV`]
/// 5. a clean checkout on its tag renders the tag with `default_format`
///
/// Returns `None` only when no version is left to render.
///
/// # Example
/// ```
/// use version_schema::domain::TAG;
/// use version_schema::metadata::{resolve_from_metadata, RepositoryMetadata};
///
/// let metadata = RepositoryMetadata {
///     tag: Some("v2.0.0".into()),
///     branch: Some("main".into()),
///     hash: Some("1a2b3c4".into()),
///     commits: 3,
///     is_dirty: true,
/// };
/// assert_eq!(resolve_from_metadata(&metadata, TAG).as_deref(), Some("v2.0.x-dev.3"));
/// ```
pub fn resolve_from_metadata(
    metadata: &RepositoryMetadata,
    default_format: &str,
) -> Option<String> {
    resolve_detailed(metadata, default_format).version
}

/// Same as [`resolve_from_metadata`], also reporting why the result looks the way it does
pub fn resolve_detailed(metadata: &RepositoryMetadata, default_format: &str) -> Resolution {
    let mut warnings = Vec::new();

    let tag = non_empty(metadata.tag.as_deref());
    let named_branch = non_empty(metadata.branch.as_deref());
    let branch = named_branch.or(tag).unwrap_or(DEFAULT_BRANCH);

    let tag_version = match parse_side(tag) {
        Ok(version) => version,
        Err(reason) => {
            debug!(tag = tag.unwrap_or_default(), %reason, "tag is not a version");
            warnings.push(BoundaryWarning::UnparsableTag {
                tag: tag.unwrap_or_default().to_string(),
                reason,
            });
            None
        }
    };

    // A branch defaulted from the tag has already been parsed above
    let branch_version = if named_branch.is_none() && tag.is_some() {
        tag_version.clone()
    } else {
        match parse_side(Some(branch)) {
            Ok(version) => version,
            Err(reason) => {
                debug!(branch, %reason, "branch is not a version");
                warnings.push(BoundaryWarning::UnparsableBranch {
                    branch: branch.to_string(),
                    reason,
                });
                None
            }
        }
    };

    let hash = metadata.hash.as_deref().unwrap_or_default();

    if tag_version.is_none() && branch_version.is_none() {
        info!(branch, hash, "no version available, using branch reference");
        warnings.push(BoundaryWarning::NoVersion {
            branch: branch.to_string(),
            hash: hash.to_string(),
        });

        return Resolution {
            version: Some(format!("dev-{}@{}", branch, hash)),
            warnings,
        };
    }

    let (version, format) = if metadata.is_ahead() {
        warnings.push(BoundaryWarning::AheadOfTag {
            tag: tag.map(str::to_string),
            commits: metadata.commits,
            is_dirty: metadata.is_dirty,
        });

        let commits = i64::try_from(metadata.commits).unwrap_or(i64::MAX);
        let version = branch_version
            .or(tag_version)
            .map(|v| v.advance(Strategy::Build, Some(DEV_LABEL), Some(commits)));

        (version, DEV)
    } else {
        (tag_version, default_format)
    };

    let version = version.map(|v| v.format(format));
    info!(resolved = version.as_deref().unwrap_or("<none>"), "resolved version");

    Resolution { version, warnings }
}
