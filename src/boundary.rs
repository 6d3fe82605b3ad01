use std::fmt;

use crate::git::SHORT_HASH_LEN;

/// Warnings raised while resolving a version from repository metadata.
/// These are non-fatal and never stop resolution; they explain the result.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a version
    UnparsableTag { tag: String, reason: String },
    /// Branch name is not a version, which is expected for most branches
    UnparsableBranch { branch: String, reason: String },
    /// Checkout is ahead of its tag or has local changes
    AheadOfTag {
        tag: Option<String>,
        commits: u64,
        is_dirty: bool,
    },
    /// Neither tag nor branch carried a version
    NoVersion { branch: String, hash: String },
}

impl BoundaryWarning {
    /// Whether the warning describes the normal case, such as a branch
    /// named `main`, rather than something worth flagging
    pub fn is_expected(&self) -> bool {
        matches!(self, BoundaryWarning::UnparsableBranch { .. })
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::UnparsableBranch { branch, reason } => {
                write!(f, "Branch '{}' is not a version: {}", branch, reason)
            }
            BoundaryWarning::AheadOfTag {
                tag,
                commits,
                is_dirty,
            } => {
                let tag = tag.as_deref().unwrap_or("branch version");
                let dirty = if *is_dirty { ", working tree dirty" } else { "" };
                write!(
                    f,
                    "{} commit(s) ahead of '{}'{}, reporting a development version",
                    commits, tag, dirty
                )
            }
            BoundaryWarning::NoVersion { branch, hash } => {
                let short_hash: String = hash.chars().take(SHORT_HASH_LEN).collect();
                write!(
                    f,
                    "No version found on branch '{}' (current: {})",
                    branch, short_hash
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahead_of_tag_display() {
        let warning = BoundaryWarning::AheadOfTag {
            tag: Some("v2.0.0".to_string()),
            commits: 3,
            is_dirty: true,
        };
        assert_eq!(
            warning.to_string(),
            "3 commit(s) ahead of 'v2.0.0', working tree dirty, reporting a development version"
        );
    }

    #[test]
    fn test_only_branch_names_are_expected() {
        let branch = BoundaryWarning::UnparsableBranch {
            branch: "main".to_string(),
            reason: "Invalid version \"main\" given".to_string(),
        };
        let tag = BoundaryWarning::UnparsableTag {
            tag: "release".to_string(),
            reason: "Invalid version \"release\" given".to_string(),
        };
        assert!(branch.is_expected());
        assert!(!tag.is_expected());
    }

    #[test]
    fn test_no_version_shortens_hash() {
        let warning = BoundaryWarning::NoVersion {
            branch: "main".to_string(),
            hash: "abc1234def5678".to_string(),
        };
        assert!(warning.to_string().contains("(current: abc1234)"));
    }

    #[test]
    fn test_no_version_shortens_multibyte_hash() {
        let warning = BoundaryWarning::NoVersion {
            branch: "x".to_string(),
            hash: "ééééé".to_string(),
        };
        assert!(warning.to_string().ends_with("(current: ééééé)"));

        let warning = BoundaryWarning::NoVersion {
            branch: "x".to_string(),
            hash: "ééééééééé".to_string(),
        };
        assert!(warning.to_string().ends_with("(current: ééééééé)"));
    }
}
