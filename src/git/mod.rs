//! Git introspection for version metadata
//!
//! This module provides a trait-based abstraction over the handful of git
//! queries needed to describe a checkout, allowing both a real repository
//! and an in-memory mock to produce [`RepositoryMetadata`].
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust,no_run
//! # use version_schema::git::{collect_metadata, Git2Repository};
//! # fn example() -> version_schema::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! let metadata = collect_metadata(&repo)?;
//! println!("{} commits since {:?}", metadata.commits, metadata.tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use crate::metadata::RepositoryMetadata;
use tracing::debug;

/// Length of abbreviated commit hashes
pub const SHORT_HASH_LEN: usize = 7;

/// Git queries needed to describe a checkout
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to [crate::error::VersionError].
pub trait Repository {
    /// Abbreviated hash of the HEAD commit
    ///
    /// # Returns
    /// * `Ok(Some(hash))` - HEAD points at a commit
    /// * `Ok(None)` - If the repository has no commits yet
    fn head_hash(&self) -> Result<Option<String>>;

    /// Name of the checked out branch, `None` for a detached HEAD
    fn current_branch(&self) -> Result<Option<String>>;

    /// Closest tag reachable from HEAD
    ///
    /// When several tags point at the same commit, the highest version wins.
    fn nearest_tag(&self) -> Result<Option<String>>;

    /// Number of commits reachable from HEAD but not from `tag`
    ///
    /// Without a tag, counts every commit reachable from HEAD.
    fn commits_since(&self, tag: Option<&str>) -> Result<u64>;

    /// Whether tracked files differ from HEAD (untracked files are ignored)
    fn is_dirty(&self) -> Result<bool>;
}

/// Describe the checkout of `repo` as [`RepositoryMetadata`]
pub fn collect_metadata<R: Repository + ?Sized>(repo: &R) -> Result<RepositoryMetadata> {
    let tag = repo.nearest_tag()?;
    let commits = repo.commits_since(tag.as_deref())?;

    let metadata = RepositoryMetadata {
        tag,
        branch: repo.current_branch()?,
        hash: repo.head_hash()?,
        commits,
        is_dirty: repo.is_dirty()?,
    };

    debug!(?metadata, "collected repository metadata");
    Ok(metadata)
}
