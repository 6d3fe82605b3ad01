use crate::error::Result;
use crate::git::{Repository, SHORT_HASH_LEN};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    head: Option<String>,
    branch: Option<String>,
    nearest_tag: Option<String>,
    commits_since_tag: HashMap<String, u64>,
    total_commits: u64,
    dirty: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full HEAD hash
    pub fn with_head(mut self, hash: impl Into<String>) -> Self {
        self.head = Some(hash.into());
        self
    }

    /// Set the checked out branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the nearest tag and how many commits HEAD is past it
    pub fn with_tag(mut self, tag: impl Into<String>, commits_since: u64) -> Self {
        let tag = tag.into();
        self.commits_since_tag.insert(tag.clone(), commits_since);
        self.nearest_tag = Some(tag);
        self
    }

    /// Set the number of commits reachable from HEAD
    pub fn with_total_commits(mut self, commits: u64) -> Self {
        self.total_commits = commits;
        self
    }

    /// Mark the working tree as modified
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }
}

impl Repository for MockRepository {
    fn head_hash(&self) -> Result<Option<String>> {
        Ok(self
            .head
            .as_ref()
            .map(|hash| hash.chars().take(SHORT_HASH_LEN).collect()))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn nearest_tag(&self) -> Result<Option<String>> {
        Ok(self.nearest_tag.clone())
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<u64> {
        Ok(match tag {
            Some(tag) => self.commits_since_tag.get(tag).copied().unwrap_or(0),
            None => self.total_commits,
        })
    }

    fn is_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }
}
