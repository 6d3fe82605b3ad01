use crate::domain::compare_versions;
use crate::error::Result;
use crate::git::SHORT_HASH_LEN;
use git2::{ErrorCode, Oid, Repository as Git2Repo, StatusOptions};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// OID of the HEAD commit, `None` while the branch is unborn
    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Map every tagged commit to the names of its tags
    ///
    /// Handles both lightweight and annotated tags.
    fn tagged_commits(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };

            // Tags on trees or blobs cannot describe a commit
            if let Ok(commit) = reference.peel_to_commit() {
                tagged
                    .entry(commit.id())
                    .or_default()
                    .push(tag_name.to_string());
            }
        }

        Ok(tagged)
    }

    fn tag_commit(&self, tag_name: &str) -> Result<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))?;

        Ok(reference.peel_to_commit()?.id())
    }
}

impl super::Repository for Git2Repository {
    fn head_hash(&self) -> Result<Option<String>> {
        Ok(self.head_oid()?.map(|oid| {
            let hash = oid.to_string();
            hash[..SHORT_HASH_LEN.min(hash.len())].to_string()
        }))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn nearest_tag(&self) -> Result<Option<String>> {
        let Some(head) = self.head_oid()? else {
            return Ok(None);
        };

        let tagged = self.tagged_commits()?;
        if tagged.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;

            if let Some(names) = tagged.get(&oid) {
                let best = names
                    .iter()
                    .max_by(|a, b| {
                        compare_versions(
                            a.trim_start_matches(['v', 'V']),
                            b.trim_start_matches(['v', 'V']),
                        )
                    })
                    .cloned();

                debug!(commit = %oid, tag = ?best, "found nearest tag");
                return Ok(best);
            }
        }

        Ok(None)
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<u64> {
        let Some(head) = self.head_oid()? else {
            return Ok(0);
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        if let Some(tag) = tag {
            revwalk.hide(self.tag_commit(tag)?)?;
        }

        let mut count = 0;
        for oid in revwalk {
            oid?;
            count += 1;
        }

        Ok(count)
    }

    fn is_dirty(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;

        Ok(!statuses.is_empty())
    }
}
