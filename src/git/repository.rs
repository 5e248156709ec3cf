use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;
use git2::Repository as Git2Repo;
use std::path::Path;

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

    /// Paths touched by a single commit, from a diff against its first
    /// parent (or the empty tree for a root commit). Merge commits report
    /// an empty list, matching what `git diff-tree` prints for them.
    fn changed_files(&self, commit: &git2::Commit<'_>) -> Result<Vec<String>> {
        if commit.parent_count() > 1 {
            return Ok(Vec::new());
        }

        let tree = commit.tree()?;
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(commit.parent(0)?.tree()?),
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let path = delta.new_file().path().or_else(|| delta.old_file().path());
            if let Some(path) = path {
                files.push(path.to_string_lossy().into_owned());
            }
        }

        Ok(files)
    }
}

impl Repository for Git2Repository {
    fn commits_since(&self, range_start: &str) -> Result<Vec<Commit>> {
        let start_oid = self
            .repo
            .revparse_single(range_start)?
            .peel(git2::ObjectType::Commit)?
            .id();

        let head_oid = self.repo.head()?.peel_to_commit()?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;
        revwalk.hide(start_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let title = commit.summary().unwrap_or("").to_string();
            let changed_files = self.changed_files(&commit)?;

            commits.push(Commit::new(oid.to_string(), title, changed_files));
        }

        Ok(commits)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync for the
// read-only operations used here, via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
