use crate::domain::Commit;
use crate::error::{NextVersionError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commits: Vec<Commit>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock whose `commits_since` always fails, for exercising
    /// collaborator-failure paths
    pub fn failing(reason: impl Into<String>) -> Self {
        MockRepository {
            commits: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Add a commit to the mock repository
    pub fn add_commit(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        changed_files: &[&str],
    ) {
        self.commits.push(Commit::new(
            id,
            title,
            changed_files.iter().map(|f| f.to_string()).collect(),
        ));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn commits_since(&self, _range_start: &str) -> Result<Vec<Commit>> {
        if let Some(reason) = &self.failure {
            return Err(NextVersionError::Git(git2::Error::from_str(reason)));
        }

        Ok(self.commits.clone())
    }
}
