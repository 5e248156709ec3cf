use crate::error::{NextVersionError, Result};
use glob::Pattern;

/// Ordered set of glob patterns for paths that never justify a version bump.
///
/// Matching follows shell-glob semantics with the crate's default options:
/// case-sensitive, and `*` may cross `/` separators, so `*.md` covers
/// `docs/README.md` and `docs/**` covers everything under `docs/`.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    /// Compile the configured patterns. A malformed glob is a configuration
    /// error, surfaced before any commit is examined.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    NextVersionError::config(format!("invalid ignore pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(IgnoreList { patterns })
    }

    /// An empty list ignores nothing
    pub fn empty() -> Self {
        IgnoreList {
            patterns: Vec::new(),
        }
    }

    /// Does at least one pattern match this path?
    pub fn is_ignored(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            let matched = pattern.matches(path);
            if matched {
                tracing::debug!("'{}' covered by ignore pattern '{}'", path, pattern.as_str());
            }
            matched
        })
    }

    /// Are all of the paths ignored?
    ///
    /// Vacuously true for an empty changeset (think: `git commit
    /// --allow-empty -m "Trigger CI pipeline"`; nothing there requires a
    /// bump). Otherwise short-circuits false on the first unignored path.
    pub fn all_ignored(&self, paths: &[String]) -> bool {
        paths.iter().all(|path| {
            let ignored = self.is_ignored(path);
            if !ignored {
                tracing::debug!("found a changed non-ignored file: {}", path);
            }
            ignored
        })
    }
}
