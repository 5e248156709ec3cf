//! Git access layer
//!
//! This module provides a trait-based abstraction over the one git operation
//! this tool consumes: enumerating the commits in a range together with their
//! titles and per-commit changed files. The concrete implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a canned implementation for testing
//!
//! Everything above this layer depends on the [Repository] trait, so the
//! decision pipeline can be exercised without a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;

/// Source of commit metadata for the bump decision.
///
/// A failure here is fatal for the run and is not retried; transient and
/// permanent errors are not distinguished.
pub trait Repository: Send + Sync {
    /// List the commits in `(range_start, HEAD]`.
    ///
    /// `range_start` is an opaque revision identifier (SHA, tag, ref) that
    /// bounds the range exclusively. Each returned commit carries the paths
    /// touched by that single commit, not cumulative paths for the range.
    /// Ordering is unspecified; the decision logic is order-independent.
    fn commits_since(&self, range_start: &str) -> Result<Vec<Commit>>;
}
