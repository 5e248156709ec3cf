//! Main workflow orchestration logic
//!
//! Wires tag normalization, commit enumeration, bump aggregation, and
//! version incrementing together. Kept free of CLI parsing and printing so
//! the whole pipeline can be driven against a mock repository.

use std::fmt;

use crate::analyzer::BumpAnalyzer;
use crate::domain::{BumpKind, IgnoreList, Tag, Version, VersionStyle};
use crate::error::Result;
use crate::git::Repository;
use crate::ui;

/// Resolved configuration for one run.
///
/// Assembled once at startup from CLI flags, environment variables, and the
/// config file; every component receives what it needs from here by
/// parameter. Nothing reads ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Latest released version tag (e.g. "v1.2.3"); normalized before parsing
    pub version_tag: String,

    /// Revision bounding the commit range exclusively, up to HEAD inclusive
    pub range_start: String,

    /// Versioning scheme for parsing and serializing
    pub version_style: VersionStyle,

    /// Glob patterns for paths that never justify a bump on their own
    pub ignore_paths: Vec<String>,

    /// Treat a tokenless commit with real changes as a patch bump
    pub force_patch: bool,
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// A bump was decided; `next` is the string to publish
    Bumped {
        previous: String,
        next: String,
        kind: BumpKind,
    },
    /// The range explicitly vetoed a release via a no-bump marker
    Suppressed { commits: usize },
    /// Nothing in the range signaled a bump
    NothingSignaled { commits: usize },
}

impl WorkflowOutcome {
    /// The version string to emit, if any
    pub fn version(&self) -> Option<&str> {
        match self {
            WorkflowOutcome::Bumped { next, .. } => Some(next),
            _ => None,
        }
    }
}

impl fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowOutcome::Bumped {
                previous,
                next,
                kind,
            } => {
                write!(f, "{} bump: {} -> {}", kind, previous, next)
            }
            WorkflowOutcome::Suppressed { commits } => {
                write!(
                    f,
                    "version bump explicitly suppressed ({} commits examined)",
                    commits
                )
            }
            WorkflowOutcome::NothingSignaled { commits } => {
                write!(
                    f,
                    "commit log(s) don't signify a version bump ({} commits examined)",
                    commits
                )
            }
        }
    }
}

/// Run the bump-decision pipeline against a repository.
///
/// Fails on a malformed tag or an unqueryable repository; a range that does
/// not warrant a release is a success carrying no version.
pub fn run_workflow<R: Repository>(args: &WorkflowArgs, repo: &R) -> Result<WorkflowOutcome> {
    let style = args.version_style;

    let tag = Tag::new(&args.version_tag);
    let current = Version::parse(&tag.version_part(), style)?;
    tracing::debug!("current version: {} (from tag '{}')", current.format(style), tag.name);

    let commits = repo.commits_since(&args.range_start)?;
    tracing::info!(
        "found {} commits in ({}, HEAD]",
        commits.len(),
        args.range_start
    );
    ui::display_commit_summary(&commits);

    let ignore = IgnoreList::new(&args.ignore_paths)?;
    let analyzer = BumpAnalyzer::new(ignore, args.force_patch);

    match analyzer.decide(&commits) {
        Some(BumpKind::NoBump) => Ok(WorkflowOutcome::Suppressed {
            commits: commits.len(),
        }),
        Some(kind) => {
            let next = current.bump(kind, style)?;
            Ok(WorkflowOutcome::Bumped {
                previous: current.format(style),
                next: next.format(style),
                kind,
            })
        }
        None => Ok(WorkflowOutcome::NothingSignaled {
            commits: commits.len(),
        }),
    }
}
