use crate::domain::{BumpKind, BumpVerdict, Commit, IgnoreList, EXPLICIT_KINDS};
use crate::error::Result;
use crate::git::Repository;

/// Aggregates per-commit verdicts into one bump decision for a range.
///
/// `Some(BumpKind::NoBump)` means the range was explicitly suppressed;
/// `None` means nothing in the range signaled a bump. Both lead to "emit no
/// version" downstream but are reported distinctly.
pub struct BumpAnalyzer {
    ignore: IgnoreList,
    force_patch: bool,
}

impl BumpAnalyzer {
    pub fn new(ignore: IgnoreList, force_patch: bool) -> Self {
        BumpAnalyzer {
            ignore,
            force_patch,
        }
    }

    /// Fetch the commits for `(range_start, HEAD]` from a repository and
    /// decide the bump for the whole range
    pub fn analyze_repository_range<R: Repository>(
        &self,
        repo: &R,
        range_start: &str,
    ) -> Result<Option<BumpKind>> {
        let commits = repo.commits_since(range_start)?;
        Ok(self.decide(&commits))
    }

    /// Decide the overall bump for a commit range.
    ///
    /// Precedence cascade, first matching rule wins:
    /// 1-3. Any explicit Major / Minor / Patch verdict decides the range.
    /// 4-5. Otherwise a NoBump verdict suppresses the range, unless some
    ///      tokenless commit touched a non-ignored file.
    /// 6.   A tokenless commit with real (non-ignored, non-empty) changes
    ///      decides Patch when force_patch is on, and nothing otherwise.
    ///
    /// Order-independent: permuting the input never changes the decision.
    pub fn decide(&self, commits: &[Commit]) -> Option<BumpKind> {
        let verdicts: Vec<BumpVerdict> = commits.iter().map(Commit::verdict).collect();

        for (commit, verdict) in commits.iter().zip(&verdicts) {
            tracing::debug!("commit {} ({:?}): {}", commit.id, verdict, commit.title);
        }

        // explicit tokens are authoritative and override everything
        for kind in EXPLICIT_KINDS {
            if verdicts.iter().any(|v| *v == BumpVerdict::from(kind)) {
                tracing::debug!("decision: {} (explicit token in range)", kind);
                return Some(kind);
            }
        }

        let any_no_bump = verdicts.iter().any(|v| *v == BumpVerdict::NoBump);

        // A tokenless commit counts only if it touched at least one
        // non-ignored file; an empty changeset carries no forcing weight.
        let tokenless_effective = commits
            .iter()
            .zip(&verdicts)
            .any(|(commit, verdict)| {
                *verdict == BumpVerdict::Tokenless && !self.ignore.all_ignored(&commit.changed_files)
            });

        if any_no_bump && !tokenless_effective {
            tracing::debug!("decision: no-bump (explicitly suppressed, nothing else effective)");
            return Some(BumpKind::NoBump);
        }

        if tokenless_effective {
            if self.force_patch {
                tracing::debug!("decision: patch (tokenless commit with real changes, force-patch on)");
                return Some(BumpKind::Patch);
            }
            tracing::debug!("no decision: tokenless changes present but force-patch is off");
            return None;
        }

        tracing::debug!("no decision: nothing in the range signaled a bump");
        None
    }
}
