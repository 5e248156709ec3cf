use git_next_version::cli::orchestration::{run_workflow, WorkflowArgs, WorkflowOutcome};
use git_next_version::domain::{BumpKind, VersionStyle};
use git_next_version::error::NextVersionError;
use git_next_version::git::MockRepository;

// ============================================================================
// Helpers
// ============================================================================

fn args(tag: &str, style: VersionStyle) -> WorkflowArgs {
    WorkflowArgs {
        version_tag: tag.to_string(),
        range_start: "abc123".to_string(),
        version_style: style,
        ignore_paths: Vec::new(),
        force_patch: false,
    }
}

// ============================================================================
// End-to-end scenarios against the mock repository
// ============================================================================

#[test]
fn test_patch_token_bumps_patch() {
    // 1.2.3 with an explicit [patch] commit -> 1.2.4
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "fix: bug [patch]", &["src/a.py"]);

    let outcome = run_workflow(&args("1.2.3", VersionStyle::ThreeComponent), &repo).unwrap();
    assert_eq!(outcome.version(), Some("1.2.4"));
}

#[test]
fn test_tokenless_all_ignored_emits_nothing() {
    // docs-only tokenless changes under an ignore pattern -> no version
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "docs: update readme", &["docs/README.md"]);

    let mut wf = args("2.3.4", VersionStyle::ThreeComponent);
    wf.ignore_paths = vec!["docs/**".to_string()];

    let outcome = run_workflow(&wf, &repo).unwrap();
    assert_eq!(outcome, WorkflowOutcome::NothingSignaled { commits: 1 });
    assert_eq!(outcome.version(), None);
}

#[test]
fn test_force_patch_bumps_on_real_tokenless_change() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "refactor: cleanup", &["src/core.py"]);

    let mut wf = args("0.9.9", VersionStyle::ThreeComponent);
    wf.ignore_paths = vec!["*.md".to_string()];
    wf.force_patch = true;

    let outcome = run_workflow(&wf, &repo).unwrap();
    assert_eq!(outcome.version(), Some("0.9.10"));
}

#[test]
fn test_two_component_patch_collapses_to_minor() {
    // in X.Y mode, [patch] acts like minor: 1.2 -> 1.3
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "fix: small bug [patch]", &["src/a.py"]);

    let outcome = run_workflow(&args("1.2", VersionStyle::TwoComponent), &repo).unwrap();
    assert_eq!(outcome.version(), Some("1.3"));
}

#[test]
fn test_all_no_bump_commits_suppress_release() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "chore: x [no-bump]", &["src/a.py"]);
    repo.add_commit("a2", "docs: y [nobump]", &["docs/README.md"]);

    let outcome = run_workflow(&args("3.4.5", VersionStyle::ThreeComponent), &repo).unwrap();
    assert_eq!(outcome, WorkflowOutcome::Suppressed { commits: 2 });
    assert_eq!(outcome.version(), None);
}

#[test]
fn test_malformed_tag_for_style_is_fatal() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "fix: z [patch]", &["src/a.py"]);

    let err = run_workflow(&args("1.2", VersionStyle::ThreeComponent), &repo).unwrap_err();
    assert!(
        matches!(err, NextVersionError::MalformedVersionTag { .. }),
        "expected MalformedVersionTag, got: {}",
        err
    );
}

#[test]
fn test_explicit_major_beats_no_bump_and_ignores() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "chore: x [major]", &["docs/README.md"]);
    repo.add_commit("a2", "refactor: y [no-bump]", &["src/a.py"]);

    let mut wf = args("4.5.6", VersionStyle::ThreeComponent);
    wf.ignore_paths = vec!["docs/**".to_string()];
    wf.force_patch = true;

    let outcome = run_workflow(&wf, &repo).unwrap();
    assert_eq!(outcome.version(), Some("5.0.0"));
}

#[test]
fn test_explicit_minor_with_empty_changeset() {
    // an explicit token decides even for an allow-empty commit
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "chore: x [minor]", &[]);

    let mut wf = args("4.5.6", VersionStyle::ThreeComponent);
    wf.force_patch = true;

    let outcome = run_workflow(&wf, &repo).unwrap();
    assert_eq!(outcome.version(), Some("4.6.0"));
}

#[test]
fn test_tokenless_without_force_patch_emits_nothing() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "chore: x", &["docs/README.md"]);
    repo.add_commit("a2", "refactor: y", &["src/kite_eating_tree.py"]);

    let mut wf = args("4.5.6", VersionStyle::ThreeComponent);
    wf.ignore_paths = vec!["docs/**".to_string()];

    let outcome = run_workflow(&wf, &repo).unwrap();
    assert_eq!(outcome.version(), None);
}

#[test]
fn test_tag_normalization_case_fold_and_v_prefix() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "fix: z [patch]", &["src/x.py"]);

    let outcome = run_workflow(&args("V1.2.3", VersionStyle::ThreeComponent), &repo).unwrap();
    assert_eq!(outcome.version(), Some("1.2.4"));
}

#[test]
fn test_bumped_outcome_reports_previous_and_kind() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "feat: y [minor]", &["src/y.py"]);

    let outcome = run_workflow(&args("v2.0.1", VersionStyle::ThreeComponent), &repo).unwrap();
    assert_eq!(
        outcome,
        WorkflowOutcome::Bumped {
            previous: "2.0.1".to_string(),
            next: "2.1.0".to_string(),
            kind: BumpKind::Minor,
        }
    );
}

// ============================================================================
// Collaborator failure
// ============================================================================

#[test]
fn test_collaborator_failure_propagates() {
    let repo = MockRepository::failing("could not enumerate commits");

    let err = run_workflow(&args("1.2.3", VersionStyle::ThreeComponent), &repo).unwrap_err();
    assert!(
        matches!(err, NextVersionError::Git(_)),
        "expected a Git error, got: {}",
        err
    );
}

#[test]
fn test_invalid_ignore_pattern_is_config_error() {
    let mut repo = MockRepository::new();
    repo.add_commit("a1", "refactor: y", &["src/a.py"]);

    let mut wf = args("1.2.3", VersionStyle::ThreeComponent);
    wf.ignore_paths = vec!["docs/[".to_string()];

    let err = run_workflow(&wf, &repo).unwrap_err();
    assert!(matches!(err, NextVersionError::Config(_)));
}
