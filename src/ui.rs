//! Styled diagnostics. Everything here goes to stderr: stdout is reserved
//! for the computed version string, which CI pipelines consume verbatim.

use console::style;

use crate::domain::Commit;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Summarize the commit range being examined
pub fn display_commit_summary(commits: &[Commit]) {
    let noun = if commits.len() == 1 { "commit" } else { "commits" };
    eprintln!(
        "{}",
        style(format!("Examining {} {} since range start", commits.len(), noun)).bold()
    );

    for (i, commit) in commits.iter().take(10).enumerate() {
        let short_id: String = commit.id.chars().take(7).collect();
        let short_title: String = commit.title.chars().take(60).collect();
        eprintln!("  {}. {} {}", i + 1, style(short_id).dim(), short_title);
    }

    if commits.len() > 10 {
        eprintln!("  ... and {} more commits", commits.len() - 10);
    }
}
