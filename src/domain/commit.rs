use crate::domain::bump::{BumpVerdict, BUMP_TOKENS};

/// A single commit as reported by the VCS layer: its identifier, title
/// (subject line only), and the repository-relative paths it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub title: String,
    /// Paths changed by this commit alone (not cumulative for the range).
    /// May be empty, e.g. for an allow-empty commit.
    pub changed_files: Vec<String>,
}

impl Commit {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        changed_files: Vec<String>,
    ) -> Self {
        Commit {
            id: id.into(),
            title: title.into(),
            changed_files,
        }
    }

    /// Classify this commit from its title alone.
    ///
    /// The lowercased title is scanned against the marker table in precedence
    /// order; the first kind with a substring hit is the verdict, so a title
    /// carrying markers for several kinds resolves to the highest-precedence
    /// one. A title with no recognized marker is `Tokenless`; whether that
    /// still warrants a patch bump is a range-level question answered by the
    /// aggregator, not here.
    pub fn verdict(&self) -> BumpVerdict {
        let title = self.title.to_lowercase();

        for (kind, tokens) in BUMP_TOKENS {
            if tokens.iter().any(|token| title.contains(token)) {
                return BumpVerdict::from(kind);
            }
        }

        BumpVerdict::Tokenless
    }
}
