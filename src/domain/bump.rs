use std::fmt;

/// Version bump decision for a commit range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    /// Explicit veto: the range was marked as not warranting a release.
    /// Distinct from "no decision", which is the absence of a `BumpKind`.
    NoBump,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::NoBump => "no-bump",
        };
        write!(f, "{}", s)
    }
}

/// Per-commit classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpVerdict {
    Major,
    Minor,
    Patch,
    NoBump,
    /// The title carried no recognized marker.
    Tokenless,
}

impl From<BumpKind> for BumpVerdict {
    fn from(kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => BumpVerdict::Major,
            BumpKind::Minor => BumpVerdict::Minor,
            BumpKind::Patch => BumpVerdict::Patch,
            BumpKind::NoBump => BumpVerdict::NoBump,
        }
    }
}

/// Title markers per bump kind, ordered by precedence (Major > Minor >
/// Patch > NoBump). When a title carries markers for two kinds, the earlier
/// table entry wins regardless of where the markers sit in the title.
pub const BUMP_TOKENS: [(BumpKind, &[&str]); 4] = [
    (BumpKind::Major, &["[major]"]),
    (BumpKind::Minor, &["[minor]"]),
    (BumpKind::Patch, &["[patch]", "[fix]", "[bump]"]),
    (BumpKind::NoBump, &["[no-bump]", "[no_bump]", "[nobump]"]),
];

/// Kinds eligible for explicit aggregation, highest precedence first
pub const EXPLICIT_KINDS: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_table_precedence_order() {
        assert_eq!(BUMP_TOKENS[0].0, BumpKind::Major);
        assert_eq!(BUMP_TOKENS[1].0, BumpKind::Minor);
        assert_eq!(BUMP_TOKENS[2].0, BumpKind::Patch);
        assert_eq!(BUMP_TOKENS[3].0, BumpKind::NoBump);
    }

    #[test]
    fn test_token_table_has_no_overlapping_markers() {
        let mut seen = Vec::new();
        for (_, tokens) in BUMP_TOKENS {
            for token in tokens {
                assert!(!seen.contains(token), "duplicate marker: {}", token);
                seen.push(token);
            }
        }
    }

    #[test]
    fn test_bump_kind_display() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!(BumpKind::NoBump.to_string(), "no-bump");
    }

    #[test]
    fn test_verdict_from_kind() {
        assert_eq!(BumpVerdict::from(BumpKind::Minor), BumpVerdict::Minor);
        assert_eq!(BumpVerdict::from(BumpKind::NoBump), BumpVerdict::NoBump);
    }
}
