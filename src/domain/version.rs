use crate::domain::bump::BumpKind;
use crate::error::{NextVersionError, Result};
use std::fmt;

/// How a version string parses, serializes, and reacts to a patch bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStyle {
    /// "X.Y.Z", e.g. 1.12.3
    ThreeComponent,
    /// "X.Y", e.g. 0.51; carries no patch component
    TwoComponent,
}

impl VersionStyle {
    /// Parse a style selector string (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "X.Y.Z" => Ok(VersionStyle::ThreeComponent),
            "X.Y" => Ok(VersionStyle::TwoComponent),
            _ => Err(NextVersionError::style(s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionStyle::ThreeComponent => "X.Y.Z",
            VersionStyle::TwoComponent => "X.Y",
        }
    }
}

impl fmt::Display for VersionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed version number. Under [VersionStyle::TwoComponent] the patch
/// component is always 0 and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string for the given style.
    ///
    /// The string must split into exactly 3 (X.Y.Z) or 2 (X.Y) non-negative
    /// integer components; any other shape is a [NextVersionError::MalformedVersionTag]
    /// naming the offending string and expected style.
    pub fn parse(s: &str, style: VersionStyle) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        let component = |part: &str| -> Result<u32> {
            part.parse::<u32>()
                .map_err(|_| NextVersionError::tag(s, style.as_str()))
        };

        match style {
            VersionStyle::ThreeComponent => {
                if parts.len() != 3 {
                    return Err(NextVersionError::tag(s, style.as_str()));
                }
                Ok(Version::new(
                    component(parts[0])?,
                    component(parts[1])?,
                    component(parts[2])?,
                ))
            }
            VersionStyle::TwoComponent => {
                if parts.len() != 2 {
                    return Err(NextVersionError::tag(s, style.as_str()));
                }
                Ok(Version::new(component(parts[0])?, component(parts[1])?, 0))
            }
        }
    }

    /// Compute the next version for a bump decision under a style.
    ///
    /// Bump math:
    ///   - Major: (M, N, P) -> (M+1, 0, 0)
    ///   - Minor: (M, N, P) -> (M, N+1, 0)
    ///   - Patch: (M, N, P) -> (M, N, P+1), but under X.Y, which has no
    ///     third component to increment, Patch behaves like Minor.
    ///
    /// `NoBump` is a veto, never an increment; passing it here is an internal
    /// logic error surfaced as [NextVersionError::InvalidBumpKind].
    pub fn bump(&self, kind: BumpKind, style: VersionStyle) -> Result<Self> {
        match kind {
            BumpKind::Major => Ok(Version::new(self.major + 1, 0, 0)),
            BumpKind::Minor => Ok(Version::new(self.major, self.minor + 1, 0)),
            BumpKind::Patch => match style {
                VersionStyle::ThreeComponent => {
                    Ok(Version::new(self.major, self.minor, self.patch + 1))
                }
                VersionStyle::TwoComponent => Ok(Version::new(self.major, self.minor + 1, 0)),
            },
            BumpKind::NoBump => Err(NextVersionError::bump_kind(kind.to_string())),
        }
    }

    /// Serialize for the given style (no `v` prefix, no whitespace)
    pub fn format(&self, style: VersionStyle) -> String {
        match style {
            VersionStyle::ThreeComponent => {
                format!("{}.{}.{}", self.major, self.minor, self.patch)
            }
            VersionStyle::TwoComponent => format!("{}.{}", self.major, self.minor),
        }
    }
}
