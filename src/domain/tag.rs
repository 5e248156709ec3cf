/// A release tag as found in the repository (e.g. "v1.2.3", "V0.51")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Normalized version part: the tag case-folded with one leading `v`
    /// stripped ("V1.2.3" -> "1.2.3"). Parsing and validation against a
    /// version style happen downstream in [crate::domain::Version::parse].
    pub fn version_part(&self) -> String {
        let lowered = self.name.to_lowercase();
        lowered
            .strip_prefix('v')
            .map(|rest| rest.to_string())
            .unwrap_or(lowered)
    }
}
