use thiserror::Error;

/// Unified error type for git-next-version operations
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version style: {0}")]
    InvalidVersionStyle(String),

    #[error("Malformed version tag '{tag}' for style {style}")]
    MalformedVersionTag { tag: String, style: String },

    #[error("Cannot increment version for bump kind: {0}")]
    InvalidBumpKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create an invalid-style error for an unrecognized style string
    pub fn style(style: impl Into<String>) -> Self {
        NextVersionError::InvalidVersionStyle(style.into())
    }

    /// Create a malformed-tag error naming the offending string and expected style
    pub fn tag(tag: impl Into<String>, style: impl Into<String>) -> Self {
        NextVersionError::MalformedVersionTag {
            tag: tag.into(),
            style: style.into(),
        }
    }

    /// Create an invalid-bump-kind error (internal misuse, never expected from valid input)
    pub fn bump_kind(kind: impl Into<String>) -> Self {
        NextVersionError::InvalidBumpKind(kind.into())
    }
}
