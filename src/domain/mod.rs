//! Domain logic - pure bump rules independent of git operations

pub mod bump;
pub mod commit;
pub mod ignore;
pub mod tag;
pub mod version;

pub use bump::{BumpKind, BumpVerdict, BUMP_TOKENS, EXPLICIT_KINDS};
pub use commit::Commit;
pub use ignore::IgnoreList;
pub use tag::Tag;
pub use version::{Version, VersionStyle};
