//! Registry errors.

use thiserror::Error;

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, TagError>;

/// Errors produced by the tag registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The tag was never allocated by this registry.
    #[error("unknown property tag {tag}")]
    UnknownTag {
        /// Raw tag value that was looked up.
        tag: u32,
    },
    /// Every representable tag has been handed out.
    #[error("tag registry exhausted: {count} names interned, max is {max}", max = u32::MAX)]
    Exhausted {
        /// Number of names already interned.
        count: usize,
    },
}
