//! Dictionary errors.

use molprop_tags::TagError;
use molprop_value::ValueError;
use thiserror::Error;

/// Result alias for dictionary operations.
pub type Result<T> = std::result::Result<T, DictError>;

/// Errors produced by [`Dict`](crate::Dict) and
/// [`Properties`](crate::Properties).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    /// No entry is stored under the key.
    #[error("key `{key}` not found")]
    Key {
        /// Name of the missing key.
        key: String,
    },
    /// The entry exists but cannot be read as the requested type.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// The key could not be resolved to a tag.
    #[error(transparent)]
    Tag(#[from] TagError),
}

impl DictError {
    /// Whether the key was absent, either from the dictionary or from the
    /// registry.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            DictError::Key { .. } | DictError::Tag(TagError::UnknownTag { .. })
        )
    }
}
