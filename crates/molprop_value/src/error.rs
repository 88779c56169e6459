//! Value access errors.

use thiserror::Error;

/// Result alias for value access.
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors produced when reading or rendering a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The stored kind does not match the requested type and no coercion
    /// applies.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested type.
        expected: &'static str,
        /// Type actually stored.
        found: &'static str,
    },
    /// A stored string could not be parsed as the requested type.
    #[error("cannot convert {value:?} to {target}")]
    Conversion {
        /// The text that failed to parse.
        value: String,
        /// Requested type.
        target: &'static str,
    },
    /// A boxed payload has no text rendering.
    #[error("cannot render boxed {type_name} as text")]
    Unrenderable {
        /// Type name of the boxed payload.
        type_name: &'static str,
    },
}

impl ValueError {
    /// Create a type mismatch error.
    #[cold]
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        ValueError::TypeMismatch { expected, found }
    }

    /// Whether this is a conversion failure (parse or render) rather than a
    /// plain kind mismatch.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            ValueError::Conversion { .. } | ValueError::Unrenderable { .. }
        )
    }
}
