//! Interned property tag.

use std::fmt;

/// Interned property name.
///
/// Tags are allocated densely from 0 in first-seen order, so the raw value
/// doubles as an index into the registry's name table. The well-known names
/// in [`crate::common_properties`] always occupy the lowest tags.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PropTag(u32);

impl PropTag {
    /// Create from a raw tag value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        PropTag(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this tag in the registry's name table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PropTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropTag({})", self.0)
    }
}

impl fmt::Display for PropTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PropTag> for u32 {
    fn from(tag: PropTag) -> Self {
        tag.0
    }
}
