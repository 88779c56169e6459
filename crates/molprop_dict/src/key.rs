//! Keys accepted by dictionary operations.

use molprop_tags::{PropTag, TagError, TagRegistry};

/// A property key: an interned [`PropTag`] or a property name.
///
/// Writes resolve through [`PropKey::intern`], which allocates a tag for a
/// name seen for the first time. Reads resolve through
/// [`PropKey::lookup`], which never grows the registry.
pub trait PropKey {
    /// Resolve for a write, interning names as needed.
    ///
    /// # Errors
    ///
    /// [`TagError::UnknownTag`] for a tag the registry never allocated, or
    /// [`TagError::Exhausted`] when no tag is left for a new name.
    fn intern(&self, registry: &TagRegistry) -> Result<PropTag, TagError>;

    /// Resolve for a read. `None` means no dictionary can hold the key.
    fn lookup(&self, registry: &TagRegistry) -> Option<PropTag>;

    /// Name used in error messages and key listings.
    fn display_name(&self, registry: &TagRegistry) -> String;
}

impl PropKey for PropTag {
    fn intern(&self, registry: &TagRegistry) -> Result<PropTag, TagError> {
        if registry.contains(*self) {
            Ok(*self)
        } else {
            Err(TagError::UnknownTag { tag: self.raw() })
        }
    }

    fn lookup(&self, _: &TagRegistry) -> Option<PropTag> {
        Some(*self)
    }

    fn display_name(&self, registry: &TagRegistry) -> String {
        match registry.name(*self) {
            Ok(name) => name.to_string(),
            Err(_) => self.to_string(),
        }
    }
}

impl PropKey for &str {
    fn intern(&self, registry: &TagRegistry) -> Result<PropTag, TagError> {
        registry.try_intern(self)
    }

    fn lookup(&self, registry: &TagRegistry) -> Option<PropTag> {
        registry.lookup(self)
    }

    fn display_name(&self, _: &TagRegistry) -> String {
        (*self).to_owned()
    }
}

impl PropKey for &String {
    fn intern(&self, registry: &TagRegistry) -> Result<PropTag, TagError> {
        registry.try_intern(self)
    }

    fn lookup(&self, registry: &TagRegistry) -> Option<PropTag> {
        registry.lookup(self)
    }

    fn display_name(&self, _: &TagRegistry) -> String {
        (*self).clone()
    }
}

impl PropKey for String {
    fn intern(&self, registry: &TagRegistry) -> Result<PropTag, TagError> {
        registry.try_intern(self)
    }

    fn lookup(&self, registry: &TagRegistry) -> Option<PropTag> {
        registry.lookup(self)
    }

    fn display_name(&self, _: &TagRegistry) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests;
