//! Property facade carried by graph entities.

use crate::{Dict, DictError, PropKey, Result};
use molprop_tags::{PropTag, SharedRegistry};
use molprop_value::{FromValue, Value};
use smallvec::SmallVec;

/// A [`Dict`] plus the list of keys flagged as computed.
///
/// Computed properties are derived data (ring info, charges, ...) that an
/// algorithm can throw away wholesale with [`Properties::clear_computed_props`]
/// once the entity is edited.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    dict: Dict,
    computed: SmallVec<[PropTag; 4]>,
}

impl Properties {
    /// Create an empty property set on the process-wide registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty property set on the given registry.
    pub fn with_registry(registry: SharedRegistry) -> Self {
        Properties {
            dict: Dict::with_registry(registry),
            computed: SmallVec::new(),
        }
    }

    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    pub fn dict_mut(&mut self) -> &mut Dict {
        &mut self.dict
    }

    /// Store a property; `computed` also flags it as computed.
    ///
    /// # Errors
    ///
    /// See [`Dict::set_val`].
    pub fn set_prop(
        &mut self,
        key: impl PropKey,
        value: impl Into<Value>,
        computed: bool,
    ) -> Result<()> {
        let tag = key.intern(self.dict.registry())?;
        self.dict.set_val(tag, value)?;
        if computed && !self.computed.contains(&tag) {
            self.computed.push(tag);
        }
        Ok(())
    }

    /// See [`Dict::get_val`].
    ///
    /// # Errors
    ///
    /// See [`Dict::get_val`].
    pub fn get_prop<T: FromValue>(&self, key: impl PropKey) -> Result<T> {
        self.dict.get_val(key)
    }

    /// See [`Dict::get_val_if_present`].
    ///
    /// # Errors
    ///
    /// See [`Dict::get_val_if_present`].
    pub fn get_prop_if_present<T: FromValue>(&self, key: impl PropKey) -> Result<Option<T>> {
        self.dict.get_val_if_present(key)
    }

    /// See [`Dict::get_val_as_string`].
    ///
    /// # Errors
    ///
    /// See [`Dict::get_val_as_string`].
    pub fn get_prop_as_string(&self, key: impl PropKey) -> Result<String> {
        self.dict.get_val_as_string(key)
    }

    pub fn has_prop(&self, key: impl PropKey) -> bool {
        self.dict.has_val(key)
    }

    /// Remove a property and drop it from the computed list.
    ///
    /// The computed flag is dropped even when the entry is already gone.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent.
    pub fn clear_prop(&mut self, key: impl PropKey) -> Result<()> {
        if let Some(tag) = key.lookup(self.dict.registry()) {
            self.computed.retain(|t| *t != tag);
        }
        self.dict.clear_val(key)
    }

    /// Remove every computed property, then empty the computed list.
    ///
    /// Keys that were already cleared are skipped.
    ///
    /// # Errors
    ///
    /// Any failure other than an absent key. The computed list is emptied
    /// regardless.
    pub fn clear_computed_props(&mut self) -> Result<()> {
        tracing::trace!(count = self.computed.len(), "clearing computed properties");
        let mut result = Ok(());
        for tag in std::mem::take(&mut self.computed) {
            match self.dict.clear_val(tag) {
                // Cleared through the dict directly
                Ok(()) | Err(DictError::Key { .. }) => {}
                Err(e) => {
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
            }
        }
        result
    }

    /// Names of every property, in insertion order.
    pub fn get_prop_list(&self) -> Vec<String> {
        self.dict.keys()
    }

    pub fn is_computed_prop(&self, key: impl PropKey) -> bool {
        key.lookup(self.dict.registry())
            .is_some_and(|tag| self.computed.contains(&tag))
    }

    /// Names of the computed properties, in the order they were flagged.
    pub fn get_computed_props(&self) -> Vec<String> {
        self.computed
            .iter()
            .map(|tag| tag.display_name(self.dict.registry()))
            .collect()
    }

    /// Drop every property and the computed list.
    pub fn clear(&mut self) {
        self.dict.reset();
        self.computed.clear();
    }

    /// Merge `other`'s properties, overwriting shared keys, and take over its
    /// computed list.
    ///
    /// # Errors
    ///
    /// See [`Dict::update`].
    pub fn update(&mut self, other: &Properties) -> Result<()> {
        self.dict.update(&other.dict, false)?;
        self.computed.clear();
        for tag in &other.computed {
            let tag = if self.dict.registry().ptr_eq(other.dict.registry()) {
                *tag
            } else {
                let name = other.dict.registry().name(*tag)?;
                self.dict.registry().try_intern(&name)?
            };
            self.computed.push(tag);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
