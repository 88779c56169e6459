//! The ordered property dictionary.

use crate::{DictError, PropKey, Result};
use molprop_tags::{PropTag, SharedRegistry};
use molprop_value::{AnyValue, FromValue, Value, ValueType};

/// Ordered map from property tag to [`Value`].
///
/// Entries keep first-insertion order: overwriting a key keeps its slot,
/// clearing it closes the gap. Lookup is a linear scan, which beats hashing
/// for the handful of properties a typical atom or bond carries.
///
/// String keys are resolved through the dictionary's [`SharedRegistry`];
/// two dictionaries on the same registry agree on every tag.
#[derive(Clone, Debug)]
pub struct Dict {
    data: Vec<(PropTag, Value)>,
    /// Set once any heap-owning value is stored; cleared only by `reset`.
    /// Informational only: nothing in this crate branches on it.
    has_non_pod_data: bool,
    registry: SharedRegistry,
}

impl Dict {
    /// Create an empty dictionary on the process-wide registry.
    pub fn new() -> Self {
        Self::with_registry(SharedRegistry::global())
    }

    /// Create an empty dictionary on the given registry.
    pub fn with_registry(registry: SharedRegistry) -> Self {
        Dict {
            data: Vec::new(),
            has_non_pod_data: false,
            registry,
        }
    }

    /// The registry string keys resolve through.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether a heap-owning value was ever stored since the last `reset`.
    ///
    /// A hint for callers such as serializers that can take a flat path when
    /// every entry is inline. `Clone` and `reset` behave the same either way.
    pub fn has_non_pod_data(&self) -> bool {
        self.has_non_pod_data
    }

    fn position(&self, tag: PropTag) -> Option<usize> {
        self.data.iter().position(|(t, _)| *t == tag)
    }

    fn find(&self, key: &impl PropKey) -> Option<&Value> {
        let tag = key.lookup(&self.registry)?;
        self.data.iter().find(|(t, _)| *t == tag).map(|(_, v)| v)
    }

    #[cold]
    fn missing(&self, key: &impl PropKey) -> DictError {
        DictError::Key {
            key: key.display_name(&self.registry),
        }
    }

    /// Store a value, overwriting in place if the key exists.
    ///
    /// # Errors
    ///
    /// [`DictError::Tag`] if the key cannot be resolved to a tag.
    pub fn set_val(&mut self, key: impl PropKey, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let tag = key.intern(&self.registry)?;
        if !value.is_pod() {
            self.has_non_pod_data = true;
        }
        match self.position(tag) {
            Some(i) => self.data[i].1 = value,
            None => self.data.push((tag, value)),
        }
        Ok(())
    }

    /// Store an arbitrary payload in the `Any` box.
    ///
    /// # Errors
    ///
    /// See [`Dict::set_val`].
    pub fn set_any<T: AnyValue>(&mut self, key: impl PropKey, payload: T) -> Result<()> {
        self.set_val(key, Value::from_any(payload))
    }

    /// Read a value as `T`, parsing string values for numeric `T`.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent, [`DictError::Value`] if the stored
    /// value cannot be converted.
    pub fn get_val<T: FromValue>(&self, key: impl PropKey) -> Result<T> {
        let value = self.find(&key).ok_or_else(|| self.missing(&key))?;
        Ok(value.extract::<T>()?)
    }

    /// Like [`Dict::get_val`], but absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`DictError::Value`] if the key is present but cannot be converted.
    pub fn get_val_if_present<T: FromValue>(&self, key: impl PropKey) -> Result<Option<T>> {
        match self.find(&key) {
            Some(value) => Ok(Some(value.extract::<T>()?)),
            None => Ok(None),
        }
    }

    /// Borrow a value as `T` without coercion.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent, [`DictError::Value`] on a kind mismatch.
    pub fn get_ref<T: ValueType>(&self, key: impl PropKey) -> Result<&T> {
        let value = self.find(&key).ok_or_else(|| self.missing(&key))?;
        Ok(value.get::<T>()?)
    }

    /// Borrow a boxed `Any` payload as `T`.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent, [`DictError::Value`] if the value is not
    /// a boxed `T`.
    pub fn get_any<T: AnyValue>(&self, key: impl PropKey) -> Result<&T> {
        let value = self.find(&key).ok_or_else(|| self.missing(&key))?;
        Ok(value.downcast_ref::<T>()?)
    }

    /// Render a value as text.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent, [`DictError::Value`] if the value has no
    /// text rendering.
    pub fn get_val_as_string(&self, key: impl PropKey) -> Result<String> {
        let value = self.find(&key).ok_or_else(|| self.missing(&key))?;
        Ok(value.to_text()?)
    }

    /// Like [`Dict::get_val_as_string`], but absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`DictError::Value`] if the value has no text rendering.
    pub fn get_val_as_string_if_present(&self, key: impl PropKey) -> Result<Option<String>> {
        match self.find(&key) {
            Some(value) => Ok(Some(value.to_text()?)),
            None => Ok(None),
        }
    }

    /// Borrow the raw stored value.
    pub fn get_value(&self, key: impl PropKey) -> Option<&Value> {
        self.find(&key)
    }

    /// Check if a value is stored under the key.
    pub fn has_val(&self, key: impl PropKey) -> bool {
        self.find(&key).is_some()
    }

    /// Remove an entry, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// [`DictError::Key`] if absent.
    pub fn clear_val(&mut self, key: impl PropKey) -> Result<()> {
        let index = key
            .lookup(&self.registry)
            .and_then(|tag| self.position(tag))
            .ok_or_else(|| self.missing(&key))?;
        self.data.remove(index);
        Ok(())
    }

    /// Names of every key, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|(tag, _)| tag.display_name(&self.registry))
            .collect()
    }

    /// Tags of every key, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = PropTag> + '_ {
        self.data.iter().map(|(tag, _)| *tag)
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.data.clear();
        self.has_non_pod_data = false;
    }

    /// Iterate `(tag, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Merge `other` into `self`.
    ///
    /// Keys new to `self` are appended in `other`'s order. Keys present in
    /// both are overwritten unless `preserve_existing` is set. Tags are
    /// carried over by name when the two dictionaries use different
    /// registries.
    ///
    /// # Errors
    ///
    /// [`DictError::Tag`] if a name from `other` cannot be interned here.
    pub fn update(&mut self, other: &Dict, preserve_existing: bool) -> Result<()> {
        tracing::trace!(
            incoming = other.len(),
            preserve_existing,
            "merging property dictionary"
        );
        let same_registry = self.registry.ptr_eq(&other.registry);
        for (tag, value) in &other.data {
            let tag = if same_registry {
                *tag
            } else {
                let name = other.registry.name(*tag)?;
                self.registry.try_intern(&name)?
            };
            match self.position(tag) {
                Some(_) if preserve_existing => {}
                Some(i) => self.data[i].1 = value.clone(),
                None => self.data.push((tag, value.clone())),
            }
        }
        self.has_non_pod_data |= other.has_non_pod_data;
        Ok(())
    }
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`Dict`]'s entries, created by [`Dict::iter`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (PropTag, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (PropTag, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(tag, value)| (*tag, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Dict {
    type Item = (PropTag, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
