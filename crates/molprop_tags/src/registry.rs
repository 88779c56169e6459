//! Property name registry.
//!
//! Maps names to dense [`PropTag`]s and back. Allocation is append-only: a
//! `(name, tag)` pair never changes once handed out.

use crate::common_properties;
use crate::{PropTag, Result, TagError};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Name table guarded by the registry lock.
struct RegistryInner {
    /// Map from name to its tag.
    map: FxHashMap<Arc<str>, PropTag>,
    /// Names indexed by tag.
    names: Vec<Arc<str>>,
}

impl RegistryInner {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            names: Vec::with_capacity(common_properties::NAMES.len() + 64),
        }
    }
}

/// Bidirectional name <-> tag registry.
///
/// Tags are dense and allocated in first-seen order. Unlike a sharded
/// interner, a single lock guards the table so the next tag is always
/// `len()`.
///
/// # Thread Safety
/// Lookups take a shared read lock. Allocation takes the write lock and
/// re-checks the map before inserting, so racing threads interning the same
/// new name agree on one tag.
pub struct TagRegistry {
    inner: RwLock<RegistryInner>,
}

impl TagRegistry {
    /// Create a registry seeded with [`common_properties::NAMES`].
    pub fn new() -> Self {
        Self::with_names(common_properties::NAMES)
    }

    /// Create a registry with no names at all.
    ///
    /// Tags from [`common_properties`] are meaningless against it.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::new()),
        }
    }

    /// Create a registry seeded with `names`, in order.
    ///
    /// The i-th distinct name receives tag i. A repeated name keeps its first
    /// tag, which shifts every later name down by one.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Self::empty();
        for name in names {
            registry.intern(name.as_ref());
        }
        tracing::debug!(count = registry.len(), "seeded tag registry");
        registry
    }

    /// Try to intern a name, returning its tag or an error once every `u32`
    /// has been handed out.
    pub fn try_intern(&self, name: &str) -> Result<PropTag> {
        // Fast path: already interned
        if let Some(&tag) = self.inner.read().map.get(name) {
            return Ok(tag);
        }

        // Slow path: need to insert
        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&tag) = guard.map.get(name) {
            return Ok(tag);
        }

        let count = guard.names.len();
        let raw = u32::try_from(count).map_err(|_| TagError::Exhausted { count })?;
        let tag = PropTag::from_raw(raw);

        let shared: Arc<str> = Arc::from(name);
        guard.names.push(Arc::clone(&shared));
        guard.map.insert(shared, tag);
        drop(guard);

        tracing::trace!(name, tag = raw, "interned property tag");
        Ok(tag)
    }

    /// Intern a name, returning its tag.
    ///
    /// # Panics
    /// Panics if the registry exceeds `u32::MAX` names.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, name: &str) -> PropTag {
        self.try_intern(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the tag of an already interned name without allocating one.
    pub fn lookup(&self, name: &str) -> Option<PropTag> {
        self.inner.read().map.get(name).copied()
    }

    /// Look up the name for a tag.
    pub fn name(&self, tag: PropTag) -> Result<Arc<str>> {
        self.inner
            .read()
            .names
            .get(tag.index())
            .cloned()
            .ok_or(TagError::UnknownTag { tag: tag.raw() })
    }

    /// Whether `tag` was allocated by this registry.
    pub fn contains(&self, tag: PropTag) -> bool {
        tag.index() < self.len()
    }

    /// Snapshot of every interned name, in tag order.
    pub fn names(&self) -> Vec<Arc<str>> {
        self.inner.read().names.clone()
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.inner.read().names.len()
    }

    /// Check if no names are interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Shared registry handle held by every dictionary.
///
/// Cloning the handle is an atomic increment; all clones see the same names.
///
/// # When to Use `global()` vs `new()`
///
/// - `SharedRegistry::global()` is the production wiring: one registry for
///   the whole process, so tags agree across every entity.
/// - `SharedRegistry::new()` builds an isolated registry. Tests use it to
///   observe allocation without interference from other tests.
#[derive(Clone)]
pub struct SharedRegistry(Arc<TagRegistry>);

static GLOBAL_REGISTRY: OnceLock<SharedRegistry> = OnceLock::new();

impl SharedRegistry {
    /// Create a new, isolated registry seeded with the well-known names.
    pub fn new() -> Self {
        SharedRegistry(Arc::new(TagRegistry::new()))
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: TagRegistry) -> Self {
        SharedRegistry(Arc::new(registry))
    }

    /// The process-wide registry (lazily initialized).
    pub fn global() -> Self {
        GLOBAL_REGISTRY.get_or_init(SharedRegistry::new).clone()
    }

    /// Whether both handles point at the same registry.
    pub fn ptr_eq(&self, other: &SharedRegistry) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedRegistry {
    type Target = TagRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry").field(&*self.0).finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
