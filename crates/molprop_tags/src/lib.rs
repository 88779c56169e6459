//! Property name interning.
//!
//! Every property stored on a graph entity is keyed by a [`PropTag`], a small
//! dense integer standing in for the property's name. This crate owns the
//! name <-> tag mapping:
//!
//! - [`TagRegistry`] allocates tags on first use and maps them back to names
//! - [`SharedRegistry`] is the cloneable handle dictionaries hold, with a
//!   lazily built process-wide default ([`SharedRegistry::global`])
//! - [`common_properties`] is the fixed table of well-known names every
//!   registry is seeded with, so their tags are stable across runs
//!
//! # Thread Safety
//!
//! The registry is the only shared mutable structure in the property stack.
//! Interning takes a read lock on the fast path and a write lock with a
//! double-check on the slow path, so concurrent first use of a name from
//! several threads yields a single tag.

pub mod common_properties;
mod error;
mod registry;
mod tag;

pub use error::{Result, TagError};
pub use registry::{SharedRegistry, TagRegistry};
pub use tag::PropTag;
