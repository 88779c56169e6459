//! Property dictionaries for graph entities.
//!
//! [`Dict`] is an insertion-ordered map from [`PropTag`] to
//! [`Value`](molprop_value::Value). Keys may be given as tags or as names
//! ([`PropKey`]); names resolve through the dictionary's
//! [`SharedRegistry`](molprop_tags::SharedRegistry).
//!
//! [`Properties`] is the facade atoms, bonds and molecules carry: a `Dict`
//! plus the set of keys flagged as computed, so derived data can be dropped
//! in one call.
//!
//! # Errors
//!
//! Reads distinguish a missing key ([`DictError::Key`]) from a present key
//! of the wrong type ([`DictError::Value`]). The `*_if_present` getters turn
//! only the first into `Ok(None)`.

mod dict;
mod error;
mod key;
mod properties;

pub use dict::{Dict, Iter};
pub use error::{DictError, Result};
pub use key::PropKey;
pub use molprop_tags::{common_properties, PropTag, SharedRegistry};
pub use properties::Properties;
