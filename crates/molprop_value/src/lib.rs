//! Tagged dynamic values for property storage.
//!
//! A [`Value`] holds exactly one of a closed set of kinds: empty, the four
//! scalar kinds plus `f32`, a string, five vector kinds, or an arbitrary
//! boxed payload ([`AnyBox`]). The live variant is the [`ValueKind`].
//!
//! # Ownership
//!
//! Scalar kinds are stored inline. String, vector and boxed kinds own their
//! payload outright: cloning a value deep-copies it and dropping a value
//! releases it once. No two values ever share a payload, so mutating one
//! through [`Value::get_mut`] can never be observed through another.
//!
//! # Access
//!
//! - [`Value::get`] / [`Value::get_mut`]: strict typed access via
//!   [`ValueType`]. Fails with [`ValueError::TypeMismatch`] unless the live
//!   kind matches (or the boxed payload is exactly that type).
//! - [`Value::extract`]: owned access via [`FromValue`], which additionally
//!   parses string values into numeric targets.
//! - [`Value::to_text`]: locale-invariant text rendering of any kind.

mod any;
mod coerce;
mod error;
mod kind;
mod text;
mod value;

pub use any::{AnyBox, AnyValue};
pub use coerce::FromValue;
pub use error::{Result, ValueError};
pub use kind::ValueKind;
pub use value::{Value, ValueType};
