//! Owned extraction with string-to-number coercion.

use crate::{Result, Value, ValueError, ValueType};

/// Owned conversion out of a [`Value`].
///
/// Numeric targets also accept a `String` value holding their text form, so
/// a property read back from a text file still yields a number. All other
/// targets require the stored kind to match exactly.
pub trait FromValue: Sized {
    /// Convert a borrowed value into `Self`.
    ///
    /// # Errors
    ///
    /// [`ValueError::TypeMismatch`] if the stored kind does not match and no
    /// coercion applies, [`ValueError::Conversion`] if a string fails to
    /// parse.
    fn from_value(value: &Value) -> Result<Self>;
}

/// Parse a stored string for a numeric target.
trait ParseText: ValueType + Copy {
    fn parse_text(text: &str) -> Option<Self>;
}

/// Implements `ParseText` through `FromStr`, which is locale-independent.
macro_rules! impl_parse_text {
    ($($ty:ty),*) => { $(
        impl ParseText for $ty {
            #[inline]
            fn parse_text(text: &str) -> Option<Self> {
                text.parse().ok()
            }
        }
    )* };
}

impl_parse_text!(i32, u32, i64, u64, f32, f64);

impl ParseText for bool {
    /// Only the rendered forms `1` and `0` are accepted.
    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

fn coerce_numeric<T: ParseText>(value: &Value) -> Result<T> {
    match value {
        Value::String(text) => {
            T::parse_text(text).ok_or_else(|| {
                tracing::debug!(target_type = T::NAME, text = %text, "string coercion failed");
                ValueError::Conversion {
                    value: text.clone(),
                    target: T::NAME,
                }
            })
        }
        other => other.get::<T>().copied(),
    }
}

macro_rules! impl_numeric_from_value {
    ($($ty:ty),*) => { $(
        impl FromValue for $ty {
            #[inline]
            fn from_value(value: &Value) -> Result<Self> {
                coerce_numeric(value)
            }
        }
    )* };
}

impl_numeric_from_value!(bool, i32, u32, i64, u64, f32, f64);

macro_rules! impl_cloned_from_value {
    ($($ty:ty),*) => { $(
        impl FromValue for $ty {
            #[inline]
            fn from_value(value: &Value) -> Result<Self> {
                value.get::<$ty>().cloned()
            }
        }
    )* };
}

impl_cloned_from_value!(String, Vec<f64>, Vec<f32>, Vec<i32>, Vec<u32>, Vec<String>);

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl Value {
    /// Copy the payload out as `T`, parsing string values for numeric `T`.
    ///
    /// # Errors
    ///
    /// See [`FromValue::from_value`].
    pub fn extract<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }
}

#[cfg(test)]
mod tests;
