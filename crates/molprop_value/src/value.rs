//! The tagged value type.

use crate::any::{AnyBox, AnyValue};
use crate::{Result, ValueError, ValueKind};
use std::any::Any;

/// A single stored property value.
///
/// Exactly one variant is live at a time and it owns its payload. `Clone`
/// deep-copies; dropping releases the payload once.
#[derive(Clone, Debug, Default)]
pub enum Value {
    // Inline kinds (no heap allocation)
    /// No value.
    #[default]
    Empty,
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 32-bit unsigned integer.
    UInt32(u32),
    /// 64-bit float.
    Float64(f64),
    /// 32-bit float.
    Float32(f32),

    // Heap-owned kinds
    /// String value.
    String(String),
    /// Vector of 64-bit floats.
    VecFloat64(Vec<f64>),
    /// Vector of 32-bit floats.
    VecFloat32(Vec<f32>),
    /// Vector of 32-bit signed integers.
    VecInt32(Vec<i32>),
    /// Vector of 32-bit unsigned integers.
    VecUInt32(Vec<u32>),
    /// Vector of strings.
    VecString(Vec<String>),
    /// Any other type, boxed.
    Any(AnyBox),
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Value>() <= 32);

/// A Rust type with a native [`ValueKind`].
///
/// `get::<T>()` succeeds when the live variant is `T::KIND`, or when the
/// value is `Any` and the box holds exactly a `T`. Types whose `KIND` is
/// `Any` (`i64`, `u64`) are only ever reachable through the box.
pub trait ValueType: Any + Sized {
    /// Kind that stores this type natively.
    const KIND: ValueKind;
    /// Name used in error messages.
    const NAME: &'static str;

    /// Borrow the payload if the live variant is `KIND`.
    fn cast(value: &Value) -> Option<&Self>;

    /// Mutably borrow the payload if the live variant is `KIND`.
    fn cast_mut(value: &mut Value) -> Option<&mut Self>;
}

/// Implements `ValueType` and `From` for each natively stored type.
macro_rules! impl_native_type {
    ($($ty:ty => $variant:ident;)*) => { $(
        impl ValueType for $ty {
            const KIND: ValueKind = ValueKind::$variant;
            const NAME: &'static str = ValueKind::$variant.name();

            #[inline]
            fn cast(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn cast_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            #[inline]
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    )* };
}

impl_native_type! {
    bool => Bool;
    i32 => Int32;
    u32 => UInt32;
    f64 => Float64;
    f32 => Float32;
    String => String;
    Vec<f64> => VecFloat64;
    Vec<f32> => VecFloat32;
    Vec<i32> => VecInt32;
    Vec<u32> => VecUInt32;
    Vec<String> => VecString;
}

/// Implements `ValueType` and `From` for integer types kept in the box.
macro_rules! impl_boxed_type {
    ($($ty:ty => $name:literal;)*) => { $(
        impl ValueType for $ty {
            const KIND: ValueKind = ValueKind::Any;
            const NAME: &'static str = $name;

            #[inline]
            fn cast(_: &Value) -> Option<&Self> {
                None
            }

            #[inline]
            fn cast_mut(_: &mut Value) -> Option<&mut Self> {
                None
            }
        }

        impl From<$ty> for Value {
            #[inline]
            fn from(v: $ty) -> Self {
                Value::from_any(v)
            }
        }
    )* };
}

impl_boxed_type! {
    i64 => "int64";
    u64 => "uint64";
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<&[f64]> for Value {
    fn from(items: &[f64]) -> Self {
        Value::VecFloat64(items.to_vec())
    }
}

impl From<&[f32]> for Value {
    fn from(items: &[f32]) -> Self {
        Value::VecFloat32(items.to_vec())
    }
}

impl From<&[i32]> for Value {
    fn from(items: &[i32]) -> Self {
        Value::VecInt32(items.to_vec())
    }
}

impl From<&[u32]> for Value {
    fn from(items: &[u32]) -> Self {
        Value::VecUInt32(items.to_vec())
    }
}

impl From<&[String]> for Value {
    fn from(items: &[String]) -> Self {
        Value::VecString(items.to_vec())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::VecString(items.into_iter().map(str::to_owned).collect())
    }
}

impl From<AnyBox> for Value {
    fn from(boxed: AnyBox) -> Self {
        Value::Any(boxed)
    }
}

// Construction and lifecycle

impl Value {
    /// Box an arbitrary payload as an `Any` value.
    ///
    /// # Example
    ///
    /// ```text
    /// let v = Value::from_any(Conformer::new(...));
    /// let c: &Conformer = v.downcast_ref()?;
    /// ```
    pub fn from_any<T: AnyValue>(payload: T) -> Self {
        Value::Any(AnyBox::new(payload))
    }

    /// Replace the current value.
    ///
    /// The new value is fully built before the old payload is dropped, so a
    /// panic inside `Into` leaves `self` untouched.
    pub fn assign(&mut self, value: impl Into<Value>) {
        let value = value.into();
        *self = value;
    }

    /// Replace the current value with a deep copy of `other`.
    pub fn copy_from(&mut self, other: &Value) {
        self.clone_from(other);
    }

    /// Release the payload, leaving `Empty`. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        *self = Value::Empty;
    }

    /// Move the value out, leaving `Empty` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

// Inspection

impl Value {
    /// The live kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Empty => ValueKind::Empty,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Float32(_) => ValueKind::Float32,
            Value::String(_) => ValueKind::String,
            Value::VecFloat64(_) => ValueKind::VecFloat64,
            Value::VecFloat32(_) => ValueKind::VecFloat32,
            Value::VecInt32(_) => ValueKind::VecInt32,
            Value::VecUInt32(_) => ValueKind::VecUInt32,
            Value::VecString(_) => ValueKind::VecString,
            Value::Any(_) => ValueKind::Any,
        }
    }

    /// Check if no value is stored.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Check if the value is stored inline (no heap payload).
    pub fn is_pod(&self) -> bool {
        self.kind().is_pod()
    }

    /// Type name for error messages: the kind name, or the boxed type's name
    /// for `Any`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Any(boxed) => boxed.type_name(),
            other => other.kind().name(),
        }
    }
}

// Typed access

impl Value {
    /// Borrow the payload as `T`.
    pub fn get<T: ValueType>(&self) -> Result<&T> {
        if let Some(v) = T::cast(self) {
            return Ok(v);
        }
        match self {
            Value::Any(boxed) => boxed.downcast_ref::<T>(),
            _ => None,
        }
        .ok_or_else(|| ValueError::type_mismatch(T::NAME, self.type_name()))
    }

    /// Mutably borrow the payload as `T`.
    pub fn get_mut<T: ValueType>(&mut self) -> Result<&mut T> {
        let found = self.type_name();
        let slot = if self.kind() == T::KIND && T::KIND != ValueKind::Any {
            T::cast_mut(self)
        } else if let Value::Any(boxed) = self {
            boxed.downcast_mut::<T>()
        } else {
            None
        };
        slot.ok_or(ValueError::type_mismatch(T::NAME, found))
    }

    /// Borrow the boxed payload of an `Any` value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T> {
        match self {
            Value::Any(boxed) => boxed.downcast_ref::<T>(),
            _ => None,
        }
        .ok_or_else(|| ValueError::type_mismatch(std::any::type_name::<T>(), self.type_name()))
    }

    /// Mutably borrow the boxed payload of an `Any` value as `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Result<&mut T> {
        let found = self.type_name();
        match self {
            Value::Any(boxed) => boxed.downcast_mut::<T>(),
            _ => None,
        }
        .ok_or(ValueError::type_mismatch(std::any::type_name::<T>(), found))
    }
}

/// Structural equality.
///
/// Boxed `Any` payloads carry no equality, so two `Any` values never compare
/// equal; compare them through [`Value::downcast_ref`] instead.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::UInt32(a), Value::UInt32(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => a == b,
            (Value::Float32(a), Value::Float32(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::VecFloat64(a), Value::VecFloat64(b)) => a == b,
            (Value::VecFloat32(a), Value::VecFloat32(b)) => a == b,
            (Value::VecInt32(a), Value::VecInt32(b)) => a == b,
            (Value::VecUInt32(a), Value::VecUInt32(b)) => a == b,
            (Value::VecString(a), Value::VecString(b)) => a == b,
            _ => false,
        }
    }
}
