//! Type-erased payloads for the `Any` kind.

use std::any::{Any, TypeId};
use std::fmt;

/// Object-safe view of a payload stored in an [`AnyBox`].
///
/// Blanket-implemented for every `'static + Clone + Debug + Send + Sync`
/// type, so callers never implement it by hand.
pub trait AnyValue: Any + Send + Sync {
    /// Borrow as `dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `dyn Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Deep-copy into a fresh box.
    fn clone_box(&self) -> Box<dyn AnyValue>;

    /// Name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Debug-format the concrete value.
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T> AnyValue for T
where
    T: Any + Clone + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn AnyValue> {
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Owned, type-erased payload.
///
/// Cloning deep-copies the payload through [`AnyValue::clone_box`]; there is
/// no sharing between clones.
pub struct AnyBox(Box<dyn AnyValue>);

impl AnyBox {
    /// Box a payload.
    pub fn new<T: AnyValue>(payload: T) -> Self {
        AnyBox(Box::new(payload))
    }

    /// Name of the boxed type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// `TypeId` of the boxed type.
    pub fn payload_type_id(&self) -> TypeId {
        Any::type_id(self.0.as_any())
    }

    /// Whether the boxed payload is exactly a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Borrow the payload as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the payload as `T`, if that is its type.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.0.as_any_mut().downcast_mut::<T>()
    }

    /// Text rendering for the payload types that have one.
    ///
    /// Strings render verbatim; `i64` and `u64` render in decimal.
    pub(crate) fn text(&self) -> Option<String> {
        if let Some(s) = self.downcast_ref::<String>() {
            return Some(s.clone());
        }
        if let Some(n) = self.downcast_ref::<i64>() {
            return Some(n.to_string());
        }
        self.downcast_ref::<u64>().map(u64::to_string)
    }
}

impl Clone for AnyBox {
    fn clone(&self) -> Self {
        AnyBox(self.0.clone_box())
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_debug(f)
    }
}
