//! Value kind discriminator.

use std::fmt;

/// Which variant of a [`Value`](crate::Value) is live.
///
/// The discriminant codes are stable and dense so a serializer can write
/// `code()` ahead of the payload and read it back with `from_code()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    Empty = 0,
    Int32 = 1,
    Float64 = 2,
    String = 3,
    Float32 = 4,
    Bool = 5,
    UInt32 = 6,
    Any = 7,
    VecFloat64 = 8,
    VecFloat32 = 9,
    VecInt32 = 10,
    VecUInt32 = 11,
    VecString = 12,
}

impl ValueKind {
    /// Every kind, in code order.
    pub const ALL: [ValueKind; 13] = [
        ValueKind::Empty,
        ValueKind::Int32,
        ValueKind::Float64,
        ValueKind::String,
        ValueKind::Float32,
        ValueKind::Bool,
        ValueKind::UInt32,
        ValueKind::Any,
        ValueKind::VecFloat64,
        ValueKind::VecFloat32,
        ValueKind::VecInt32,
        ValueKind::VecUInt32,
        ValueKind::VecString,
    ];

    /// Stable discriminator code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Kind for a discriminator code, if the code is known.
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Whether values of this kind are stored inline with no heap payload.
    pub const fn is_pod(self) -> bool {
        matches!(
            self,
            ValueKind::Empty
                | ValueKind::Bool
                | ValueKind::Int32
                | ValueKind::UInt32
                | ValueKind::Float64
                | ValueKind::Float32
        )
    }

    /// Whether this is one of the vector kinds.
    pub const fn is_vector(self) -> bool {
        matches!(
            self,
            ValueKind::VecFloat64
                | ValueKind::VecFloat32
                | ValueKind::VecInt32
                | ValueKind::VecUInt32
                | ValueKind::VecString
        )
    }

    /// Short name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Empty => "empty",
            ValueKind::Bool => "bool",
            ValueKind::Int32 => "int32",
            ValueKind::UInt32 => "uint32",
            ValueKind::Float64 => "float64",
            ValueKind::Float32 => "float32",
            ValueKind::String => "string",
            ValueKind::VecFloat64 => "vec<float64>",
            ValueKind::VecFloat32 => "vec<float32>",
            ValueKind::VecInt32 => "vec<int32>",
            ValueKind::VecUInt32 => "vec<uint32>",
            ValueKind::VecString => "vec<string>",
            ValueKind::Any => "any",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
