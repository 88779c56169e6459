//! Locale-invariant text rendering.
//!
//! Rendering only goes through `core::fmt`, which never consults the process
//! locale, so the decimal separator is always `.`.

use crate::{Result, Value, ValueError};
use std::fmt::{self, Write};

/// Magnitudes at or above this render in exponent notation.
const EXP_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this render in exponent notation.
const EXP_LOWER: f64 = 1e-5;

/// Shortest round-trip rendering of a float.
///
/// `Display` for floats already picks the shortest digits that parse back to
/// the same bits; the only adjustment is the switch to `{:e}` at extreme
/// magnitudes so `1e300` does not expand to 301 digits.
trait FloatText: Copy + fmt::Display + fmt::LowerExp {
    fn magnitude(self) -> f64;

    fn write_text(self, out: &mut (impl Write + ?Sized)) -> fmt::Result {
        let m = self.magnitude();
        if m.is_finite() && (m >= EXP_UPPER || (m > 0.0 && m < EXP_LOWER)) {
            write!(out, "{self:e}")
        } else {
            write!(out, "{self}")
        }
    }
}

impl FloatText for f64 {
    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl FloatText for f32 {
    fn magnitude(self) -> f64 {
        f64::from(self.abs())
    }
}

/// `[a,b,c,]`: every item is followed by a comma, `[]` when empty.
fn write_list<T>(
    out: &mut dyn Write,
    items: &[T],
    mut item: impl FnMut(&mut dyn Write, &T) -> fmt::Result,
) -> fmt::Result {
    out.write_char('[')?;
    for v in items {
        item(&mut *out, v)?;
        out.write_char(',')?;
    }
    out.write_char(']')
}

impl Value {
    /// Render the value as text.
    ///
    /// Booleans render as `1`/`0`, numbers in the shortest form that parses
    /// back to the identical value, strings verbatim, vectors as
    /// `[v1,v2,]`, and `Empty` as the empty string. An `Any` value renders if
    /// its payload is a `String`, `i64` or `u64`.
    ///
    /// # Errors
    ///
    /// [`ValueError::Unrenderable`] for any other boxed payload.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::Any(boxed) => boxed.text().ok_or(ValueError::Unrenderable {
                type_name: boxed.type_name(),
            }),
            other => Ok(other.to_string()),
        }
    }

    /// Write every kind except `Any`.
    fn write_text(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Value::Empty | Value::Any(_) => Ok(()),
            Value::Bool(b) => out.write_char(if *b { '1' } else { '0' }),
            Value::Int32(n) => write!(out, "{n}"),
            Value::UInt32(n) => write!(out, "{n}"),
            Value::Float64(x) => x.write_text(out),
            Value::Float32(x) => x.write_text(out),
            Value::String(s) => out.write_str(s),
            Value::VecFloat64(items) => write_list(out, items, |o, x| x.write_text(o)),
            Value::VecFloat32(items) => write_list(out, items, |o, x| x.write_text(o)),
            Value::VecInt32(items) => write_list(out, items, |o, n| write!(o, "{n}")),
            Value::VecUInt32(items) => write_list(out, items, |o, n| write!(o, "{n}")),
            Value::VecString(items) => write_list(out, items, |o, s| o.write_str(s)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Any(boxed) => match boxed.text() {
                Some(text) => f.write_str(&text),
                None => write!(f, "<any {}>", boxed.type_name()),
            },
            other => other.write_text(f),
        }
    }
}
