//! Primitive value model used for membership comparisons.
//!
//! Every value stored in or checked against an [`Enum`](crate::Enum) is
//! projected into a [`PrimitiveValue`], a closed set of text, integer and
//! float kinds. Comparisons happen on that projection, so a newtype around
//! `String` can be checked against a plain `&str` and vice versa.

use std::fmt;

/// Borrowed view of a primitive value.
#[derive(Debug, Clone, Copy)]
pub enum PrimitiveValue<'a> {
    /// Text value
    Text(&'a str),
    /// Signed integer, widened to 64 bits
    Int(i64),
    /// Single-precision float
    Float32(f32),
    /// Double-precision float
    Float64(f64),
}

impl PrimitiveValue<'_> {
    /// Name of the primitive kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "integer",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
        }
    }

    fn as_f64(self) -> Option<f64> {
        match self {
            Self::Float32(v) => Some(f64::from(v)),
            Self::Float64(v) => Some(v),
            Self::Text(_) | Self::Int(_) => None,
        }
    }
}

impl PartialEq for PrimitiveValue<'_> {
    // Exact comparison: no epsilon, NaN never matches.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// A value that can take part in enum membership checks.
///
/// Implemented for `str`, `String`, the signed integers, the unsigned
/// integers up to 32 bits, `f32` and `f64`. Named subtypes implement it by
/// projecting onto their underlying primitive:
///
/// ```rust
/// use gtools_enum::{Primitive, PrimitiveValue};
/// use std::fmt;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Color(String);
///
/// impl fmt::Display for Color {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl Primitive for Color {
///     fn primitive(&self) -> PrimitiveValue<'_> {
///         PrimitiveValue::Text(&self.0)
///     }
/// }
/// ```
pub trait Primitive: fmt::Display {
    /// Project this value onto its primitive representation.
    fn primitive(&self) -> PrimitiveValue<'_>;

    /// Compare two primitive-like values by primitive equality.
    fn primitive_eq<O: Primitive + ?Sized>(&self, other: &O) -> bool {
        self.primitive() == other.primitive()
    }
}

impl Primitive for str {
    fn primitive(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Text(self)
    }
}

impl Primitive for String {
    fn primitive(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Text(self.as_str())
    }
}

impl<T: Primitive + ?Sized> Primitive for &T {
    fn primitive(&self) -> PrimitiveValue<'_> {
        (**self).primitive()
    }
}

impl<T: Primitive + ?Sized> Primitive for Box<T> {
    fn primitive(&self) -> PrimitiveValue<'_> {
        (**self).primitive()
    }
}

macro_rules! impl_int_primitive {
    ($($ty:ty),*) => {
        $(
            impl Primitive for $ty {
                fn primitive(&self) -> PrimitiveValue<'_> {
                    PrimitiveValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_int_primitive!(i8, i16, i32, i64, u8, u16, u32);

impl Primitive for isize {
    // isize is at most 64 bits on every supported target
    #[allow(clippy::cast_possible_truncation)]
    fn primitive(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Int(*self as i64)
    }
}

impl Primitive for f32 {
    fn primitive(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Float32(*self)
    }
}

impl Primitive for f64 {
    fn primitive(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Float64(*self)
    }
}
