//! The [`Enum`] container.

use crate::error::{EnumError, Result};
use crate::primitive::Primitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A fixed, ordered set of allowed values.
///
/// `V` is the stored value type. `I` is the type of the candidates passed to
/// [`validate`](Self::validate) and [`parse`](Self::parse); it defaults to `V`
/// and may be unsized (`str`). The two only need to agree on their
/// [`Primitive`] projection, so an `Enum<Color, str>` accepts plain string
/// slices and hands back `Color` values.
///
/// The value list is never mutated after construction.
pub struct Enum<V, I: ?Sized = V> {
    values: Vec<V>,
    input: PhantomData<fn(&I)>,
}

impl<V: Primitive> Enum<V> {
    /// Create an enum whose candidates have the same type as its values.
    ///
    /// Only [`Primitive`] values can be stored:
    ///
    /// ```compile_fail
    /// use gtools_enum::Enum;
    ///
    /// let bytes = Enum::new([vec![1_u8, 2]]);
    /// ```
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self::from_values(values)
    }
}

impl<V: Primitive, I: ?Sized> Enum<V, I> {
    /// Create an enum with an explicitly chosen candidate type.
    ///
    /// ```rust
    /// use gtools_enum::Enum;
    ///
    /// let sizes: Enum<String, str> = Enum::from_values(["s".to_string(), "m".to_string()]);
    /// assert!(sizes.validate("m"));
    /// ```
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
            input: PhantomData,
        }
    }
}

impl<V, I: ?Sized> Enum<V, I> {
    /// The allowed values, in construction order.
    #[must_use]
    pub fn options(&self) -> &[V] {
        &self.values
    }

    /// Number of allowed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty. An empty enum rejects every candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the allowed values.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
}

impl<V: Primitive, I: Primitive + ?Sized> Enum<V, I> {
    /// Return the first stored value equal to `input`, if any.
    #[must_use]
    pub fn find(&self, input: &I) -> Option<&V> {
        self.values.iter().find(|value| value.primitive_eq(input))
    }

    /// Whether `input` matches one of the allowed values.
    #[must_use]
    pub fn validate(&self, input: &I) -> bool {
        self.find(input).is_some()
    }

    /// Return the stored value matching `input`.
    ///
    /// Callers that want the zero value on failure can use
    /// `parse(..).unwrap_or_default()`.
    ///
    /// # Errors
    /// Returns [`EnumError::InvalidValue`] if `input` matches none of the
    /// allowed values.
    pub fn parse(&self, input: &I) -> Result<V>
    where
        V: Clone,
    {
        if let Some(value) = self.find(input) {
            return Ok(value.clone());
        }

        tracing::debug!(
            value = %input,
            kind = input.primitive().kind(),
            options = self.len(),
            "Rejected enum candidate"
        );
        Err(EnumError::InvalidValue {
            value: input.to_string(),
            options: self.to_string(),
        })
    }
}

impl<V: fmt::Display, I: ?Sized> fmt::Display for Enum<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<V: fmt::Debug, I: ?Sized> fmt::Debug for Enum<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enum")
            .field("values", &self.values)
            .finish()
    }
}

impl<V: Clone, I: ?Sized> Clone for Enum<V, I> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            input: PhantomData,
        }
    }
}

impl<V: PartialEq, I: ?Sized> PartialEq for Enum<V, I> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Primitive, I: ?Sized> Default for Enum<V, I> {
    fn default() -> Self {
        Self::from_values(Vec::new())
    }
}

impl<V: Primitive, I: ?Sized> From<Vec<V>> for Enum<V, I> {
    fn from(values: Vec<V>) -> Self {
        Self {
            values,
            input: PhantomData,
        }
    }
}

impl<V: Primitive, I: ?Sized, const N: usize> From<[V; N]> for Enum<V, I> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V: Primitive, I: ?Sized> FromIterator<V> for Enum<V, I> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

impl<'a, V, I: ?Sized> IntoIterator for &'a Enum<V, I> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V: Serialize, I: ?Sized> Serialize for Enum<V, I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de, V: Primitive + Deserialize<'de>, I: ?Sized> Deserialize<'de> for Enum<V, I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(Self::from)
    }
}
