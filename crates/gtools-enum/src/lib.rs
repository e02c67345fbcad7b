//! g-tools Enum - closed sets of allowed primitive values.
//!
//! An [`Enum`] holds a fixed, ordered list of allowed values and checks
//! candidates against it. Values and candidates are compared through their
//! [`Primitive`] projection (text, integer or float), so a named subtype can
//! be validated against plain inputs.
//!
//! # Modules
//!
//! - [`container`] - The [`Enum`] type
//! - [`primitive`] - [`Primitive`] trait and the [`PrimitiveValue`] view
//! - [`error`] - [`EnumError`] using thiserror
//!
//! # Example
//!
//! ```rust
//! use gtools_enum::Enum;
//!
//! let fruits: Enum<&str, str> = Enum::from_values(["apple", "banana", "cherry"]);
//! assert_eq!(fruits.to_string(), "[apple banana cherry]");
//! assert_eq!(fruits.parse("banana"), Ok("banana"));
//!
//! let numbers = Enum::new([1, 2, 3]);
//! assert!(numbers.validate(&2));
//!
//! let err = numbers.parse(&4).unwrap_err();
//! assert_eq!(err.to_string(), "invalid value 4; it must be one of [1 2 3]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod container;
pub mod error;
pub mod primitive;

pub use container::Enum;
pub use error::{EnumError, Result};
pub use primitive::{Primitive, PrimitiveValue};
