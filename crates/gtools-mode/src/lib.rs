//! g-tools Mode - development/production build flag.
//!
//! The mode is chosen when the binary is built, by setting
//! `GTOOLS_BUILD_MODE` in the compiler's environment:
//!
//! ```text
//! GTOOLS_BUILD_MODE=production cargo build --release
//! ```
//!
//! An unset or empty flag means development. Any other value fails the
//! build. Startup code may also read a raw mode string from its own
//! configuration with [`BuildMode::from_sources`] or [`BuildMode::init`].
//! That value only takes effect in builds without a flag; a binary built
//! for production stays in production.
//!
//! # Example
//!
//! ```rust
//! use gtools_mode::{BuildMode, ModeOperator};
//!
//! let mode = BuildMode::resolve("production").expect("known mode");
//! assert!(mode.is_production_mode());
//!
//! let report = mode.execute_if_mode_is_production(|| "uploaded crash report");
//! assert_eq!(report, Some("uploaded crash report"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mode;
pub mod operator;

pub use error::ModeError;
pub use mode::{Mode, BUILD_MODE_VAR, COMPILED_FLAG, COMPILED_MODE, DEVELOPMENT, PRODUCTION};
pub use operator::{BuildMode, ModeOperator};
