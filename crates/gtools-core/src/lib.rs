//! g-tools Core - configuration, logging and startup wiring.
//!
//! This crate ties the [`gtools_enum`] and [`gtools_mode`] libraries into an
//! application: it loads configuration, installs the tracing subscriber and
//! resolves the build mode exactly once.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`logging`] - tracing-subscriber setup
//! - [`runtime`] - The [`Runtime`] built at startup
//!
//! # Example
//!
//! ```rust
//! use gtools_core::{AppConfig, ModeOperator, Runtime};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = AppConfig::default();
//! config.mode.build_mode = Some("production".to_string());
//!
//! let runtime = Runtime::new(config)?;
//! runtime.execute_if_mode_is_production(|| println!("sending telemetry"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

// Re-export commonly used types
pub use config::{AppConfig, GeneralConfig, ModeConfig, LOG_LEVELS};
pub use error::{ConfigError, ConfigResult, GtoolsError, Result};
pub use gtools_enum::{Enum, EnumError, Primitive, PrimitiveValue};
pub use gtools_mode::{BuildMode, Mode, ModeError, ModeOperator};
pub use logging::init_logging;
pub use runtime::Runtime;
