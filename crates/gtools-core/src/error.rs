//! Core error types for g-tools.
//!
//! This module defines the central error type used by the startup code.
//! Errors from the enum and mode crates are carried as variants so they
//! propagate with `?`.

use gtools_enum::EnumError;
use gtools_mode::ModeError;
use thiserror::Error;

/// Central error type for all g-tools operations.
#[derive(Error, Debug)]
pub enum GtoolsError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build mode could not be resolved
    #[error("mode error: {0}")]
    Mode(#[from] ModeError),

    /// Value outside its allowed set
    #[error("validation error: {0}")]
    Enum(#[from] EnumError),

    /// Logging could not be initialized
    #[error("logging error: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `GtoolsError`.
pub type Result<T> = std::result::Result<T, GtoolsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
