//! Error types for mode resolution.

use thiserror::Error;

/// Errors that can occur while resolving the build mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// Raw mode is non-empty and not a known mode
    #[error("unrecognized build mode {value:?}; it must be one of [development production]")]
    Unrecognized {
        /// The raw value that was rejected
        value: String,
    },
}
