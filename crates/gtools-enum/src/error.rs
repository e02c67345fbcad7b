//! Error types for enum parsing.

use thiserror::Error;

/// Errors returned by [`Enum::parse`](crate::Enum::parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// Candidate did not match any allowed value
    #[error("invalid value {value}; it must be one of {options}")]
    InvalidValue {
        /// The rejected candidate, rendered with `Display`
        value: String,
        /// The allowed values, rendered as `[a b c]`
        options: String,
    },
}

/// Result type alias using `EnumError`.
pub type Result<T> = std::result::Result<T, EnumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnumError::InvalidValue {
            value: "4".to_string(),
            options: "[1 2 3]".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value 4; it must be one of [1 2 3]");
    }
}
