//! Operational mode definitions.

use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw value selecting development mode.
pub const DEVELOPMENT: &str = "development";

/// Raw value selecting production mode.
pub const PRODUCTION: &str = "production";

/// Compile-time variable carrying the raw build mode.
///
/// ```text
/// GTOOLS_BUILD_MODE=production cargo build --release
/// ```
pub const BUILD_MODE_VAR: &str = "GTOOLS_BUILD_MODE";

/// Mode fixed by [`BUILD_MODE_VAR`] when this crate was compiled.
///
/// `None` when the variable was unset or empty. Evaluated at compile time:
/// an unrecognized non-empty value fails the build.
pub const COMPILED_FLAG: Option<Mode> = match option_env!("GTOOLS_BUILD_MODE") {
    Some(raw) => Mode::from_build_flag(raw),
    None => None,
};

/// Mode of this build: [`COMPILED_FLAG`], or development when unset.
pub const COMPILED_MODE: Mode = match COMPILED_FLAG {
    Some(mode) => mode,
    None => Mode::Development,
};

/// Operational mode a binary was built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Default mode when no flag is set
    #[default]
    Development,
    /// Release builds
    Production,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 2] = [Mode::Development, Mode::Production];

    /// The raw string for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT,
            Self::Production => PRODUCTION,
        }
    }

    /// Resolve a raw mode string.
    ///
    /// `""` and `"development"` resolve to [`Mode::Development`],
    /// `"production"` to [`Mode::Production`]. Matching is exact.
    ///
    /// # Errors
    /// Returns [`ModeError::Unrecognized`] for any other value.
    pub fn resolve(raw: &str) -> Result<Self, ModeError> {
        match raw {
            "" | DEVELOPMENT => Ok(Self::Development),
            PRODUCTION => Ok(Self::Production),
            other => Err(ModeError::Unrecognized {
                value: other.to_string(),
            }),
        }
    }

    const fn from_build_flag(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else if const_str_eq(raw, DEVELOPMENT) {
            Some(Self::Development)
        } else if const_str_eq(raw, PRODUCTION) {
            Some(Self::Production)
        } else {
            panic!("GTOOLS_BUILD_MODE must be one of [development production]")
        }
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_values() {
        assert_eq!(Mode::resolve(""), Ok(Mode::Development));
        assert_eq!(Mode::resolve("development"), Ok(Mode::Development));
        assert_eq!(Mode::resolve("production"), Ok(Mode::Production));
    }

    #[test]
    fn test_resolve_is_exact() {
        for raw in ["staging", "Production", " production", "prod", "DEVELOPMENT"] {
            assert_eq!(
                Mode::resolve(raw),
                Err(ModeError::Unrecognized {
                    value: raw.to_string()
                }),
                "Should reject: {raw:?}"
            );
        }
    }

    #[test]
    fn test_as_str_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }

    #[test]
    fn test_build_flag_matches_resolve() {
        assert_eq!(Mode::from_build_flag(""), None);
        assert_eq!(Mode::from_build_flag("development"), Some(Mode::Development));
        assert_eq!(Mode::from_build_flag("production"), Some(Mode::Production));
    }

    #[test]
    fn test_compiled_mode_follows_flag() {
        assert_eq!(COMPILED_MODE, COMPILED_FLAG.unwrap_or_default());
    }

    #[test]
    #[should_panic(expected = "GTOOLS_BUILD_MODE must be one of [development production]")]
    fn test_build_flag_rejects_unknown() {
        let _ = Mode::from_build_flag("staging");
    }

    #[test]
    fn test_const_str_eq() {
        assert!(const_str_eq("abc", "abc"));
        assert!(!const_str_eq("abc", "abd"));
        assert!(!const_str_eq("abc", "ab"));
        assert!(const_str_eq("", ""));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Mode::Production).expect("serialize mode");
        assert_eq!(json, "\"production\"");

        let mode: Mode = serde_json::from_str("\"development\"").expect("deserialize mode");
        assert_eq!(mode, Mode::Development);
    }
}
