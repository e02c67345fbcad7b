//! Tracing subscriber setup.

use crate::config::GeneralConfig;
use crate::error::{GtoolsError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter directive for a configured level.
///
/// `RUST_LOG` takes precedence when set.
#[must_use]
pub fn filter_directive(level: &str) -> String {
    format!("{level},gtools={level}")
}

/// Initialize the global tracing subscriber.
///
/// # Errors
/// Returns [`GtoolsError::Logging`] if a global subscriber is already set.
pub fn init_logging(general: &GeneralConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&general.log_level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(general.log_targets))
        .with(filter)
        .try_init()
        .map_err(|e| GtoolsError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "debug,gtools=debug");
    }

    #[test]
    fn test_second_init_is_an_error() {
        let general = GeneralConfig::default();
        // The first call may race with other tests, the second never succeeds.
        let _ = init_logging(&general);
        let err = init_logging(&general).expect_err("subscriber already installed");
        assert!(matches!(err, GtoolsError::Logging(_)));
    }
}
