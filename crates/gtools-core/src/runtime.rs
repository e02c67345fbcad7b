//! Startup wiring.
//!
//! [`Runtime`] is built once by the binary's `main`, then passed by
//! reference. It owns the validated configuration and the build mode,
//! neither of which changes afterwards.

use crate::config::AppConfig;
use crate::error::Result;
use crate::logging::init_logging;
use gtools_mode::{BuildMode, Mode, ModeOperator, COMPILED_FLAG};
use std::path::Path;

/// Validated configuration plus the resolved build mode.
#[derive(Debug, Clone)]
pub struct Runtime {
    config: AppConfig,
    mode: BuildMode,
}

impl Runtime {
    /// Validate `config` and resolve the build mode.
    ///
    /// A mode compiled into the binary wins. `mode.build_mode` only picks
    /// the mode for builds without one, but is checked either way.
    ///
    /// # Errors
    /// Returns an error if the config is invalid or the mode is unrecognized.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_build_flag(config, COMPILED_FLAG)
    }

    /// [`Runtime::new`] against an explicit compiled flag.
    pub fn with_build_flag(config: AppConfig, compiled: Option<Mode>) -> Result<Self> {
        config.validate()?;
        let mode = BuildMode::from_sources(compiled, config.mode.build_mode.as_deref())?;
        Ok(Self { config, mode })
    }

    /// Load config with env overrides, start logging and resolve the mode.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or is invalid, or if
    /// logging cannot be initialized.
    ///
    /// # Panics
    /// Panics if the configured build mode is unrecognized.
    pub fn bootstrap() -> Result<Self> {
        Self::bootstrap_from(&AppConfig::config_path()?, |key| std::env::var(key).ok())
    }

    /// [`Runtime::bootstrap`] from a given config file and variable lookup.
    ///
    /// # Panics
    /// Panics if the configured build mode is unrecognized.
    pub fn bootstrap_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = AppConfig::load_from(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        init_logging(&config.general)?;

        let mode = BuildMode::init_from_sources(COMPILED_FLAG, config.mode.build_mode.as_deref());
        tracing::info!(
            mode = mode.get_mode(),
            version = env!("CARGO_PKG_VERSION"),
            "g-tools runtime started"
        );
        Ok(Self { config, mode })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The resolved build mode.
    #[must_use]
    pub fn build_mode(&self) -> &BuildMode {
        &self.mode
    }
}

impl ModeOperator for Runtime {
    fn mode(&self) -> Mode {
        self.mode.mode()
    }
}
