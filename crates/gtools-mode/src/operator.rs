//! Querying the resolved mode.

use crate::error::ModeError;
use crate::mode::{Mode, COMPILED_FLAG, COMPILED_MODE};
use serde::Serialize;

/// Read-only access to the operational mode.
///
/// Consumers should depend on this trait rather than on [`BuildMode`], so
/// tests can hand them a fixed mode.
pub trait ModeOperator {
    /// The resolved mode.
    fn mode(&self) -> Mode;

    /// The resolved mode as its raw string.
    fn get_mode(&self) -> &'static str {
        self.mode().as_str()
    }

    /// Whether the binary runs in development mode.
    fn is_development_mode(&self) -> bool {
        self.mode() == Mode::Development
    }

    /// Whether the binary runs in production mode.
    fn is_production_mode(&self) -> bool {
        self.mode() == Mode::Production
    }

    /// Run `callback` synchronously, only in production mode.
    ///
    /// Returns `Some` with the callback's result if it ran.
    fn execute_if_mode_is_production<F, R>(&self, callback: F) -> Option<R>
    where
        F: FnOnce() -> R,
        Self: Sized,
    {
        if self.is_production_mode() {
            Some(callback())
        } else {
            None
        }
    }
}

/// The mode resolved once at startup.
///
/// Immutable after construction; pass it by reference to whatever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildMode {
    mode: Mode,
}

impl BuildMode {
    /// Wrap an already resolved mode.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// The mode baked in at compile time through `GTOOLS_BUILD_MODE`.
    #[must_use]
    pub const fn from_build() -> Self {
        Self::new(COMPILED_MODE)
    }

    /// Resolve a raw mode string.
    ///
    /// # Errors
    /// Returns [`ModeError::Unrecognized`] if `raw` is non-empty and neither
    /// `"development"` nor `"production"`.
    pub fn resolve(raw: &str) -> Result<Self, ModeError> {
        let mode = Mode::resolve(raw)?;
        tracing::debug!(mode = %mode, "Resolved build mode");
        Ok(Self::new(mode))
    }

    /// Pick the mode from the compiled flag and an optional runtime value.
    ///
    /// A compiled flag always wins. The runtime value only selects the mode
    /// for builds without one, but it is checked either way.
    ///
    /// # Errors
    /// Returns [`ModeError::Unrecognized`] if `runtime` is set and not a
    /// recognized mode.
    pub fn from_sources(compiled: Option<Mode>, runtime: Option<&str>) -> Result<Self, ModeError> {
        let requested = runtime.map(Mode::resolve).transpose()?;
        let mode = match (compiled, requested) {
            (Some(fixed), Some(asked)) if fixed != asked => {
                tracing::warn!(
                    compiled = %fixed,
                    requested = %asked,
                    "Ignoring runtime build mode; this binary was built for a fixed mode"
                );
                fixed
            }
            (Some(fixed), _) => fixed,
            (None, requested) => requested.unwrap_or_default(),
        };
        tracing::debug!(mode = %mode, "Resolved build mode");
        Ok(Self::new(mode))
    }

    /// [`BuildMode::from_sources`] at startup, aborting on bad input.
    ///
    /// # Panics
    /// Panics if `runtime` is set and not a recognized mode. A broken build
    /// or deployment configuration must not start.
    #[must_use]
    pub fn init_from_sources(compiled: Option<Mode>, runtime: Option<&str>) -> Self {
        match Self::from_sources(compiled, runtime) {
            Ok(mode) => mode,
            Err(err) => {
                tracing::error!(error = %err, "Refusing to start with invalid build mode");
                panic!("{err}");
            }
        }
    }

    /// Resolve a raw mode string at startup against the compiled flag.
    ///
    /// # Panics
    /// Panics if `raw` is not a recognized mode.
    #[must_use]
    pub fn init(raw: &str) -> Self {
        Self::init_from_sources(COMPILED_FLAG, Some(raw))
    }
}

impl ModeOperator for BuildMode {
    fn mode(&self) -> Mode {
        self.mode
    }
}
