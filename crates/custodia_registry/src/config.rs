//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Behavior switches for a [`ResourceRegistry`](crate::ResourceRegistry).
///
/// # Example
///
/// ```
/// use custodia_registry::RegistryConfig;
///
/// let config = RegistryConfig::default()
///     .with_initialize_on_add(false)
///     .with_trace_events(true);
///
/// assert!(!config.initialize_on_add);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Whether [`add_default`](crate::ResourceRegistry::add_default)
    /// initializes the resource it inserts.
    pub initialize_on_add: bool,
    /// Whether the registry logs every event it raises at `debug`.
    pub trace_events: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initialize_on_add: true,
            trace_events: false,
        }
    }
}

impl RegistryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`initialize_on_add`](Self::initialize_on_add).
    #[must_use]
    pub fn with_initialize_on_add(mut self, enabled: bool) -> Self {
        self.initialize_on_add = enabled;
        self
    }

    /// Sets [`trace_events`](Self::trace_events).
    #[must_use]
    pub fn with_trace_events(mut self, enabled: bool) -> Self {
        self.trace_events = enabled;
        self
    }

    /// Parses a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the input is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
