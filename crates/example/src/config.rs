//! Demo configuration loaded from JSON.

use std::path::Path;

use custodia_core::TracingConfig;
use custodia_registry::RegistryConfig;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::texture::TextureSpec;

/// Everything the demo binary can be configured with.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// {
///   "tracing": { "level": "debug", "format": "compact" },
///   "registry": { "initialize_on_add": true, "trace_events": false },
///   "handle_capacity": 8,
///   "textures": [{ "id": "albedo", "width": 512, "height": 512 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Logging setup.
    pub tracing: TracingConfig,
    /// Registry behavior.
    pub registry: RegistryConfig,
    /// Maximum number of live handles, unlimited when absent.
    pub handle_capacity: Option<usize>,
    /// Textures to load, in order.
    pub textures: Vec<TextureSpec>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tracing: TracingConfig::default(),
            registry: RegistryConfig::default(),
            handle_capacity: None,
            textures: vec![
                TextureSpec::new("albedo", 1024, 1024),
                TextureSpec::new("normal", 1024, 1024),
                TextureSpec::new("roughness", 512, 512),
                TextureSpec::new("lightmap", 2048, 2048),
            ],
        }
    }
}

impl DemoConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Config`] if the input does not parse.
    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Io`] if the file cannot be read, or
    /// [`DemoError::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let json = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use custodia_core::LogLevel;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn nested_sections_are_parsed() {
        let config = DemoConfig::from_json(
            r#"{
                "tracing": { "level": "debug" },
                "registry": { "initialize_on_add": false },
                "handle_capacity": 2,
                "textures": [{ "id": "a", "width": 1, "height": 1 }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.tracing.level, LogLevel::Debug);
        assert!(!config.registry.initialize_on_add);
        assert_eq!(config.handle_capacity, Some(2));
        assert_eq!(config.textures, vec![TextureSpec::new("a", 1, 1)]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DemoConfig::load(Path::new("/nonexistent/custodia-demo.json")).unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
    }
}
