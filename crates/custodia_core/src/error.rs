//! Error types for core infrastructure.

use thiserror::Error;

/// Errors raised while loading infrastructure configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_includes_cause() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CoreError::from(parse);
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
