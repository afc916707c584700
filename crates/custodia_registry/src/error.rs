//! Error types for the registry and the resources it manages.

/// Errors raised by a resource's own lifecycle operations.
///
/// The registry never inspects or translates these. They surface to the caller
/// of the registry operation that triggered them, wrapped in
/// [`RegistryError::Lifecycle`] together with the resource id.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// The resource failed to initialize.
    #[error("initialize failed: {0}")]
    Initialize(String),

    /// The resource failed to uninitialize.
    #[error("uninitialize failed: {0}")]
    Uninitialize(String),

    /// The resource failed to release its platform handles.
    #[error("dispose failed: {0}")]
    Dispose(String),

    /// The resource was already disposed.
    #[error("resource already disposed")]
    AlreadyDisposed,

    /// An error from the underlying platform.
    #[error(transparent)]
    Platform(#[from] Box<dyn core::error::Error + Send + Sync>),
}

impl LifecycleError {
    /// Creates an [`Initialize`](Self::Initialize) error.
    pub fn initialize(msg: impl Into<String>) -> Self {
        Self::Initialize(msg.into())
    }

    /// Creates an [`Uninitialize`](Self::Uninitialize) error.
    pub fn uninitialize(msg: impl Into<String>) -> Self {
        Self::Uninitialize(msg.into())
    }

    /// Creates a [`Dispose`](Self::Dispose) error.
    pub fn dispose(msg: impl Into<String>) -> Self {
        Self::Dispose(msg.into())
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A resource was added with an empty id.
    #[error("resource id must not be empty")]
    EmptyIdentity,

    /// A resource with the same id is already registered.
    #[error("resource '{0}' is already registered")]
    DuplicateIdentity(String),

    /// The resource's lifecycle signals are already connected to another registry.
    #[error("resource '{0}' is already attached to a registry")]
    AlreadyAttached(String),

    /// No resource is registered under the id.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The registry has been disposed and no longer accepts resources.
    #[error("registry has been disposed")]
    Disposed,

    /// A resource's own lifecycle operation failed.
    #[error("resource '{id}' lifecycle operation failed: {source}")]
    Lifecycle {
        /// Id of the failing resource.
        id: String,
        /// The error reported by the resource.
        #[source]
        source: LifecycleError,
    },

    /// One or more resources failed to dispose during registry teardown.
    #[error("{} resource(s) failed to dispose during teardown", failures.len())]
    Teardown {
        /// `(id, error)` pairs for every resource whose dispose failed.
        failures: Vec<(String, LifecycleError)>,
    },
}

impl RegistryError {
    /// Creates a [`NotFound`](Self::NotFound) error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Creates a [`Lifecycle`](Self::Lifecycle) error.
    pub fn lifecycle(id: impl Into<String>, source: LifecycleError) -> Self {
        Self::Lifecycle {
            id: id.into(),
            source,
        }
    }
}

/// Errors raised when connecting a [`Signal`](crate::resource::Signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The signal already has a subscriber.
    #[error("signal already has a subscriber")]
    AlreadyConnected,
}

/// Errors raised while loading a [`RegistryConfig`](crate::config::RegistryConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration could not be parsed.
    #[error("invalid registry config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_error_is_wrapped_with_id() {
        let err = RegistryError::lifecycle("mesh", LifecycleError::initialize("no device"));
        assert_eq!(
            err.to_string(),
            "resource 'mesh' lifecycle operation failed: initialize failed: no device"
        );
        assert!(core::error::Error::source(&err).is_some());
    }

    #[test]
    fn teardown_error_counts_failures() {
        let err = RegistryError::Teardown {
            failures: vec![
                ("a".into(), LifecycleError::dispose("busy")),
                ("b".into(), LifecycleError::AlreadyDisposed),
            ],
        };
        assert_eq!(
            err.to_string(),
            "2 resource(s) failed to dispose during teardown"
        );
    }

    #[test]
    fn platform_errors_convert() {
        let platform: Box<dyn core::error::Error + Send + Sync> = "device lost".into();
        let err = LifecycleError::from(platform);
        assert_eq!(err.to_string(), "device lost");
    }
}
