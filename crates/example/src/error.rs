//! Errors surfaced by the demo.

use std::path::PathBuf;

use custodia_registry::error::{LifecycleError, RegistryError};
use custodia_registry::hooks::HookRegistrationError;
use thiserror::Error;

/// Errors returned by [`run`](crate::run) and [`DemoConfig::load`](crate::DemoConfig::load).
#[derive(Debug, Error)]
pub enum DemoError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`DemoConfig`](crate::DemoConfig).
    #[error("invalid demo configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The demo needs more textures than were configured.
    #[error("the demo needs at least {needed} textures, found {found}")]
    TooFewTextures {
        /// Minimum number of textures.
        needed: usize,
        /// Number configured.
        found: usize,
    },
    /// A registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// A texture operation called outside the registry failed.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    /// An observer could not be registered.
    #[error(transparent)]
    Hook(#[from] HookRegistrationError),
    /// Handles were still live after everything was disposed.
    #[error("leaked handles: {0:?}")]
    Leak(Vec<u64>),
}
