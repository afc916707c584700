//! # Custodia Internal Library
//!
//! Re-exports the core Custodia crates for convenience.

/// Logging and shared infrastructure.
pub use custodia_core;

/// The identity-keyed resource registry.
pub use custodia_registry;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use custodia_core::{LogLevel, TracingConfig, TracingFormat};
    pub use custodia_registry::prelude::*;
}
