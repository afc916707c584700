//! An identity-keyed registry for platform resources with observable lifecycles.
//!
//! - [`custodia_registry`] - Resource contract, registry, and observer hooks
//! - [`custodia_core`] - Tracing configuration

pub use custodia_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use custodia_internal::prelude::*;
}
