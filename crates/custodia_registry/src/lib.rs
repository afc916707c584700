//! Identity-keyed resource registry for Custodia.
//!
//! `custodia_registry` manages the lifecycle of arbitrary platform resources:
//!
//! - [`resource`] - The [`Resource`] capability contract and its lifecycle signals
//! - [`registry`] - [`ResourceRegistry`], the owning container
//! - [`hooks`] - Observer API for registry events
//! - [`config`] - [`RegistryConfig`]
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use core::sync::atomic::{AtomicBool, Ordering};
//! use custodia_registry::error::LifecycleError;
//! use custodia_registry::hooks::{OnResourceDisposed, RegistryEvent};
//! use custodia_registry::resource::{LifecycleSignals, Resource};
//! use custodia_registry::ResourceRegistry;
//!
//! #[derive(Default)]
//! struct Buffer {
//!     id: String,
//!     live: AtomicBool,
//!     signals: LifecycleSignals,
//! }
//!
//! impl Resource for Buffer {
//!     fn id(&self) -> &str { &self.id }
//!     fn is_initialized(&self) -> bool { self.live.load(Ordering::Acquire) }
//!     fn initialize(&self) -> Result<(), LifecycleError> {
//!         self.live.store(true, Ordering::Release);
//!         self.signals.emit_initialized(self);
//!         Ok(())
//!     }
//!     fn uninitialize(&self) -> Result<(), LifecycleError> {
//!         self.live.store(false, Ordering::Release);
//!         self.signals.emit_uninitialized(self);
//!         Ok(())
//!     }
//!     fn dispose(&self) -> Result<(), LifecycleError> {
//!         self.live.store(false, Ordering::Release);
//!         self.signals.emit_disposed(self);
//!         Ok(())
//!     }
//!     fn signals(&self) -> &LifecycleSignals { &self.signals }
//! }
//!
//! let registry = ResourceRegistry::<Buffer>::new();
//! registry
//!     .hooks()
//!     .register_observer::<OnResourceDisposed, _>("log", |event| {
//!         if let RegistryEvent::ResourceDisposed { resource } = event {
//!             println!("released {}", resource.id());
//!         }
//!     })
//!     .unwrap();
//!
//! let vertices = registry
//!     .add(Buffer { id: "vertices".into(), ..Default::default() }, true)
//!     .unwrap();
//! assert!(vertices.is_initialized());
//!
//! vertices.dispose().unwrap();
//! assert!(!registry.exists("vertices"));
//! ```

/// Registry configuration.
pub mod config;

/// Error types.
pub mod error;

/// Observer API for registry events.
pub mod hooks;

/// The resource registry.
pub mod registry;

/// Resource capability contract and lifecycle signals.
pub mod resource;

pub use config::RegistryConfig;
pub use error::{ConfigError, LifecycleError, RegistryError, SignalError};
pub use registry::ResourceRegistry;
pub use resource::{LifecycleSignals, Resource, Signal};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::hooks::*;
    pub use crate::registry::*;
    pub use crate::resource::*;
}
