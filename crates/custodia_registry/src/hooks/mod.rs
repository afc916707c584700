//! Lifecycle hooks for registry observers.
//!
//! External code observes a [`ResourceRegistry`](crate::ResourceRegistry)
//! through named observers attached to hook markers. Delivery is synchronous:
//! every observer runs on the stack of the registry operation that raised the
//! event, before that operation returns.
//!
//! # Architecture
//!
//! - **Hook markers** ([`schedule`]): Empty types that identify events
//! - **Events** ([`events`]): `RegistryEvent` enum carrying the payload
//! - **API** ([`api`]): Registration and invocation mechanism
//!
//! # Example
//!
//! ```ignore
//! use custodia_registry::hooks::{OnResourceAdded, OnResourceDisposed, RegistryEvent};
//!
//! registry.hooks().register_observer::<OnResourceAdded, _>("logger", |event| {
//!     if let RegistryEvent::ResourceAdded { resource } = event {
//!         tracing::info!(id = resource.id(), "resource added");
//!     }
//! })?;
//!
//! registry.hooks().register_observer::<OnResourceDisposed, _>("gc", |event| {
//!     if let Some(resource) = event.resource() {
//!         tracing::info!(id = resource.id(), "resource released");
//!     }
//! })?;
//! ```

pub mod api;
pub mod events;
pub mod schedule;

pub use api::{HookRegistrationError, Observer, RegistryHooks};
pub use events::RegistryEvent;
pub use schedule::{
    AllRegistryHooks, HookId, IntoHookIds, OnRegistryDisposed, OnRegistryDisposing,
    OnResourceAdded, OnResourceDisposed, OnResourceInitialized, OnResourceRemoved,
    OnResourceUninitialized, RegistryHook,
};
