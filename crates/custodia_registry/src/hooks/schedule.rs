//! Hook markers for registry lifecycle events.
//!
//! These marker types identify which registry event an observer listens to.
//! Use them with [`HookId::of::<T>()`] or with the type-safe registration
//! method [`register_observer::<OnResourceAdded>`](super::RegistryHooks::register_observer).
//!
//! Event data is delivered through the unified
//! [`RegistryEvent`](super::events::RegistryEvent) enum, which all observers
//! receive.

use core::any::TypeId;
use variadics_please::all_tuples;

// ─────────────────────────────────────────────────────────────────────────────
// HookId
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier for a registry hook, derived from a marker type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId {
    type_id: TypeId,
    type_name: &'static str,
}

impl HookId {
    /// Creates a `HookId` for the given marker type.
    #[must_use]
    pub fn of<H: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<H>(),
            type_name: core::any::type_name::<H>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name for debugging.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Marker trait for registry hook types.
pub trait RegistryHook: 'static {}

/// Types that can be converted into a list of hook ids.
///
/// Implemented for single hooks and tuples of hooks so one observer can be
/// registered on several events at once.
pub trait IntoHookIds {
    /// Returns the hook ids for this type.
    fn hook_ids() -> Vec<HookId>;
}

impl<H: RegistryHook> IntoHookIds for H {
    fn hook_ids() -> Vec<HookId> {
        vec![HookId::of::<H>()]
    }
}

macro_rules! impl_into_hook_ids_for_tuple {
    ($($H:ident),*) => {
        impl<$($H: RegistryHook),*> IntoHookIds for ($($H,)*) {
            fn hook_ids() -> Vec<HookId> {
                vec![$(HookId::of::<$H>()),*]
            }
        }
    };
}

all_tuples!(impl_into_hook_ids_for_tuple, 2, 16, H);

// ─────────────────────────────────────────────────────────────────────────────
// Resource Hooks
// ─────────────────────────────────────────────────────────────────────────────

/// Fired after a resource is inserted, before any auto-initialization.
///
/// Event data: [`RegistryEvent::ResourceAdded`](super::events::RegistryEvent::ResourceAdded)
pub struct OnResourceAdded;
impl RegistryHook for OnResourceAdded {}

/// Fired after a resource is detached and removed from the map.
///
/// Event data: [`RegistryEvent::ResourceRemoved`](super::events::RegistryEvent::ResourceRemoved)
pub struct OnResourceRemoved;
impl RegistryHook for OnResourceRemoved {}

/// Fired when a member resource reports a successful initialize.
///
/// Event data: [`RegistryEvent::ResourceInitialized`](super::events::RegistryEvent::ResourceInitialized)
pub struct OnResourceInitialized;
impl RegistryHook for OnResourceInitialized {}

/// Fired when a member resource reports a successful uninitialize.
///
/// Event data: [`RegistryEvent::ResourceUninitialized`](super::events::RegistryEvent::ResourceUninitialized)
pub struct OnResourceUninitialized;
impl RegistryHook for OnResourceUninitialized {}

/// Fired when a member resource disposes itself.
///
/// The resource has already left the registry when observers run.
///
/// Event data: [`RegistryEvent::ResourceDisposed`](super::events::RegistryEvent::ResourceDisposed)
pub struct OnResourceDisposed;
impl RegistryHook for OnResourceDisposed {}

// ─────────────────────────────────────────────────────────────────────────────
// Registry Hooks
// ─────────────────────────────────────────────────────────────────────────────

/// Fired at the start of registry teardown. Members are still queryable.
///
/// Event data: [`RegistryEvent::Disposing`](super::events::RegistryEvent::Disposing)
pub struct OnRegistryDisposing;
impl RegistryHook for OnRegistryDisposing {}

/// Fired once teardown has disposed every member and cleared the map.
///
/// Event data: [`RegistryEvent::Disposed`](super::events::RegistryEvent::Disposed)
pub struct OnRegistryDisposed;
impl RegistryHook for OnRegistryDisposed {}

/// All seven registry hooks, for observers that want every event.
pub type AllRegistryHooks = (
    OnResourceAdded,
    OnResourceRemoved,
    OnResourceInitialized,
    OnResourceUninitialized,
    OnResourceDisposed,
    OnRegistryDisposing,
    OnRegistryDisposed,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_id_equality() {
        assert_eq!(HookId::of::<OnResourceAdded>(), HookId::of::<OnResourceAdded>());
        assert_ne!(
            HookId::of::<OnResourceAdded>(),
            HookId::of::<OnResourceRemoved>()
        );
    }

    #[test]
    fn hook_id_type_name() {
        let id = HookId::of::<OnResourceDisposed>();
        assert!(id.type_name().ends_with("OnResourceDisposed"));
        assert_eq!(id.type_id(), TypeId::of::<OnResourceDisposed>());
    }

    #[test]
    fn into_hook_ids_tuple_preserves_order() {
        let ids = <(OnRegistryDisposing, OnRegistryDisposed)>::hook_ids();
        assert_eq!(
            ids,
            vec![
                HookId::of::<OnRegistryDisposing>(),
                HookId::of::<OnRegistryDisposed>()
            ]
        );
    }

    #[test]
    fn all_registry_hooks_covers_every_event() {
        assert_eq!(AllRegistryHooks::hook_ids().len(), 7);
    }
}
