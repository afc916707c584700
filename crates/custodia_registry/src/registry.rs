//! The identity-keyed resource registry.
//!
//! [`ResourceRegistry`] owns a set of resources keyed by their ids, drives
//! their lifecycle on request, and mirrors every lifecycle transition to
//! external observers through [`RegistryHooks`].
//!
//! # Lifecycle
//!
//! From the registry's point of view a resource moves through
//! `Added → (Initialized ⇄ Uninitialized)* → Removed | Disposed`:
//!
//! - [`add`](ResourceRegistry::add) connects the registry's relays to the
//!   resource's [`LifecycleSignals`](crate::resource::LifecycleSignals) and
//!   inserts it.
//! - While it is a member, every signal the resource fires is re-raised as a
//!   [`RegistryEvent`].
//! - [`remove`](ResourceRegistry::remove) disconnects the relays and hands the
//!   resource back to the caller without disposing it.
//! - A resource that disposes itself, by any path, leaves the registry before
//!   [`OnResourceDisposed`] observers run.
//!
//! # Re-entrancy
//!
//! No internal lock is held while a resource operation or an observer runs,
//! so both may call back into the registry. Each individual operation is
//! atomic with respect to the map; sequences of operations are not.
//!
//! # Example
//!
//! ```ignore
//! use custodia_registry::ResourceRegistry;
//!
//! let registry = ResourceRegistry::<Texture>::new();
//! let albedo = registry.add(Texture::new("albedo"), true)?;
//! assert!(albedo.is_initialized());
//!
//! // Cascading disposal: disposing the resource directly removes it.
//! albedo.dispose()?;
//! assert!(!registry.exists("albedo"));
//! ```

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, SignalError};
use crate::hooks::{
    AllRegistryHooks, HookId, OnRegistryDisposed, OnRegistryDisposing, OnResourceAdded,
    OnResourceDisposed, OnResourceInitialized, OnResourceRemoved, OnResourceUninitialized,
    RegistryEvent, RegistryHook, RegistryHooks,
};
use crate::resource::Resource;

/// Observer name used when [`RegistryConfig::trace_events`] is enabled.
pub const TRACE_OBSERVER: &str = "custodia::trace";

/// Shared state behind every handle of one registry.
struct RegistryInner<T: Resource> {
    resources: RwLock<HashMap<String, Arc<T>>>,
    hooks: RegistryHooks<T>,
    config: RegistryConfig,
    disposed: AtomicBool,
}

impl<T: Resource> RegistryInner<T> {
    fn raise<H: RegistryHook>(&self, event: RegistryEvent<T>) {
        self.hooks.invoke(HookId::of::<H>(), &event);
    }

    /// Maps a signal payload back to the registered `Arc<T>` with the same
    /// identity and address.
    fn narrow(&self, payload: &dyn Resource) -> Option<Arc<T>> {
        let resources = self.resources.read();
        match resources.get(payload.id()) {
            Some(member) if is_same_instance(member, payload) => Some(Arc::clone(member)),
            _ => {
                tracing::warn!(
                    id = payload.id(),
                    "ignoring lifecycle signal from a resource that is not a member"
                );
                None
            }
        }
    }

    fn on_resource_initialized(&self, payload: &dyn Resource) {
        if let Some(resource) = self.narrow(payload) {
            tracing::debug!(id = resource.id(), "resource initialized");
            self.raise::<OnResourceInitialized>(RegistryEvent::ResourceInitialized { resource });
        }
    }

    fn on_resource_uninitialized(&self, payload: &dyn Resource) {
        if let Some(resource) = self.narrow(payload) {
            tracing::debug!(id = resource.id(), "resource uninitialized");
            self.raise::<OnResourceUninitialized>(RegistryEvent::ResourceUninitialized {
                resource,
            });
        }
    }

    /// Removes the disposed resource before anyone hears about it.
    fn on_resource_disposed(&self, payload: &dyn Resource) {
        let removed = {
            let mut resources = self.resources.write();
            let is_member = resources
                .get(payload.id())
                .is_some_and(|member| is_same_instance(member, payload));
            if is_member {
                resources.remove(payload.id())
            } else {
                None
            }
        };

        let Some(resource) = removed else {
            tracing::warn!(
                id = payload.id(),
                "ignoring dispose signal from a resource that is not a member"
            );
            return;
        };

        resource.signals().disconnect_all();
        tracing::debug!(id = resource.id(), "resource disposed and removed");
        self.raise::<OnResourceDisposed>(RegistryEvent::ResourceDisposed { resource });
    }
}

impl<T: Resource> Drop for RegistryInner<T> {
    /// Detaches members left behind when the last handle goes away without
    /// [`dispose`](ResourceRegistry::dispose), so they can join another registry.
    fn drop(&mut self) {
        for (_, resource) in self.resources.get_mut().drain() {
            resource.signals().disconnect_all();
        }
    }
}

fn is_same_instance<T: Resource>(member: &Arc<T>, payload: &dyn Resource) -> bool {
    core::ptr::addr_eq(Arc::as_ptr(member), core::ptr::from_ref(payload))
}

// ─────────────────────────────────────────────────────────────────────────────
// ResourceRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Identity-keyed container that owns resources and relays their lifecycle.
///
/// `ResourceRegistry` is a handle: cloning it is cheap and every clone refers
/// to the same registry. Resource relays only hold a weak reference, so
/// members never keep their registry alive.
///
/// # Invariants
///
/// - Ids are unique; each id maps to exactly one resource whose own
///   [`id`](Resource::id) equals the key.
/// - A resource's signals are connected to this registry if and only if it is
///   a member.
/// - A resource that fires its disposed signal is removed immediately, before
///   [`OnResourceDisposed`] observers run.
pub struct ResourceRegistry<T: Resource> {
    inner: Arc<RegistryInner<T>>,
}

impl<T: Resource> Clone for ResourceRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Resource> Default for ResourceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> fmt::Debug for ResourceRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("resources", &self.ids())
            .field("config", &self.inner.config)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl<T: Resource> ResourceRegistry<T> {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let registry = Self {
            inner: Arc::new(RegistryInner {
                resources: RwLock::new(HashMap::new()),
                hooks: RegistryHooks::new(),
                config,
                disposed: AtomicBool::new(false),
            }),
        };

        if config.trace_events {
            // The hook list is empty, so the name cannot collide.
            let _ = registry
                .inner
                .hooks
                .register_observer::<AllRegistryHooks, _>(TRACE_OBSERVER, |event| {
                    tracing::debug!(event = %event, "registry event");
                });
        }

        registry
    }

    /// Returns the configuration this registry was created with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Returns the observer API for this registry's events.
    #[must_use]
    pub fn hooks(&self) -> &RegistryHooks<T> {
        &self.inner.hooks
    }

    /// Adds a resource, optionally initializing it.
    ///
    /// The resource is inserted and [`OnResourceAdded`] observers run before
    /// initialization, so a successful initialize is seen as an
    /// [`OnResourceInitialized`] event that follows the add.
    ///
    /// Returns the stored handle.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Disposed`] if the registry was disposed.
    /// - [`RegistryError::EmptyIdentity`] if the id is empty.
    /// - [`RegistryError::DuplicateIdentity`] if the id is taken.
    /// - [`RegistryError::AlreadyAttached`] if the resource belongs to another
    ///   registry.
    ///
    /// None of the above mutate the registry. A failing initialize is reported
    /// as [`RegistryError::Lifecycle`] and leaves the resource registered.
    pub fn add(
        &self,
        resource: impl Into<Arc<T>>,
        initialize: bool,
    ) -> Result<Arc<T>, RegistryError> {
        let resource = resource.into();

        if self.is_disposed() {
            return Err(RegistryError::Disposed);
        }
        let id = resource.id();
        if id.is_empty() {
            return Err(RegistryError::EmptyIdentity);
        }

        {
            let mut resources = self.inner.resources.write();
            // `dispose` sets the flag under this lock.
            if self.is_disposed() {
                return Err(RegistryError::Disposed);
            }
            if resources.contains_key(id) {
                return Err(RegistryError::DuplicateIdentity(id.to_owned()));
            }
            if self.attach(&resource).is_err() {
                return Err(RegistryError::AlreadyAttached(id.to_owned()));
            }
            resources.insert(id.to_owned(), Arc::clone(&resource));
        }

        tracing::debug!(id, initialize, "resource added");
        self.inner.raise::<OnResourceAdded>(RegistryEvent::ResourceAdded {
            resource: Arc::clone(&resource),
        });

        if initialize {
            resource
                .initialize()
                .map_err(|source| RegistryError::lifecycle(id, source))?;
        }

        Ok(resource)
    }

    /// Adds a resource, initializing it if
    /// [`RegistryConfig::initialize_on_add`] is set.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_default(&self, resource: impl Into<Arc<T>>) -> Result<Arc<T>, RegistryError> {
        self.add(resource, self.inner.config.initialize_on_add)
    }

    /// Connects the three relays, rolling back on failure.
    fn attach(&self, resource: &Arc<T>) -> Result<(), SignalError> {
        let signals = resource.signals();

        let weak = Arc::downgrade(&self.inner);
        signals.initialized().connect(relay(weak, |inner, payload| {
            inner.on_resource_initialized(payload);
        }))?;

        let weak = Arc::downgrade(&self.inner);
        if let Err(err) = signals.uninitialized().connect(relay(weak, |inner, payload| {
            inner.on_resource_uninitialized(payload);
        })) {
            signals.initialized().disconnect();
            return Err(err);
        }

        let weak = Arc::downgrade(&self.inner);
        if let Err(err) = signals.disposed().connect(relay(weak, |inner, payload| {
            inner.on_resource_disposed(payload);
        })) {
            signals.initialized().disconnect();
            signals.uninitialized().disconnect();
            return Err(err);
        }

        Ok(())
    }

    /// Returns the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such resource exists.
    pub fn get(&self, id: &str) -> Result<Arc<T>, RegistryError> {
        self.find(id).ok_or_else(|| RegistryError::not_found(id))
    }

    /// Returns the resource registered under `id`, if any.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Arc<T>> {
        self.inner.resources.read().get(id).cloned()
    }

    /// Removes a resource and hands it back without disposing it.
    ///
    /// Returns `None`, and raises nothing, if `id` is unknown.
    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        let resource = self.inner.resources.write().remove(id)?;
        resource.signals().disconnect_all();

        tracing::debug!(id, "resource removed");
        self.inner.raise::<OnResourceRemoved>(RegistryEvent::ResourceRemoved {
            resource: Arc::clone(&resource),
        });
        Some(resource)
    }

    /// Removes a resource and disposes it.
    ///
    /// Returns `Ok(false)` if `id` is unknown. Because the resource is detached
    /// before disposal, no [`OnResourceDisposed`] event is raised.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Lifecycle`] if the resource's dispose fails.
    /// The resource is no longer registered in that case.
    pub fn remove_and_dispose(&self, id: &str) -> Result<bool, RegistryError> {
        let Some(resource) = self.remove(id) else {
            return Ok(false);
        };
        resource
            .dispose()
            .map_err(|source| RegistryError::lifecycle(id, source))?;
        Ok(true)
    }

    /// Initializes the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown id, or
    /// [`RegistryError::Lifecycle`] if the resource fails.
    pub fn initialize(&self, id: &str) -> Result<(), RegistryError> {
        self.get(id)?
            .initialize()
            .map_err(|source| RegistryError::lifecycle(id, source))
    }

    /// Uninitializes the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown id, or
    /// [`RegistryError::Lifecycle`] if the resource fails.
    pub fn uninitialize(&self, id: &str) -> Result<(), RegistryError> {
        self.get(id)?
            .uninitialize()
            .map_err(|source| RegistryError::lifecycle(id, source))
    }

    /// Initializes every member that is not initialized yet.
    ///
    /// Works on a snapshot; members removed by an observer in the meantime
    /// are skipped. Returns how many resources were initialized.
    ///
    /// # Errors
    ///
    /// Stops at the first [`RegistryError::Lifecycle`] failure.
    pub fn initialize_all(&self) -> Result<usize, RegistryError> {
        let mut count = 0;
        for resource in self.resources() {
            if resource.is_initialized() || !self.is_member(&resource) {
                continue;
            }
            resource
                .initialize()
                .map_err(|source| RegistryError::lifecycle(resource.id(), source))?;
            count += 1;
        }
        Ok(count)
    }

    /// Uninitializes every initialized member.
    ///
    /// Same snapshot semantics as [`initialize_all`](Self::initialize_all).
    ///
    /// # Errors
    ///
    /// Stops at the first [`RegistryError::Lifecycle`] failure.
    pub fn uninitialize_all(&self) -> Result<usize, RegistryError> {
        let mut count = 0;
        for resource in self.resources() {
            if !resource.is_initialized() || !self.is_member(&resource) {
                continue;
            }
            resource
                .uninitialize()
                .map_err(|source| RegistryError::lifecycle(resource.id(), source))?;
            count += 1;
        }
        Ok(count)
    }

    /// Returns whether a resource is registered under `id`.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.inner.resources.read().contains_key(id)
    }

    /// Returns whether the resource registered under `id` is initialized.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown id.
    pub fn is_initialized(&self, id: &str) -> Result<bool, RegistryError> {
        Ok(self.get(id)?.is_initialized())
    }

    /// Returns the number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.resources.read().len()
    }

    /// Returns `true` if no resources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.resources.read().is_empty()
    }

    /// Returns the ids of all registered resources, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.inner.resources.read().keys().cloned().collect()
    }

    /// Returns handles to all registered resources, in no particular order.
    #[must_use]
    pub fn resources(&self) -> Vec<Arc<T>> {
        self.inner.resources.read().values().cloned().collect()
    }

    /// Iterates over the registered resources.
    ///
    /// The iterator walks a snapshot taken when it is created, so the
    /// registry may be mutated while iterating. Call again to restart.
    #[must_use]
    pub fn iter(&self) -> std::vec::IntoIter<Arc<T>> {
        self.resources().into_iter()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Tears the registry down.
    ///
    /// 1. Raises [`OnRegistryDisposing`]; members are still queryable.
    /// 2. Disposes each member of a snapshot that is still registered when
    ///    its turn comes. Each dispose removes its resource and raises
    ///    [`OnResourceDisposed`].
    /// 3. Detaches anything left in the map, which is every member whose
    ///    dispose failed, and raises [`OnResourceRemoved`] for each.
    /// 4. Raises [`OnRegistryDisposed`].
    ///
    /// Later calls are no-ops that raise nothing. Once disposed, the registry
    /// refuses new resources, including adds racing with this call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Teardown`] if any resource failed to dispose.
    /// All steps above still run to completion.
    pub fn dispose(&self) -> Result<(), RegistryError> {
        let already_disposed = {
            let _resources = self.inner.resources.write();
            self.inner.disposed.swap(true, Ordering::AcqRel)
        };
        if already_disposed {
            tracing::debug!("registry already disposed");
            return Ok(());
        }

        let snapshot = self.resources();
        tracing::info!(resources = snapshot.len(), "disposing registry");
        self.inner.raise::<OnRegistryDisposing>(RegistryEvent::Disposing {
            resource_count: snapshot.len(),
        });

        let mut disposed_count = 0;
        let mut failures = Vec::new();
        for resource in snapshot {
            if !self.is_member(&resource) {
                continue;
            }
            match resource.dispose() {
                Ok(()) => disposed_count += 1,
                Err(source) => {
                    tracing::warn!(
                        id = resource.id(),
                        error = %source,
                        "resource failed to dispose"
                    );
                    failures.push((resource.id().to_owned(), source));
                }
            }
        }

        let leftovers: Vec<Arc<T>> = self
            .inner
            .resources
            .write()
            .drain()
            .map(|(_, resource)| resource)
            .collect();
        for resource in leftovers {
            resource.signals().disconnect_all();
            tracing::debug!(id = resource.id(), "resource dropped from disposed registry");
            self.inner.raise::<OnResourceRemoved>(RegistryEvent::ResourceRemoved { resource });
        }

        self.inner
            .raise::<OnRegistryDisposed>(RegistryEvent::Disposed { disposed_count });
        tracing::info!(
            disposed = disposed_count,
            failed = failures.len(),
            "registry disposed"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Teardown { failures })
        }
    }

    fn is_member(&self, resource: &Arc<T>) -> bool {
        self.inner
            .resources
            .read()
            .get(resource.id())
            .is_some_and(|member| Arc::ptr_eq(member, resource))
    }
}

impl<T: Resource> IntoIterator for &ResourceRegistry<T> {
    type Item = Arc<T>;
    type IntoIter = std::vec::IntoIter<Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a signal handler that forwards to the registry while it is alive.
fn relay<T: Resource>(
    weak: Weak<RegistryInner<T>>,
    forward: fn(&RegistryInner<T>, &dyn Resource),
) -> impl Fn(&dyn Resource) + Send + Sync + 'static {
    move |payload| {
        if let Some(inner) = weak.upgrade() {
            forward(&inner, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifecycleError;
    use crate::resource::LifecycleSignals;
    use parking_lot::Mutex;

    #[derive(Debug, Default)]
    struct Slot {
        id: String,
        initialized: AtomicBool,
        disposed: AtomicBool,
        signals: LifecycleSignals,
    }

    impl Slot {
        fn new(id: &str) -> Self {
            Self {
                id: id.to_owned(),
                ..Self::default()
            }
        }
    }

    impl Resource for Slot {
        fn id(&self) -> &str {
            &self.id
        }

        fn is_initialized(&self) -> bool {
            self.initialized.load(Ordering::Acquire)
        }

        fn initialize(&self) -> Result<(), LifecycleError> {
            self.initialized.store(true, Ordering::Release);
            self.signals.emit_initialized(self);
            Ok(())
        }

        fn uninitialize(&self) -> Result<(), LifecycleError> {
            self.initialized.store(false, Ordering::Release);
            self.signals.emit_uninitialized(self);
            Ok(())
        }

        fn dispose(&self) -> Result<(), LifecycleError> {
            if self.disposed.swap(true, Ordering::AcqRel) {
                return Err(LifecycleError::AlreadyDisposed);
            }
            self.signals.emit_disposed(self);
            Ok(())
        }

        fn signals(&self) -> &LifecycleSignals {
            &self.signals
        }
    }

    #[test]
    fn add_connects_relays_and_remove_disconnects_them() {
        let registry = ResourceRegistry::<Slot>::new();
        let slot = registry.add(Slot::new("a"), false).unwrap();
        assert!(slot.signals().initialized().is_connected());
        assert!(slot.signals().uninitialized().is_connected());
        assert!(slot.signals().disposed().is_connected());

        let removed = registry.remove("a").unwrap();
        assert!(Arc::ptr_eq(&slot, &removed));
        assert!(!slot.signals().is_attached());
    }

    #[test]
    fn attached_resource_cannot_join_second_registry() {
        let first = ResourceRegistry::<Slot>::new();
        let second = ResourceRegistry::<Slot>::new();
        let slot = first.add(Slot::new("shared"), false).unwrap();

        let err = second.add(Arc::clone(&slot), false).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyAttached(id) if id == "shared"));
        assert!(!second.exists("shared"));
        assert!(first.exists("shared"), "first registry must keep its relays");
        assert!(slot.signals().disposed().is_connected());
    }

    #[test]
    fn attach_rolls_back_partial_connection() {
        let registry = ResourceRegistry::<Slot>::new();
        let slot = Arc::new(Slot::new("partial"));
        slot.signals().disposed().connect(|_| {}).unwrap();

        assert!(matches!(
            registry.add(Arc::clone(&slot), false),
            Err(RegistryError::AlreadyAttached(_))
        ));
        assert!(!slot.signals().initialized().is_connected());
        assert!(!slot.signals().uninitialized().is_connected());
    }

    #[test]
    fn signal_from_impostor_is_ignored() {
        let registry = ResourceRegistry::<Slot>::new();
        let member = registry.add(Slot::new("twin"), false).unwrap();
        let impostor = Slot::new("twin");

        let events = Arc::new(Mutex::new(0));
        let events_clone = Arc::clone(&events);
        registry
            .hooks()
            .register_observer::<OnResourceDisposed, _>("count", move |_| {
                *events_clone.lock() += 1;
            })
            .unwrap();

        registry.inner.on_resource_disposed(&impostor);
        assert!(registry.exists("twin"));
        assert_eq!(*events.lock(), 0);

        member.dispose().unwrap();
        assert!(!registry.exists("twin"));
        assert_eq!(*events.lock(), 1);
    }

    #[test]
    fn dropped_registry_leaves_resources_usable() {
        let registry = ResourceRegistry::<Slot>::new();
        let slot = registry.add(Slot::new("orphan"), false).unwrap();
        drop(registry);

        assert!(!slot.signals().is_attached());
        slot.initialize().unwrap();
        assert!(slot.is_initialized());
    }

    #[test]
    fn orphan_of_dropped_registry_can_join_another() {
        let first = ResourceRegistry::<Slot>::new();
        let slot = first.add(Slot::new("tex"), false).unwrap();
        drop(first);

        let second = ResourceRegistry::<Slot>::new();
        let readded = second.add(Arc::clone(&slot), false).unwrap();
        assert!(Arc::ptr_eq(&slot, &readded));

        slot.dispose().unwrap();
        assert!(!second.exists("tex"));
    }

    #[test]
    fn registry_outlives_dropped_clone() {
        let registry = ResourceRegistry::<Slot>::new();
        let slot = registry.add(Slot::new("kept"), false).unwrap();
        drop(registry.clone());

        assert!(slot.signals().is_attached());
        assert!(registry.exists("kept"));
    }

    #[test]
    fn trace_events_registers_internal_observer() {
        let registry =
            ResourceRegistry::<Slot>::with_config(RegistryConfig::new().with_trace_events(true));
        let hook = HookId::of::<OnResourceAdded>();
        assert!(
            registry
                .hooks()
                .contains_observer(hook, &format!("{TRACE_OBSERVER}@{}", hook.type_name()))
        );
    }

    #[test]
    fn clones_share_state() {
        let registry = ResourceRegistry::<Slot>::new();
        let clone = registry.clone();
        registry.add(Slot::new("x"), false).unwrap();
        assert!(clone.exists("x"));
        assert_eq!(clone.len(), 1);
    }
}
