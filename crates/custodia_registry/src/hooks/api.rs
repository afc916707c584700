//! Observer registration API for registry events.
//!
//! The [`RegistryHooks`] holds, per hook, an ordered list of named observers.
//! The name is the subscriber token: it must be unique on its hook and is
//! what [`remove_observer`](RegistryHooks::remove_observer) takes.
//!
//! # Multi-Hook Registration
//!
//! Register one observer on several hooks using tuple syntax:
//!
//! ```ignore
//! hooks.register_observer::<(OnResourceAdded, OnResourceRemoved), _>(
//!     "membership",
//!     |event: &RegistryEvent<Texture>| match event {
//!         RegistryEvent::ResourceAdded { resource } => println!("+ {}", resource.id()),
//!         RegistryEvent::ResourceRemoved { resource } => println!("- {}", resource.id()),
//!         _ => {}
//!     },
//! )?;
//! ```
//!
//! # Re-entrancy
//!
//! [`invoke`](RegistryHooks::invoke) copies the observer list and releases the
//! lock before calling anything. Observers may therefore register or remove
//! observers, or call back into the registry, while an event is being raised.
//! Such changes take effect from the next raise.

use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use super::events::RegistryEvent;
use super::schedule::{HookId, IntoHookIds};

/// Shared observer callback.
pub type Observer<T> = Arc<dyn Fn(&RegistryEvent<T>) + Send + Sync>;

// ─────────────────────────────────────────────────────────────────────────────
// HookRegistrationError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during observer registration.
#[derive(Debug, Clone)]
pub enum HookRegistrationError {
    /// An observer with this name already exists on the hook.
    DuplicateName {
        /// The hook where the duplicate was found.
        hook: HookId,
        /// The duplicate observer name.
        name: String,
    },
}

impl fmt::Display for HookRegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookRegistrationError::DuplicateName { hook, name } => {
                write!(
                    f,
                    "observer '{}' already registered for hook '{}'",
                    name,
                    hook.type_name()
                )
            }
        }
    }
}

impl core::error::Error for HookRegistrationError {}

/// Entry in the observer list.
struct ObserverEntry<T> {
    /// Subscriber token.
    name: String,
    observer: Observer<T>,
}

// ─────────────────────────────────────────────────────────────────────────────
// RegistryHooks
// ─────────────────────────────────────────────────────────────────────────────

/// Observer lists for the seven registry events.
///
/// # Thread Safety
///
/// Lists live behind a [`RwLock`]; the lock is never held while an observer
/// runs.
pub struct RegistryHooks<T> {
    observers: RwLock<HashMap<HookId, Vec<ObserverEntry<T>>>>,
}

impl<T> Default for RegistryHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RegistryHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observers = self.observers.read();
        let mut map = f.debug_map();
        for (hook, entries) in observers.iter() {
            let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
            map.entry(&hook.type_name(), &names);
        }
        map.finish()
    }
}

impl<T> RegistryHooks<T> {
    /// Creates empty observer lists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an observer for one or more hooks.
    ///
    /// When `H` is a tuple, the observer is stored once per hook under
    /// `"{name}@{hook type name}"`.
    ///
    /// # Errors
    ///
    /// Returns [`HookRegistrationError::DuplicateName`] if the name is taken on
    /// any of the hooks. Hooks earlier in the tuple keep their registration.
    pub fn register_observer<H, F>(
        &self,
        name: impl Into<String>,
        observer: F,
    ) -> Result<&Self, HookRegistrationError>
    where
        H: IntoHookIds,
        F: Fn(&RegistryEvent<T>) + Send + Sync + 'static,
    {
        let hooks = H::hook_ids();
        let name = name.into();
        let observer: Observer<T> = Arc::new(observer);

        for hook in &hooks {
            self.register_shared(
                *hook,
                entry_name(&name, *hook, hooks.len()),
                Arc::clone(&observer),
            )?;
        }
        Ok(self)
    }

    /// Registers a pre-built shared observer on a single hook.
    ///
    /// # Errors
    ///
    /// Returns [`HookRegistrationError::DuplicateName`] if the name is taken.
    pub fn register_shared(
        &self,
        hook: HookId,
        name: impl Into<String>,
        observer: Observer<T>,
    ) -> Result<(), HookRegistrationError> {
        let name = name.into();

        let mut observers = self.observers.write();
        let entries = observers.entry(hook).or_default();

        if entries.iter().any(|entry| entry.name == name) {
            return Err(HookRegistrationError::DuplicateName { hook, name });
        }

        entries.push(ObserverEntry { name, observer });
        Ok(())
    }

    /// Removes the observer registered under `name` from the given hooks.
    ///
    /// Uses the same naming scheme as
    /// [`register_observer`](Self::register_observer), so the tuple used at
    /// registration removes every entry it created. Returns the number of
    /// entries removed.
    pub fn remove_observer<H: IntoHookIds>(&self, name: &str) -> usize {
        let hooks = H::hook_ids();
        let mut observers = self.observers.write();
        let mut removed = 0;

        for hook in &hooks {
            let entry_name = entry_name(name, *hook, hooks.len());
            if let Some(entries) = observers.get_mut(hook) {
                let before = entries.len();
                entries.retain(|entry| entry.name != entry_name);
                removed += before - entries.len();
            }
        }
        removed
    }

    /// Invokes every observer on `hook`, in registration order.
    ///
    /// Observers see the list as it was when this call started.
    pub fn invoke(&self, hook: HookId, event: &RegistryEvent<T>) {
        let snapshot: Vec<Observer<T>> = {
            let observers = self.observers.read();
            match observers.get(&hook) {
                Some(entries) => entries
                    .iter()
                    .map(|entry| Arc::clone(&entry.observer))
                    .collect(),
                None => return,
            }
        };

        for observer in snapshot {
            observer(event);
        }
    }

    /// Returns the number of observers registered on `hook`.
    #[must_use]
    pub fn observer_count(&self, hook: HookId) -> usize {
        self.observers.read().get(&hook).map_or(0, Vec::len)
    }

    /// Checks if an observer with the given name exists on `hook`.
    #[must_use]
    pub fn contains_observer(&self, hook: HookId, name: &str) -> bool {
        self.observers
            .read()
            .get(&hook)
            .is_some_and(|entries| entries.iter().any(|entry| entry.name == name))
    }

    /// Removes every observer from every hook.
    pub fn clear(&self) {
        self.observers.write().clear();
    }
}

fn entry_name(name: &str, hook: HookId, hook_count: usize) -> String {
    if hook_count > 1 {
        format!("{}@{}", name, hook.type_name())
    } else {
        name.to_owned()
    }
}
