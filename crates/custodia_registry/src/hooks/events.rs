//! Unified event enum for registry observers.
//!
//! All observers receive `&RegistryEvent<T>` and can match on variants for
//! typed access.
//!
//! # Example
//!
//! ```ignore
//! use custodia_registry::hooks::RegistryEvent;
//!
//! fn handle_event(event: &RegistryEvent<Texture>) {
//!     match event {
//!         RegistryEvent::ResourceAdded { resource } => {
//!             println!("added {}", resource.id());
//!         }
//!         RegistryEvent::Disposed { disposed_count } => {
//!             println!("teardown released {disposed_count} resources");
//!         }
//!         _ => {}
//!     }
//! }
//! ```

use core::fmt;
use std::sync::Arc;

use crate::resource::Resource;

/// Unified event enum for all registry hooks.
///
/// Resource variants carry the shared handle of the resource concerned.
/// Registry teardown variants carry counts instead.
pub enum RegistryEvent<T> {
    // ─────────────────────────────────────────────────────────────────────────
    // Resource Events
    // ─────────────────────────────────────────────────────────────────────────
    /// A resource was inserted into the registry.
    ResourceAdded {
        /// The added resource.
        resource: Arc<T>,
    },

    /// A resource was removed and handed back to the caller.
    ResourceRemoved {
        /// The removed resource.
        resource: Arc<T>,
    },

    /// A member resource finished initializing.
    ResourceInitialized {
        /// The initialized resource.
        resource: Arc<T>,
    },

    /// A member resource finished uninitializing.
    ResourceUninitialized {
        /// The uninitialized resource.
        resource: Arc<T>,
    },

    /// A member resource disposed itself and left the registry.
    ResourceDisposed {
        /// The disposed resource.
        resource: Arc<T>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Registry Events
    // ─────────────────────────────────────────────────────────────────────────
    /// Registry teardown is starting.
    Disposing {
        /// Number of resources about to be disposed.
        resource_count: usize,
    },

    /// Registry teardown finished.
    Disposed {
        /// Number of resources whose dispose succeeded.
        disposed_count: usize,
    },
}

impl<T> Clone for RegistryEvent<T> {
    fn clone(&self) -> Self {
        match self {
            Self::ResourceAdded { resource } => Self::ResourceAdded {
                resource: Arc::clone(resource),
            },
            Self::ResourceRemoved { resource } => Self::ResourceRemoved {
                resource: Arc::clone(resource),
            },
            Self::ResourceInitialized { resource } => Self::ResourceInitialized {
                resource: Arc::clone(resource),
            },
            Self::ResourceUninitialized { resource } => Self::ResourceUninitialized {
                resource: Arc::clone(resource),
            },
            Self::ResourceDisposed { resource } => Self::ResourceDisposed {
                resource: Arc::clone(resource),
            },
            Self::Disposing { resource_count } => Self::Disposing {
                resource_count: *resource_count,
            },
            Self::Disposed { disposed_count } => Self::Disposed {
                disposed_count: *disposed_count,
            },
        }
    }
}

impl<T> RegistryEvent<T> {
    /// Returns the hook name for this event variant.
    ///
    /// This corresponds to the hook marker type name (e.g., `OnResourceAdded`).
    #[must_use]
    pub fn hook_name(&self) -> &'static str {
        match self {
            RegistryEvent::ResourceAdded { .. } => "OnResourceAdded",
            RegistryEvent::ResourceRemoved { .. } => "OnResourceRemoved",
            RegistryEvent::ResourceInitialized { .. } => "OnResourceInitialized",
            RegistryEvent::ResourceUninitialized { .. } => "OnResourceUninitialized",
            RegistryEvent::ResourceDisposed { .. } => "OnResourceDisposed",
            RegistryEvent::Disposing { .. } => "OnRegistryDisposing",
            RegistryEvent::Disposed { .. } => "OnRegistryDisposed",
        }
    }

    /// Returns the resource carried by a resource-level event.
    ///
    /// Registry teardown events return `None`.
    #[must_use]
    pub fn resource(&self) -> Option<&Arc<T>> {
        match self {
            RegistryEvent::ResourceAdded { resource }
            | RegistryEvent::ResourceRemoved { resource }
            | RegistryEvent::ResourceInitialized { resource }
            | RegistryEvent::ResourceUninitialized { resource }
            | RegistryEvent::ResourceDisposed { resource } => Some(resource),
            RegistryEvent::Disposing { .. } | RegistryEvent::Disposed { .. } => None,
        }
    }
}

impl<T: Resource> fmt::Debug for RegistryEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: Resource> fmt::Display for RegistryEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryEvent::ResourceAdded { resource } => {
                write!(f, "ResourceAdded({})", resource.id())
            }
            RegistryEvent::ResourceRemoved { resource } => {
                write!(f, "ResourceRemoved({})", resource.id())
            }
            RegistryEvent::ResourceInitialized { resource } => {
                write!(f, "ResourceInitialized({})", resource.id())
            }
            RegistryEvent::ResourceUninitialized { resource } => {
                write!(f, "ResourceUninitialized({})", resource.id())
            }
            RegistryEvent::ResourceDisposed { resource } => {
                write!(f, "ResourceDisposed({})", resource.id())
            }
            RegistryEvent::Disposing { resource_count } => {
                write!(f, "Disposing(resources: {})", resource_count)
            }
            RegistryEvent::Disposed { disposed_count } => {
                write!(f, "Disposed(disposed: {})", disposed_count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifecycleError;
    use crate::resource::LifecycleSignals;

    struct Named(&'static str, LifecycleSignals);

    impl Resource for Named {
        fn id(&self) -> &str {
            self.0
        }

        fn is_initialized(&self) -> bool {
            false
        }

        fn initialize(&self) -> Result<(), LifecycleError> {
            Ok(())
        }

        fn uninitialize(&self) -> Result<(), LifecycleError> {
            Ok(())
        }

        fn dispose(&self) -> Result<(), LifecycleError> {
            Ok(())
        }

        fn signals(&self) -> &LifecycleSignals {
            &self.1
        }
    }

    fn added(id: &'static str) -> RegistryEvent<Named> {
        RegistryEvent::ResourceAdded {
            resource: Arc::new(Named(id, LifecycleSignals::new())),
        }
    }

    #[test]
    fn hook_name_matches_marker() {
        assert_eq!(added("a").hook_name(), "OnResourceAdded");
        let teardown: RegistryEvent<Named> = RegistryEvent::Disposed { disposed_count: 0 };
        assert_eq!(teardown.hook_name(), "OnRegistryDisposed");
    }

    #[test]
    fn resource_accessor_only_for_resource_events() {
        assert_eq!(added("a").resource().map(|r| r.id()), Some("a"));
        let teardown: RegistryEvent<Named> = RegistryEvent::Disposing { resource_count: 2 };
        assert!(teardown.resource().is_none());
    }

    #[test]
    fn clone_shares_the_resource() {
        let event = added("a");
        let copy = event.clone();
        let (Some(original), Some(cloned)) = (event.resource(), copy.resource()) else {
            panic!("resource events carry a resource");
        };
        assert!(Arc::ptr_eq(original, cloned));
    }

    #[test]
    fn display_names_the_resource() {
        assert_eq!(added("mesh").to_string(), "ResourceAdded(mesh)");
        let teardown: RegistryEvent<Named> = RegistryEvent::Disposed { disposed_count: 3 };
        assert_eq!(teardown.to_string(), "Disposed(disposed: 3)");
    }
}
