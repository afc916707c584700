//! Example registry of simulated platform textures built with Custodia.
//!
//! The demo walks a [`ResourceRegistry`] through the lifecycle every owner of
//! platform resources goes through:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │   Add    │──▶│Initialize│──▶│  Rescue  │──▶│ Cascade  │──▶│ Teardown │
//! │ textures │   │   all    │   │ (remove) │   │(dispose) │   │(dispose) │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Each texture holds a handle from a [`HandleAllocator`] while initialized;
//! the run fails if any handle is still live at the end.

mod allocator;
mod config;
mod error;
mod texture;

pub use allocator::{AllocatorError, HandleAllocator};
pub use config::DemoConfig;
pub use error::DemoError;
pub use texture::{TextureResource, TextureSpec};

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use custodia_registry::ResourceRegistry;
use custodia_registry::error::RegistryError;
use custodia_registry::hooks::{
    AllRegistryHooks, OnResourceAdded, OnResourceDisposed, OnResourceRemoved, RegistryEvent,
};
use custodia_registry::resource::Resource;

/// The registry type the demo drives.
pub type TextureRegistry = ResourceRegistry<TextureResource>;

/// Textures the scenario needs: one to rescue, one to dispose directly, and
/// at least one left for teardown.
pub const MIN_TEXTURES: usize = 3;

/// Counts of resource events seen by the demo's observers.
#[derive(Debug, Default)]
struct EventTally {
    added: AtomicUsize,
    removed: AtomicUsize,
    disposed: AtomicUsize,
}

/// Summary of a completed demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// `ResourceAdded` events observed.
    pub added: usize,
    /// `ResourceRemoved` events observed.
    pub removed: usize,
    /// `ResourceDisposed` events observed.
    pub disposed: usize,
    /// Members left for registry teardown.
    pub torn_down: usize,
    /// Texture taken out of the registry before teardown.
    pub rescued: String,
    /// Texture that disposed itself while registered.
    pub cascaded: String,
}

fn register_observers(
    registry: &TextureRegistry,
    tally: &Arc<EventTally>,
) -> Result<(), DemoError> {
    registry
        .hooks()
        .register_observer::<AllRegistryHooks, _>("log", |event| {
            tracing::info!(hook = event.hook_name(), "{event}");
        })?;

    let tally = Arc::clone(tally);
    registry
        .hooks()
        .register_observer::<(OnResourceAdded, OnResourceRemoved, OnResourceDisposed), _>(
            "tally",
            move |event| {
                let counter = match event {
                    RegistryEvent::ResourceAdded { .. } => &tally.added,
                    RegistryEvent::ResourceRemoved { .. } => &tally.removed,
                    RegistryEvent::ResourceDisposed { .. } => &tally.disposed,
                    _ => return,
                };
                counter.fetch_add(1, Ordering::Relaxed);
            },
        )?;
    Ok(())
}

/// Runs the demo scenario against a fresh registry.
///
/// # Errors
///
/// Returns [`DemoError::TooFewTextures`] if fewer than [`MIN_TEXTURES`] are
/// configured, [`DemoError::Leak`] if handles outlive the run, and otherwise
/// the first registry or texture error encountered.
pub fn run(config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let [first, second, _, ..] = config.textures.as_slice() else {
        return Err(DemoError::TooFewTextures {
            needed: MIN_TEXTURES,
            found: config.textures.len(),
        });
    };

    let allocator = Arc::new(match config.handle_capacity {
        Some(capacity) => HandleAllocator::with_capacity(capacity),
        None => HandleAllocator::new(),
    });
    let registry = TextureRegistry::with_config(config.registry);
    let tally = Arc::new(EventTally::default());
    register_observers(&registry, &tally)?;

    for spec in &config.textures {
        registry.add_default(TextureResource::new(spec.clone(), Arc::clone(&allocator)))?;
    }
    registry.initialize_all()?;
    tracing::info!(
        textures = registry.len(),
        live_handles = allocator.live_count(),
        "textures loaded"
    );

    let rescued = registry
        .remove(&first.id)
        .ok_or_else(|| RegistryError::not_found(first.id.as_str()))?;
    tracing::info!(id = %rescued.id(), handle = ?rescued.handle(), "rescued texture");

    registry.get(&second.id)?.dispose()?;
    tracing::info!(
        id = %second.id,
        still_registered = registry.exists(&second.id),
        "texture disposed itself"
    );

    let torn_down = registry.len();
    registry.dispose()?;
    rescued.dispose()?;

    let leaked = allocator.live_handles();
    if !leaked.is_empty() {
        return Err(DemoError::Leak(leaked));
    }

    Ok(DemoReport {
        added: tally.added.load(Ordering::Relaxed),
        removed: tally.removed.load(Ordering::Relaxed),
        disposed: tally.disposed.load(Ordering::Relaxed),
        torn_down,
        rescued: first.id.clone(),
        cascaded: second.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use custodia_registry::RegistryConfig;

    use super::*;

    #[test]
    fn default_scenario_releases_every_handle() {
        let report = run(&DemoConfig::default()).unwrap();

        assert_eq!(report.added, 4);
        assert_eq!(report.removed, 1);
        assert_eq!(report.torn_down, 2);
        // One self-disposal plus every teardown disposal.
        assert_eq!(report.disposed, 1 + report.torn_down);
        assert_eq!(report.rescued, "albedo");
        assert_eq!(report.cascaded, "normal");
    }

    #[test]
    fn lazy_registry_is_initialized_in_bulk() {
        let config = DemoConfig {
            registry: RegistryConfig::new().with_initialize_on_add(false),
            ..DemoConfig::default()
        };
        assert!(run(&config).is_ok());
    }

    #[test]
    fn too_few_textures_is_rejected() {
        let config = DemoConfig {
            textures: vec![TextureSpec::new("a", 1, 1), TextureSpec::new("b", 1, 1)],
            ..DemoConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(DemoError::TooFewTextures { needed: 3, found: 2 })
        ));
    }

    #[test]
    fn exhausted_handles_fail_the_run() {
        let config = DemoConfig {
            handle_capacity: Some(1),
            ..DemoConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(DemoError::Registry(RegistryError::Lifecycle { ref id, .. })) if id == "normal"
        ));
    }

    #[test]
    fn duplicate_texture_ids_are_rejected() {
        let config = DemoConfig {
            textures: vec![
                TextureSpec::new("a", 1, 1),
                TextureSpec::new("b", 1, 1),
                TextureSpec::new("a", 2, 2),
            ],
            ..DemoConfig::default()
        };
        assert!(matches!(
            run(&config),
            Err(DemoError::Registry(RegistryError::DuplicateIdentity(_)))
        ));
    }
}
