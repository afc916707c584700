//! A texture resource backed by a simulated platform handle.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use custodia_registry::error::LifecycleError;
use custodia_registry::resource::{LifecycleSignals, Resource};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::allocator::HandleAllocator;

/// Description of a texture to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSpec {
    /// Registry identity.
    pub id: String,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

impl TextureSpec {
    /// Creates a texture description.
    #[must_use]
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// A texture that holds a platform handle while initialized.
///
/// `initialize` acquires a handle, `uninitialize` and `dispose` release it.
/// A disposed texture cannot be initialized again.
pub struct TextureResource {
    spec: TextureSpec,
    allocator: Arc<HandleAllocator>,
    handle: Mutex<Option<u64>>,
    disposed: AtomicBool,
    signals: LifecycleSignals,
}

impl TextureResource {
    /// Creates an uninitialized texture drawing handles from `allocator`.
    #[must_use]
    pub fn new(spec: TextureSpec, allocator: Arc<HandleAllocator>) -> Self {
        Self {
            spec,
            allocator,
            handle: Mutex::new(None),
            disposed: AtomicBool::new(false),
            signals: LifecycleSignals::new(),
        }
    }

    /// The texture's description.
    #[must_use]
    pub fn spec(&self) -> &TextureSpec {
        &self.spec
    }

    /// The platform handle, if initialized.
    #[must_use]
    pub fn handle(&self) -> Option<u64> {
        *self.handle.lock()
    }

    /// Whether [`dispose`](Resource::dispose) has completed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn release_handle(&self) -> Result<bool, LifecycleError> {
        let Some(handle) = self.handle.lock().take() else {
            return Ok(false);
        };
        self.allocator
            .release(handle)
            .map_err(|err| LifecycleError::Platform(Box::new(err)))?;
        tracing::trace!(id = %self.spec.id, handle, "released handle");
        Ok(true)
    }
}

impl core::fmt::Debug for TextureResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextureResource")
            .field("spec", &self.spec)
            .field("handle", &self.handle())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Resource for TextureResource {
    fn id(&self) -> &str {
        &self.spec.id
    }

    fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    fn initialize(&self) -> Result<(), LifecycleError> {
        if self.is_disposed() {
            return Err(LifecycleError::AlreadyDisposed);
        }
        {
            let mut slot = self.handle.lock();
            if slot.is_some() {
                return Ok(());
            }
            let handle = self
                .allocator
                .acquire()
                .map_err(|err| LifecycleError::Platform(Box::new(err)))?;
            tracing::trace!(id = %self.spec.id, handle, "acquired handle");
            *slot = Some(handle);
        }
        self.signals.emit_initialized(self);
        Ok(())
    }

    fn uninitialize(&self) -> Result<(), LifecycleError> {
        if self.release_handle()? {
            self.signals.emit_uninitialized(self);
        }
        Ok(())
    }

    fn dispose(&self) -> Result<(), LifecycleError> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Err(LifecycleError::AlreadyDisposed);
        }
        self.release_handle()?;
        self.signals.emit_disposed(self);
        Ok(())
    }

    fn signals(&self) -> &LifecycleSignals {
        &self.signals
    }
}
