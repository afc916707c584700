//! The resource capability contract and its lifecycle signals.
//!
//! A [`Resource`] is anything with a stable id, an initialized flag, and a
//! one-shot disposal that releases platform handles. Every resource embeds a
//! [`LifecycleSignals`] value and fires the matching signal, with itself as
//! payload, whenever one of its own lifecycle operations succeeds:
//!
//! | Operation | Signal |
//! |-----------|--------|
//! | [`Resource::initialize`] | [`LifecycleSignals::initialized`] |
//! | [`Resource::uninitialize`] | [`LifecycleSignals::uninitialized`] |
//! | [`Resource::dispose`] | [`LifecycleSignals::disposed`] |
//!
//! Each signal holds at most one subscriber. While a resource is a member of a
//! [`ResourceRegistry`](crate::ResourceRegistry) that subscriber is the
//! registry's relay; the registry connects on add and disconnects on removal.
//!
//! # Example
//!
//! ```
//! use core::sync::atomic::{AtomicBool, Ordering};
//! use custodia_registry::error::LifecycleError;
//! use custodia_registry::resource::{LifecycleSignals, Resource};
//!
//! struct Sampler {
//!     id: String,
//!     initialized: AtomicBool,
//!     disposed: AtomicBool,
//!     signals: LifecycleSignals,
//! }
//!
//! impl Resource for Sampler {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn is_initialized(&self) -> bool {
//!         self.initialized.load(Ordering::Acquire)
//!     }
//!
//!     fn initialize(&self) -> Result<(), LifecycleError> {
//!         self.initialized.store(true, Ordering::Release);
//!         self.signals.emit_initialized(self);
//!         Ok(())
//!     }
//!
//!     fn uninitialize(&self) -> Result<(), LifecycleError> {
//!         self.initialized.store(false, Ordering::Release);
//!         self.signals.emit_uninitialized(self);
//!         Ok(())
//!     }
//!
//!     fn dispose(&self) -> Result<(), LifecycleError> {
//!         if self.disposed.swap(true, Ordering::AcqRel) {
//!             return Err(LifecycleError::AlreadyDisposed);
//!         }
//!         self.signals.emit_disposed(self);
//!         Ok(())
//!     }
//!
//!     fn signals(&self) -> &LifecycleSignals {
//!         &self.signals
//!     }
//! }
//! ```

use core::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LifecycleError, SignalError};

/// A managed platform resource.
///
/// All operations take `&self`. The registry shares resources as `Arc<T>`
/// handles, so implementations keep their state behind atomics or locks.
///
/// # Contract
///
/// - [`id`](Self::id) never changes after construction.
/// - A successful [`initialize`](Self::initialize),
///   [`uninitialize`](Self::uninitialize) or [`dispose`](Self::dispose) fires
///   the corresponding signal from [`signals`](Self::signals) with `self` as
///   payload, after the resource's own state has been updated.
/// - [`dispose`](Self::dispose) succeeds at most once. Later calls return
///   [`LifecycleError::AlreadyDisposed`] and fire nothing.
pub trait Resource: Send + Sync + 'static {
    /// Returns the caller-assigned identity of this resource.
    fn id(&self) -> &str;

    /// Returns whether the resource is currently initialized.
    fn is_initialized(&self) -> bool;

    /// Acquires whatever the resource needs to be usable.
    ///
    /// # Errors
    ///
    /// Returns the resource's own failure; the registry propagates it untouched.
    fn initialize(&self) -> Result<(), LifecycleError>;

    /// Releases what [`initialize`](Self::initialize) acquired, keeping the
    /// resource reusable.
    ///
    /// # Errors
    ///
    /// Returns the resource's own failure; the registry propagates it untouched.
    fn uninitialize(&self) -> Result<(), LifecycleError>;

    /// Releases every platform handle held by the resource. Terminal.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AlreadyDisposed`] on a second call, or the
    /// resource's own failure.
    fn dispose(&self) -> Result<(), LifecycleError>;

    /// Returns the lifecycle signals this resource fires.
    fn signals(&self) -> &LifecycleSignals;
}

/// Callback stored in a [`Signal`].
pub type SignalHandler = Arc<dyn Fn(&dyn Resource) + Send + Sync>;

// ─────────────────────────────────────────────────────────────────────────────
// Signal
// ─────────────────────────────────────────────────────────────────────────────

/// A single-subscriber notification slot.
///
/// [`emit`](Self::emit) clones the handler out of the slot before calling it,
/// so a handler may disconnect (or reconnect) the signal it is running on.
#[derive(Default)]
pub struct Signal {
    handler: Mutex<Option<SignalHandler>>,
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Signal {
    /// Creates a signal with no subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::AlreadyConnected`] if a subscriber is present.
    pub fn connect(
        &self,
        handler: impl Fn(&dyn Resource) + Send + Sync + 'static,
    ) -> Result<(), SignalError> {
        let mut slot = self.handler.lock();
        if slot.is_some() {
            return Err(SignalError::AlreadyConnected);
        }
        *slot = Some(Arc::new(handler));
        Ok(())
    }

    /// Removes the subscriber. Returns `true` if one was present.
    pub fn disconnect(&self) -> bool {
        self.handler.lock().take().is_some()
    }

    /// Returns whether a subscriber is installed.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.handler.lock().is_some()
    }

    /// Notifies the subscriber, if any, on the caller's stack.
    pub fn emit(&self, resource: &dyn Resource) {
        let handler = self.handler.lock().clone();
        if let Some(handler) = handler {
            handler(resource);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LifecycleSignals
// ─────────────────────────────────────────────────────────────────────────────

/// The three lifecycle emission points every [`Resource`] carries.
#[derive(Debug, Default)]
pub struct LifecycleSignals {
    initialized: Signal,
    uninitialized: Signal,
    disposed: Signal,
}

impl LifecycleSignals {
    /// Creates unconnected signals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal fired after a successful initialize.
    #[must_use]
    pub fn initialized(&self) -> &Signal {
        &self.initialized
    }

    /// Signal fired after a successful uninitialize.
    #[must_use]
    pub fn uninitialized(&self) -> &Signal {
        &self.uninitialized
    }

    /// Signal fired after a successful dispose.
    #[must_use]
    pub fn disposed(&self) -> &Signal {
        &self.disposed
    }

    /// Fires [`initialized`](Self::initialized).
    pub fn emit_initialized(&self, resource: &dyn Resource) {
        self.initialized.emit(resource);
    }

    /// Fires [`uninitialized`](Self::uninitialized).
    pub fn emit_uninitialized(&self, resource: &dyn Resource) {
        self.uninitialized.emit(resource);
    }

    /// Fires [`disposed`](Self::disposed).
    pub fn emit_disposed(&self, resource: &dyn Resource) {
        self.disposed.emit(resource);
    }

    /// Returns `true` if any of the three signals has a subscriber.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.initialized.is_connected()
            || self.uninitialized.is_connected()
            || self.disposed.is_connected()
    }

    /// Disconnects all three signals.
    pub fn disconnect_all(&self) {
        self.initialized.disconnect();
        self.uninitialized.disconnect();
        self.disposed.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    struct Probe {
        signals: LifecycleSignals,
    }

    impl Resource for Probe {
        fn id(&self) -> &str {
            "probe"
        }

        fn is_initialized(&self) -> bool {
            false
        }

        fn initialize(&self) -> Result<(), LifecycleError> {
            self.signals.emit_initialized(self);
            Ok(())
        }

        fn uninitialize(&self) -> Result<(), LifecycleError> {
            self.signals.emit_uninitialized(self);
            Ok(())
        }

        fn dispose(&self) -> Result<(), LifecycleError> {
            self.signals.emit_disposed(self);
            Ok(())
        }

        fn signals(&self) -> &LifecycleSignals {
            &self.signals
        }
    }

    fn probe() -> Arc<Probe> {
        Arc::new(Probe {
            signals: LifecycleSignals::new(),
        })
    }

    #[test]
    fn signal_rejects_second_subscriber() {
        let signal = Signal::new();
        signal.connect(|_| {}).expect("first connect should succeed");
        assert_eq!(signal.connect(|_| {}), Err(SignalError::AlreadyConnected));
    }

    #[test]
    fn disconnect_reports_previous_state() {
        let signal = Signal::new();
        assert!(!signal.disconnect());
        signal.connect(|_| {}).unwrap();
        assert!(signal.is_connected());
        assert!(signal.disconnect());
        assert!(!signal.is_connected());
    }

    #[test]
    fn emit_without_subscriber_is_noop() {
        let probe = probe();
        probe.initialize().unwrap();
    }

    #[test]
    fn emit_passes_payload_id() {
        let probe = probe();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        probe
            .signals()
            .disposed()
            .connect(move |resource| {
                *seen_clone.lock() = Some(resource.id().to_string());
            })
            .unwrap();

        probe.dispose().unwrap();
        assert_eq!(seen.lock().as_deref(), Some("probe"));
    }

    #[test]
    fn handler_may_disconnect_its_own_signal() {
        let probe = probe();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        probe
            .signals()
            .initialized()
            .connect(move |resource| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                resource.signals().initialized().disconnect();
            })
            .unwrap();

        probe.initialize().unwrap();
        probe.initialize().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!probe.signals().is_attached());
    }

    #[test]
    fn disconnect_all_detaches_every_signal() {
        let probe = probe();
        let signals = probe.signals();
        signals.initialized().connect(|_| {}).unwrap();
        signals.disposed().connect(|_| {}).unwrap();
        assert!(signals.is_attached());

        signals.disconnect_all();
        assert!(!signals.is_attached());
    }
}
