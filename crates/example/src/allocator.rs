//! Simulated platform handle allocation.

use std::collections::BTreeSet;

use parking_lot::Mutex;
use thiserror::Error;

/// Errors raised by [`HandleAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocatorError {
    /// Every handle up to the capacity is live.
    #[error("handle capacity of {capacity} exhausted")]
    Exhausted {
        /// The configured capacity.
        capacity: usize,
    },
    /// The handle was never issued or was already released.
    #[error("handle {0} is not live")]
    UnknownHandle(u64),
}

#[derive(Debug, Default)]
struct AllocatorState {
    next: u64,
    live: BTreeSet<u64>,
}

/// Issues numeric handles and tracks which of them are live.
///
/// Stands in for a platform API (GPU, file system, sockets) whose handles
/// leak unless explicitly released.
#[derive(Debug, Default)]
pub struct HandleAllocator {
    capacity: Option<usize>,
    state: Mutex<AllocatorState>,
}

impl HandleAllocator {
    /// Creates an allocator without a capacity limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that refuses to hold more than `capacity` live handles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            state: Mutex::default(),
        }
    }

    /// Issues a fresh handle. Handles are never reused.
    ///
    /// # Errors
    ///
    /// Returns [`AllocatorError::Exhausted`] when the capacity is reached.
    pub fn acquire(&self) -> Result<u64, AllocatorError> {
        let mut state = self.state.lock();
        if let Some(capacity) = self.capacity
            && state.live.len() >= capacity
        {
            return Err(AllocatorError::Exhausted { capacity });
        }
        state.next += 1;
        let handle = state.next;
        state.live.insert(handle);
        Ok(handle)
    }

    /// Releases a live handle.
    ///
    /// # Errors
    ///
    /// Returns [`AllocatorError::UnknownHandle`] if `handle` is not live.
    pub fn release(&self, handle: u64) -> Result<(), AllocatorError> {
        if self.state.lock().live.remove(&handle) {
            Ok(())
        } else {
            Err(AllocatorError::UnknownHandle(handle))
        }
    }

    /// Number of live handles.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.state.lock().live.len()
    }

    /// Live handles in issue order.
    #[must_use]
    pub fn live_handles(&self) -> Vec<u64> {
        self.state.lock().live.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release_track_live_handles() {
        let allocator = HandleAllocator::new();
        let a = allocator.acquire().unwrap();
        let b = allocator.acquire().unwrap();
        assert_ne!(a, b);
        assert_eq!(allocator.live_handles(), vec![a, b]);

        allocator.release(a).unwrap();
        assert_eq!(allocator.live_handles(), vec![b]);
    }

    #[test]
    fn double_release_is_rejected() {
        let allocator = HandleAllocator::new();
        let handle = allocator.acquire().unwrap();
        allocator.release(handle).unwrap();
        assert_eq!(
            allocator.release(handle),
            Err(AllocatorError::UnknownHandle(handle))
        );
    }

    #[test]
    fn capacity_limits_live_handles() {
        let allocator = HandleAllocator::with_capacity(1);
        let handle = allocator.acquire().unwrap();
        assert_eq!(
            allocator.acquire(),
            Err(AllocatorError::Exhausted { capacity: 1 })
        );

        allocator.release(handle).unwrap();
        assert!(allocator.acquire().is_ok());
    }
}
