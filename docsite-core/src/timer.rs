//! Keyed timer slots.
//!
//! At most one pending timer per key. Starting a new timer for a key hands
//! back the previous handle so the caller can clear it; a timer that fires
//! with a handle that is no longer current is stale and must be ignored.

use std::collections::HashMap;
use std::hash::Hash;

/// One pending timer handle per key.
#[derive(Debug, Clone)]
pub struct TimerSlots<K, H = i32> {
    slots: HashMap<K, H>,
}

impl<K, H> Default for TimerSlots<K, H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H: Copy + PartialEq> TimerSlots<K, H> {
    /// Create empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handle` as the pending timer for `key`.
    ///
    /// Returns the handle it replaces, which the caller must cancel.
    pub fn restart(&mut self, key: K, handle: H) -> Option<H> {
        self.slots.insert(key, handle)
    }

    /// A timer fired. Returns `true` if it was the current one for `key`,
    /// in which case the slot is freed.
    pub fn fire(&mut self, key: &K, handle: H) -> bool {
        if self.slots.get(key) == Some(&handle) {
            self.slots.remove(key);
            true
        } else {
            false
        }
    }

    /// Drop the pending timer for `key`, returning its handle.
    pub fn cancel(&mut self, key: &K) -> Option<H> {
        self.slots.remove(key)
    }

    /// Whether a timer is pending for `key`.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.slots.len()
    }
}
