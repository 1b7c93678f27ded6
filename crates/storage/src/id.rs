//! Tracking id allocation
//!
//! Ids are decimal sequence numbers. The counter lives inside the store's
//! tables and only moves under the write lock: it starts after the largest
//! numeric id seeded into the store, and every inserted numeric id pushes
//! it forward. Every engine sharing a store therefore draws from the same
//! sequence, and an allocated id is never already taken.

use courier_core::TrackingId;

/// Monotonic tracking id counter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    /// Last id handed out or observed
    last: u64,
}

impl IdAllocator {
    /// Create an allocator whose first id is `last + 1`
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Last id handed out or observed
    pub fn current(&self) -> u64 {
        self.last
    }

    /// Move the counter past `id` if it is numeric and ahead of it
    pub fn observe(&mut self, id: &TrackingId) {
        if let Some(n) = id.numeric() {
            self.last = self.last.max(n);
        }
    }

    /// Allocate the next id
    pub fn allocate(&mut self) -> TrackingId {
        self.last += 1;
        TrackingId::from_sequence(self.last)
    }
}
