//! Monotonic record id source

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out record ids starting at 0.
///
/// Owned by whoever creates records and passed to [`VehicleBuilder::new`](super::VehicleBuilder::new).
/// Increments are atomic, so a shared sequence never repeats an id even when
/// records are built from several threads.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Id the next call to `next_id` will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
