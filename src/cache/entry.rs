//! Cache Entry Module
//!
//! Defines a single cached response body stamped with its insertion time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its payload and insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    pub payload: Bytes,
    /// When the entry was inserted (monotonic clock)
    pub inserted_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self::inserted_at(payload, Instant::now())
    }

    /// Creates a new entry with an explicit insertion time.
    pub fn inserted_at(payload: Bytes, inserted_at: Instant) -> Self {
        Self {
            payload,
            inserted_at,
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`, zero if `now` is earlier.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has lived for at least `interval`.
    ///
    /// An entry whose age equals the interval is stale, so a sweep tick
    /// landing exactly one interval after insertion removes it.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) >= interval
    }
}
