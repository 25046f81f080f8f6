//! Cache Store Module
//!
//! The unsynchronized core of the expiring cache: a HashMap of entries plus
//! statistics. `ExpiringCache` wraps it in a single lock shared with the sweep.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with age-based reaping.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum entry age, fixed at construction
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries become stale after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    /// Age at which an entry becomes stale.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current time.
    ///
    /// An existing entry for the key is fully replaced, timestamp included.
    pub fn add(&mut self, key: impl Into<String>, payload: Bytes) {
        self.insert(key, CacheEntry::new(payload));
    }

    /// Stores a pre-built entry, replacing any existing one for `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: CacheEntry) {
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Entry age is not checked here; removing stale entries is the sweep's job.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        let payload = self.entries.get(key).map(|entry| entry.payload.clone());
        self.stats.record_lookup(payload.is_some());
        payload
    }

    // == Reap ==
    /// Removes every entry that is stale as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Checks whether `key` has an entry, without counting a lookup.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
