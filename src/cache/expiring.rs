//! Expiring Cache Module
//!
//! Thread-safe handle over a `CacheStore`, paired with the background sweep
//! that evicts stale entries.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::SweepHandle;

// == Expiring Cache ==
/// Concurrency-safe response cache with time-based eviction.
///
/// A single lock guards the entry map and is shared with the sweep task.
/// The lock is never held across I/O: callers fetch first and `add` after.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    sweeper: Option<SweepHandle>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep.
    ///
    /// Entries are removed by the first sweep tick at which they are at least
    /// `interval` old. Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let sweeper = SweepHandle::start(store.clone(), interval);
        Self {
            store,
            interval,
            sweeper: Some(sweeper),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Add ==
    /// Inserts or replaces the payload for `key`.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        self.store.lock().await.add(key, payload.into());
    }

    // == Get ==
    /// Returns the payload for `key` if present right now, whatever its age.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Returns true while the background sweep is alive.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper.as_ref().is_some_and(SweepHandle::is_running)
    }

    // == Shutdown ==
    /// Stops the sweep and waits for it to exit.
    ///
    /// The cache stays readable and writable afterwards; entries just stop
    /// expiring. Calling this twice is a no-op.
    pub async fn shutdown(&mut self) {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.stop().await;
        }
    }
}
