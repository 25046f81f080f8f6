//! Cache Statistics Module
//!
//! Counters for lookups and sweeps, reported by the `cache` command.

// == Cache Stats ==
/// Lookup and sweep counters for one response cache.
///
/// Counters only grow. `entries` is not a counter: it is filled in when a
/// snapshot is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Completed sweep passes, including ones that removed nothing
    pub sweeps: u64,
    /// Entries removed across all sweeps
    pub reaped: u64,
    /// Entries present when the snapshot was taken
    pub entries: usize,
}

impl CacheStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookups ==
    /// Records the outcome of one `get`.
    pub fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Total lookups recorded so far.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, in `[0, 1]`; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    // == Sweeps ==
    /// Records one sweep pass that removed `removed` entries.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.reaped += removed as u64;
    }

    // == Snapshot ==
    /// Copies the counters, stamped with the current entry count.
    pub fn snapshot(&self, entries: usize) -> CacheStats {
        CacheStats {
            entries,
            ..self.clone()
        }
    }
}
