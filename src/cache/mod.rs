//! Cache Module
//!
//! Provides the in-memory response cache with interval-based eviction.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Sweep interval used by the interactive client.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 5 * 60;
