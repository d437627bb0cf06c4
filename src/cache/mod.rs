//! Cache Module
//!
//! In-memory response cache with insertion-time TTL and a background reaper.

mod entry;
mod handle;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use policy::ExpiryPolicy;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL used when none is configured
pub const DEFAULT_TTL_SECS: u64 = 60;
