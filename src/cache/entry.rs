//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped at insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body and the instant it was stored.
///
/// Entries are immutable once created; the store hands out copies of `value`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response body
    value: Vec<u8>,
    /// Insertion instant (monotonic clock)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns the stored bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the insertion instant.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time elapsed since insertion.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired, so a
    /// sweep that runs exactly one TTL after insertion removes it.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
