//! Cache Store Module
//!
//! Unsynchronized cache engine: HashMap storage with insertion-time TTL.
//! [`Cache`](crate::cache::Cache) wraps it in a mutex and drives the sweep.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, ExpiryPolicy};
use crate::error::CacheError;

// == Cache Store ==
/// Key to bytes storage with fixed TTL and at-most-once insertion per key.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age at which an entry becomes eligible for removal
    ttl: Duration,
    /// Read-time treatment of expired entries
    policy: ExpiryPolicy,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL and read policy.
    pub fn new(ttl: Duration, policy: ExpiryPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            policy,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts `value` under `key`, stamped with the current instant.
    ///
    /// An existing key is never overwritten: the call fails with
    /// [`CacheError::AlreadyExists`] and the stored value is left untouched.
    /// Under [`ExpiryPolicy::RejectStale`] an expired entry does not count as
    /// present and is replaced.
    pub fn add(&mut self, key: impl Into<String>, value: Vec<u8>) -> Result<(), CacheError> {
        let key = key.into();
        let ttl = self.ttl;
        let policy = self.policy;

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if policy == ExpiryPolicy::RejectStale && occupied.get().is_expired(ttl) {
                    occupied.insert(CacheEntry::new(value));
                } else {
                    self.stats.record_rejected_add();
                    return Err(CacheError::AlreadyExists(occupied.key().clone()));
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry::new(value));
            }
        }

        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Reads never refresh an entry's age.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let value = match self.entries.get(key) {
            Some(entry) if self.policy == ExpiryPolicy::RejectStale && entry.is_expired(self.ttl) => {
                None
            }
            Some(entry) => Some(entry.value().to_vec()),
            None => None,
        };

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Reap Expired ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Returns `true` if `key` has an entry, expired or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == TTL ==
    /// Age at which an entry counts as expired.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Policy ==
    /// How reads treat entries that expired but were not yet swept.
    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    // == Length ==
    /// Number of stored entries, including expired ones awaiting a sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    fn store() -> CacheStore {
        CacheStore::new(TTL, ExpiryPolicy::ServeStale)
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_new() {
        let store = store();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
        assert_eq!(store.policy(), ExpiryPolicy::ServeStale);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_add_and_get() {
        let mut store = store();

        store.add("key1", b"value1".to_vec()).unwrap();

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_nonexistent() {
        let mut store = store();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_rejects_duplicate_key() {
        let mut store = store();

        store.add("u1", b"first".to_vec()).unwrap();
        let err = store.add("u1", b"second".to_vec()).unwrap_err();

        assert_eq!(err, CacheError::AlreadyExists("u1".to_string()));
        assert_eq!(store.get("u1"), Some(b"first".to_vec()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().rejected_adds, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_returns_copy() {
        let mut store = store();
        store.add("key", b"abc".to_vec()).unwrap();

        let mut copy = store.get("key").unwrap();
        copy[0] = b'z';
        copy.push(b'!');

        assert_eq!(store.get("key"), Some(b"abc".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_serves_stale_until_reaped() {
        let mut store = store();
        store.add("key", b"old".to_vec()).unwrap();

        tokio::time::advance(TTL * 2).await;

        // Expired but not swept: still a hit
        assert_eq!(store.get("key"), Some(b"old".to_vec()));
        // And still blocks re-insertion
        assert!(store.add("key", b"new".to_vec()).is_err());

        assert_eq!(store.reap_expired(), 1);
        assert_eq!(store.get("key"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reject_stale_policy() {
        let mut store = CacheStore::new(TTL, ExpiryPolicy::RejectStale);
        store.add("key", b"old".to_vec()).unwrap();

        tokio::time::advance(TTL).await;

        assert_eq!(store.get("key"), None);
        assert!(store.contains_key("key"));

        // Expired entry is replaced rather than rejected
        store.add("key", b"new".to_vec()).unwrap();
        assert_eq!(store.get("key"), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reject_stale_still_rejects_live_key() {
        let mut store = CacheStore::new(TTL, ExpiryPolicy::RejectStale);
        store.add("key", b"old".to_vec()).unwrap();

        assert!(store.add("key", b"new".to_vec()).is_err());
        assert_eq!(store.get("key"), Some(b"old".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reap_expired_keeps_fresh_entries() {
        let mut store = store();

        store.add("old", b"1".to_vec()).unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        store.add("young", b"2".to_vec()).unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;

        let removed = store.reap_expired();

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(!store.contains_key("old"));
        assert!(store.contains_key("young"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_stats() {
        let mut store = store();

        store.add("key1", b"v".to_vec()).unwrap();
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        tokio::time::advance(TTL).await;
        store.reap_expired();

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.reaped, 1);
        assert_eq!(stats.total_entries, 0);
    }
}
