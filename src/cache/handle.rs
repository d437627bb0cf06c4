//! Shared cache handle.
//!
//! Owns the locked [`CacheStore`] together with its reaper task so that the
//! task cannot outlive the cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, ExpiryPolicy};
use crate::error::CacheError;
use crate::tasks::spawn_reaper;

/// Smallest sweep interval; `tokio::time::interval` rejects zero.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Cache ==
/// Concurrency-safe TTL cache keyed by request URL.
///
/// A single mutex guards the whole store; `add`, `get` and each sweep hold it
/// for their full critical section. Share across tasks with `Arc<Cache>`.
///
/// Dropping the cache ends the reaper on its next poll. Use [`Cache::stop`] to
/// wait for it deterministically.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    shutdown: oneshot::Sender<()>,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache that serves stale entries until they are swept.
    ///
    /// Spawns the reaper on the current tokio runtime, so this must be called
    /// from within one.
    pub fn new(ttl: Duration) -> Self {
        Self::with_policy(ttl, ExpiryPolicy::default())
    }

    /// Creates an empty cache with an explicit read policy.
    pub fn with_policy(ttl: Duration, policy: ExpiryPolicy) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl, policy)));
        let (shutdown, rx) = oneshot::channel();
        let reaper = spawn_reaper(store.clone(), ttl.max(MIN_SWEEP_INTERVAL), rx);

        debug!(?ttl, ?policy, "Cache created");
        Self {
            store,
            shutdown,
            reaper,
        }
    }

    // == Add ==
    /// Stores `value` under `key`. Fails with [`CacheError::AlreadyExists`]
    /// if the key is present; the existing value is kept.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) -> Result<(), CacheError> {
        self.store.lock().await.add(key, value)
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == TTL ==
    /// Age at which entries expire; also the sweep interval.
    pub async fn ttl(&self) -> Duration {
        self.store.lock().await.ttl()
    }

    // == Policy ==
    /// Read policy for expired entries awaiting a sweep.
    pub async fn policy(&self) -> ExpiryPolicy {
        self.store.lock().await.policy()
    }

    // == Stop ==
    /// Signals the reaper and waits for it to finish.
    pub async fn stop(self) {
        let Self {
            shutdown, reaper, ..
        } = self;

        // The reaper may already be gone if the runtime is shutting down
        let _ = shutdown.send(());
        if let Err(err) = reaper.await {
            warn!("Cache reaper ended abnormally: {}", err);
        }
        debug!("Cache stopped");
    }
}
