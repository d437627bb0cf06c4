//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps `store` every `interval`.
///
/// Each tick takes the store lock once, removes every expired entry and
/// releases it. The task exits when `shutdown` fires or its sender is dropped.
///
/// # Arguments
/// * `store` - Shared cache store
/// * `interval` - Time between sweeps, must be non-zero
/// * `shutdown` - Stop signal
///
/// # Example
/// ```ignore
/// let (tx, rx) = oneshot::channel();
/// let handle = spawn_reaper(store.clone(), Duration::from_secs(60), rx);
/// // Later:
/// let _ = tx.send(());
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(?interval, "Starting cache reaper");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.reap_expired()
                    };

                    if removed > 0 {
                        info!("Cache reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reaper: no expired entries found");
                    }
                }
                _ = &mut shutdown => {
                    debug!("Cache reaper stopping");
                    break;
                }
            }
        }
    })
}
