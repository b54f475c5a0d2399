//! TTL Cleanup Task
//!
//! Background task that periodically removes cache entries older than the
//! configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically reclaims stale cache entries.
///
/// The task sleeps for `interval` between scans, so the first scan runs a
/// full interval after spawning and an entry can survive up to roughly
/// twice the interval in the worst case. Each scan snapshots the current
/// keys under the read lock, then takes the write lock once per key for
/// that key's check-and-maybe-delete. Callers are never blocked for the
/// whole traversal, and an entry overwritten mid-scan is left alone
/// because its age restarted.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Entry lifetime and scan period
///
/// # Returns
/// A JoinHandle for the spawned task. Aborting it is the only way to stop
/// the loop; [`TtlCache`](crate::cache::TtlCache) does so when dropped.
pub fn spawn_cleanup_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reclamation task with interval {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Snapshot the keys, then check each one under its own
            // short-lived write lock
            let keys = { store.read().await.keys() };

            let mut removed = 0usize;
            for key in &keys {
                let mut guard = store.write().await;
                if guard.remove_if_expired(key) {
                    removed += 1;
                }
            }

            if removed > 0 {
                info!("cache reclamation: removed {} stale entries", removed);
            } else {
                debug!("cache reclamation: no stale entries found");
            }
        }
    })
}
