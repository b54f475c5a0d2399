//! TTL Cache Module
//!
//! Concurrent, self-expiring response cache: the entry map behind a lock
//! plus the background reclamation task that owns its stale-entry policy.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_cleanup_task;

// == TTL Cache ==
/// Self-expiring key/value cache for raw response bodies.
///
/// Entries older than the construction interval are evicted by a
/// background scan that runs on the same period, so a value lives at
/// least `interval` and at most about twice that. Lookups never check
/// age themselves.
///
/// All operations are safe to call concurrently; share the cache behind
/// an `Arc` (or borrow it) from as many tasks as needed. Dropping the
/// cache aborts the reclamation task, so tests and embedders cannot leak
/// the loop.
#[derive(Debug)]
pub struct TtlCache {
    /// Shared entry store
    store: Arc<RwLock<CacheStore>>,
    /// Reclamation task handle, aborted on drop
    reaper: JoinHandle<()>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reclamation task.
    ///
    /// # Arguments
    /// * `interval` - Entry lifetime; also the reclamation scan period
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidInterval`] when `interval` is zero,
    /// which would otherwise turn the reclamation loop into a busy spin.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, since the reclamation
    /// task is spawned here.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval(interval));
        }

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let reaper = spawn_cleanup_task(Arc::clone(&store), interval);

        Ok(Self { store, reaper })
    }

    // == Add ==
    /// Inserts or overwrites the value for `key`, timestamped now.
    ///
    /// Atomic with respect to concurrent lookups and the reclamation
    /// scan; no reader ever observes a half-written entry.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.write().await.add(key.into(), value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present.
    ///
    /// Age is not checked here; an entry past its lifetime is still
    /// returned until the reclamation scan removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key).map(<[u8]>::to_vec)
    }

    // == Length ==
    /// Returns the current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_rejects_zero_interval() {
        let result = TtlCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidInterval(_))));
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let cache = TtlCache::new(Duration::from_secs(5)).unwrap();

        cache.add("https://example.com", b"testdata".to_vec()).await;

        assert_eq!(
            cache.get("https://example.com").await,
            Some(b"testdata".to_vec())
        );
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = TtlCache::new(Duration::from_secs(5)).unwrap();

        assert_eq!(cache.get("nonexistent key").await, None);
    }

    #[tokio::test]
    async fn test_overwrite_returns_latest_value() {
        let cache = TtlCache::new(Duration::from_secs(5)).unwrap();

        cache.add("key", b"first".to_vec()).await;
        cache.add("key", b"second".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"second".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_entry_reclaimed_after_interval() {
        let cache = TtlCache::new(Duration::from_millis(50)).unwrap();

        cache.add("https://example.com", b"testdata".to_vec()).await;
        assert!(cache.get("https://example.com").await.is_some());

        // Entry lifetime plus at least one scan period, with slack
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.get("https://example.com").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_entry_survives_well_before_interval() {
        let cache = TtlCache::new(Duration::from_secs(5)).unwrap();

        cache.add("u1", b"a".to_vec()).await;
        cache.add("u2", b"b".to_vec()).await;

        assert_eq!(cache.get("nonexistent").await, None);
        assert_eq!(cache.get("u1").await, Some(b"a".to_vec()));
        assert_eq!(cache.get("u2").await, Some(b"b".to_vec()));
    }

    #[tokio::test]
    async fn test_concurrent_adds_and_gets_keep_keys_separate() {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(5)).unwrap());

        let mut handles = Vec::new();
        for i in 0..16 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let key = format!("https://example.com/{}", i);
                let value = format!("payload-{}", i).into_bytes();
                cache.add(key.clone(), value.clone()).await;
                (key, value)
            }));
        }

        for handle in handles {
            let (key, value) = handle.await.unwrap();
            assert_eq!(cache.get(&key).await, Some(value));
        }

        assert_eq!(cache.len().await, 16);
    }

    #[tokio::test]
    async fn test_concurrent_use_stays_consistent_across_reclamation_ticks() {
        // Interval short enough that many scans run while the tasks
        // hammer the cache
        let cache = Arc::new(TtlCache::new(Duration::from_millis(10)).unwrap());

        let mut handles = Vec::new();
        for i in 0..32 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let key = format!("https://example.com/{}", i);
                let value = format!("payload-{}", i).into_bytes();

                for _ in 0..50 {
                    cache.add(key.clone(), value.clone()).await;
                    // A scan may reclaim the entry between the add and
                    // this read; a found value must still be this key's
                    if let Some(seen) = cache.get(&key).await {
                        assert_eq!(seen, value);
                    }
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_drop_stops_reclamation_task() {
        let cache = TtlCache::new(Duration::from_secs(60)).unwrap();
        let store = Arc::clone(&cache.store);

        drop(cache);

        // The aborted task releases its store handle shortly after
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
