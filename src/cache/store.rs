//! Cache Store Module
//!
//! Map of response bodies keyed by request URL, with age-based reclamation.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// In-memory store backing the response cache.
///
/// Holds the entry map and the interval that bounds entry age. The store
/// itself is single-threaded; [`TtlCache`](crate::cache::TtlCache) wraps
/// it in a lock and owns the reclamation task. Lookups never consult an
/// entry's age: staleness is solely the reclamation scan's concern, so a
/// value stays readable until the scan gets to it.
#[derive(Debug)]
pub struct CacheStore {
    /// Response bodies keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Maximum entry age; also the reclamation scan period
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with a fresh timestamp.
    ///
    /// Overwriting resets the entry's age: the previous entry is replaced
    /// wholesale, never patched in place.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the stored bytes for `key`, regardless of entry age.
    ///
    /// `None` means the key is absent, either never added or already
    /// reclaimed; callers treat that as "must (re)fetch".
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(CacheEntry::value)
    }

    // == Keys ==
    /// Returns a snapshot of the keys currently present.
    ///
    /// The reclamation scan iterates this snapshot so it can re-acquire
    /// exclusive access per key instead of holding one lock across the
    /// whole traversal.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Remove If Expired ==
    /// Removes `key` if its entry is older than the store interval.
    ///
    /// Returns `true` when an entry was removed. A key that disappeared
    /// or was overwritten since the caller snapshotted it is simply left
    /// alone; an overwrite restarted the entry's age.
    pub fn remove_if_expired(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.interval) => {
                self.entries.remove(key);
                true
            }
            _ => false,
        }
    }

    // == Interval ==
    /// Returns the configured entry lifetime.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
