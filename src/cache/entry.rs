//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response body together with its insertion time.
///
/// Entries are immutable once created; re-adding a key replaces the whole
/// entry, which is how a value's age gets reset. Timestamps are monotonic
/// (`Instant`), so wall-clock adjustments never age or rejuvenate an entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    value: Vec<u8>,
    /// When the entry was inserted
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry timestamped at the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Value ==
    /// Returns the stored bytes.
    ///
    /// Callers that hand the value out of the cache must copy it; the
    /// cache keeps exclusive ownership of entry contents.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age`.
    ///
    /// The comparison is strict: an entry whose age equals `max_age`
    /// exactly is still considered fresh. Expiry only ever removes
    /// entries through the reclamation scan, so this is a policy input,
    /// not an access-time check.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}
