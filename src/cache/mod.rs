//! Cache Module
//!
//! Provides a concurrent in-memory response cache with time-based
//! reclamation: repeated fetches of the same resource are served from
//! memory for a bounded window, and a background task evicts entries
//! once they outlive the configured interval.

mod entry;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl::TtlCache;
