//! Cache Store Adapter
//!
//! Key-value side-cache with optional TTL. The engine consults it first and
//! falls back to the document store on miss; entries are never the
//! authoritative copy of a record.

mod entry;
mod memory;
mod stats;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryCacheStore;
pub use stats::CacheStats;

// == Cache Keys ==
/// Cache key holding the serialized aggregate list of all recipes.
pub const LIST_KEY: &str = "recipes";

// == Cache Lookup ==
/// Outcome of a cache read.
///
/// A miss is a designated sentinel, not an error: adapter failures travel
/// through the `Result` instead, so callers can always tell true absence
/// from a cache outage.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// The key was present and unexpired
    Hit(String),
    /// The key was absent or expired
    Miss,
}

// == Cache Store Trait ==
/// Contract for cache backends.
///
/// Implementations must be safe for concurrent use (`Send + Sync`); the
/// process owns one instance behind an `Arc` for its lifetime.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads a key. Absent or expired keys yield `CacheLookup::Miss`;
    /// errors are reserved for backend failures.
    async fn get(&self, key: &str) -> Result<CacheLookup>;

    /// Writes a key with an optional TTL in seconds. `None` means the entry
    /// never expires on its own and lives until explicitly invalidated.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> Result<()>;

    /// Removes a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
