//! In-Memory Cache Backend
//!
//! HashMap-backed implementation of the `CacheStore` contract with lazy
//! expiry on read and a sweep hook for the background cleanup task.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheLookup, CacheStats, CacheStore};
use crate::error::Result;

// == Inner State ==
#[derive(Debug, Default)]
struct Inner {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Effectiveness counters
    stats: CacheStats,
}

// == Memory Cache Store ==
/// In-memory cache backend with TTL support.
///
/// Expired entries are reclaimed lazily on `get` and eagerly by
/// `sweep_expired`, which the background cleanup task calls periodically.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    inner: RwLock<Inner>,
}

impl MemoryCacheStore {
    // == Constructor ==
    /// Creates a new empty cache backend.
    pub fn new() -> Self {
        Self::default()
    }

    // == Sweep Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut inner = self.inner.write().await;

        let expired_keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            inner.entries.remove(&key);
        }

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

// == Cache Store Implementation ==
#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<CacheLookup> {
        // Write lock: expired entries are removed on sight and stats updated
        let mut inner = self.inner.write().await;

        match inner.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                inner.entries.remove(key);
                let len = inner.entries.len();
                inner.stats.set_total_entries(len);
                inner.stats.record_miss();
                Ok(CacheLookup::Miss)
            }
            Some(entry) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Ok(CacheLookup::Hit(value))
            }
            None => {
                inner.stats.record_miss();
                Ok(CacheLookup::Miss)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> Result<()> {
        let mut inner = self.inner.write().await;

        let entry = CacheEntry::new(value.to_string(), ttl_seconds);
        inner.entries.insert(key.to_string(), entry);

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.write().await;

        if inner.entries.remove(key).is_some() {
            inner.stats.record_invalidation();
        }
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", None).await.unwrap();
        let lookup = store.get("key1").await.unwrap();

        assert_eq!(lookup, CacheLookup::Hit("value1".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_absent_is_miss_not_error() {
        let store = MemoryCacheStore::new();

        let lookup = store.get("nonexistent").await.unwrap();
        assert_eq!(lookup, CacheLookup::Miss);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", None).await.unwrap();
        store.delete("key1").await.unwrap();

        assert!(store.is_empty().await);
        assert_eq!(store.get("key1").await.unwrap(), CacheLookup::Miss);
    }

    #[tokio::test]
    async fn test_delete_absent_is_ok() {
        let store = MemoryCacheStore::new();

        store.delete("nonexistent").await.unwrap();
        assert_eq!(store.stats().await.invalidations, 0);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", None).await.unwrap();
        store.set("key1", "value2", None).await.unwrap();

        assert_eq!(
            store.get("key1").await.unwrap(),
            CacheLookup::Hit("value2".to_string())
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_ttl_expiration_reads_as_miss() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", Some(1)).await.unwrap();
        assert!(matches!(
            store.get("key1").await.unwrap(),
            CacheLookup::Hit(_)
        ));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(store.get("key1").await.unwrap(), CacheLookup::Miss);
        // Lazy reclamation removed the entry
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_no_ttl_entry_survives() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(matches!(
            store.get("key1").await.unwrap(),
            CacheLookup::Hit(_)
        ));
    }

    #[tokio::test]
    async fn test_sweep_expired() {
        let store = MemoryCacheStore::new();

        store.set("short", "v", Some(1)).await.unwrap();
        store.set("long", "v", Some(60)).await.unwrap();
        store.set("forever", "v", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let removed = store.sweep_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_stats_counters() {
        let store = MemoryCacheStore::new();

        store.set("key1", "value1", None).await.unwrap();
        store.get("key1").await.unwrap(); // hit
        store.get("nonexistent").await.unwrap(); // miss
        store.delete("key1").await.unwrap(); // invalidation

        let stats = store.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.total_entries, 0);
    }
}
