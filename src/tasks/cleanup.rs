//! Cache Sweep Task
//!
//! Background task that periodically removes expired entries from the
//! in-memory cache backend. The backend also reclaims lazily on read, so
//! the sweep only exists to bound memory held by keys nobody reads again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// # Arguments
/// * `cache` - Shared handle to the in-memory cache backend
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<MemoryCacheStore>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheLookup, CacheStore};

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(MemoryCacheStore::new());

        cache.set("expire_soon", "value", Some(1)).await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(cache.len().await, 0, "Expired entry should have been swept");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(MemoryCacheStore::new());

        cache.set("long_lived", "value", Some(3600)).await.unwrap();
        cache.set("forever", "value", None).await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.get("long_lived").await.unwrap(),
            CacheLookup::Hit("value".to_string())
        );
        assert_eq!(
            cache.get("forever").await.unwrap(),
            CacheLookup::Hit("value".to_string())
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Arc::new(MemoryCacheStore::new());

        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
