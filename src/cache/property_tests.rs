//! Property-Based Tests for the Cache Backend
//!
//! Uses proptest to verify the side-cache invariants hold for arbitrary
//! operation sequences.

use proptest::prelude::*;
use tokio::runtime::Runtime;

use crate::cache::{CacheLookup, CacheStore, MemoryCacheStore};

// == Strategies ==
/// Generates valid cache keys (non-empty, bounded)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key-value pair, storing the pair and then reading it back
    // (before expiration) returns a hit with the exact stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = MemoryCacheStore::new();

            store.set(&key, &value, None).await.unwrap();

            let lookup = store.get(&key).await.unwrap();
            prop_assert_eq!(lookup, CacheLookup::Hit(value));
            Ok(())
        })?;
    }

    // For any key that exists in the cache, after delete a subsequent get
    // yields a miss, never an error.
    #[test]
    fn prop_delete_yields_miss(key in key_strategy(), value in value_strategy()) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = MemoryCacheStore::new();

            store.set(&key, &value, None).await.unwrap();
            prop_assert!(matches!(store.get(&key).await.unwrap(), CacheLookup::Hit(_)));

            store.delete(&key).await.unwrap();
            prop_assert_eq!(store.get(&key).await.unwrap(), CacheLookup::Miss);
            Ok(())
        })?;
    }

    // For any key, storing V1 then V2 results in a hit with V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = MemoryCacheStore::new();

            store.set(&key, &v1, None).await.unwrap();
            store.set(&key, &v2, None).await.unwrap();

            prop_assert_eq!(store.get(&key).await.unwrap(), CacheLookup::Hit(v2));
            Ok(())
        })?;
    }

    // An entry written with a zero TTL is expired at the boundary and is
    // never returned as a hit.
    #[test]
    fn prop_zero_ttl_never_hits(key in key_strategy(), value in value_strategy()) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = MemoryCacheStore::new();

            store.set(&key, &value, Some(0)).await.unwrap();
            prop_assert_eq!(store.get(&key).await.unwrap(), CacheLookup::Miss);
            Ok(())
        })?;
    }

    // For any operation sequence, the hit and miss counters exactly track
    // the observed lookup outcomes.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = MemoryCacheStore::new();
            let mut expected_hits: u64 = 0;
            let mut expected_misses: u64 = 0;

            for op in ops {
                match op {
                    CacheOp::Set { key, value } => {
                        store.set(&key, &value, None).await.unwrap();
                    }
                    CacheOp::Get { key } => match store.get(&key).await.unwrap() {
                        CacheLookup::Hit(_) => expected_hits += 1,
                        CacheLookup::Miss => expected_misses += 1,
                    },
                    CacheOp::Delete { key } => {
                        store.delete(&key).await.unwrap();
                    }
                }
            }

            let stats = store.stats().await;
            prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
            prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
            prop_assert_eq!(stats.total_entries, store.len().await, "Total entries mismatch");
            Ok(())
        })?;
    }
}
