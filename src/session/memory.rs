//! In-Memory Session Backend
//!
//! HashMap-backed implementation of the `SessionStore` contract. Writes
//! land directly in process memory, so `persist` has nothing left to
//! flush and completes immediately.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::session::SessionStore;

// == Memory Session Store ==
/// In-memory session backend.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    /// Slot id -> field map
    slots: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemorySessionStore {
    // == Constructor ==
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }
}

// == Session Store Implementation ==
#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, slot: &str, field: &str) -> Result<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(slot).and_then(|fields| fields.get(field)).cloned())
    }

    async fn set(&self, slot: &str, field: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots
            .entry(slot.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self, slot: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.remove(slot);
        Ok(())
    }

    async fn persist(&self, _slot: &str) -> Result<()> {
        Ok(())
    }
}
