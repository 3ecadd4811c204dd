//! Session Store Adapter
//!
//! Opaque per-client key-value slots holding authentication state. A slot
//! is addressed by the client-presented session identifier carried in a
//! cookie; the auth gate reads and writes the `username` and `token`
//! fields.

mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemorySessionStore;

// == Session Fields ==
/// Slot field holding the signed-in username.
pub const FIELD_USERNAME: &str = "username";
/// Slot field holding the opaque session token.
pub const FIELD_TOKEN: &str = "token";

// == Session Store Trait ==
/// Contract for session backends.
///
/// `persist` must complete before the response carrying the session state
/// is considered final.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads a field from a slot. Returns `None` if the slot or field is
    /// absent.
    async fn get(&self, slot: &str, field: &str) -> Result<Option<String>>;

    /// Writes a field into a slot, creating the slot if needed.
    async fn set(&self, slot: &str, field: &str, value: &str) -> Result<()>;

    /// Removes a slot and every field in it. Clearing an absent slot is
    /// not an error.
    async fn clear(&self, slot: &str) -> Result<()>;

    /// Flushes the slot to durable storage.
    async fn persist(&self, slot: &str) -> Result<()>;
}
