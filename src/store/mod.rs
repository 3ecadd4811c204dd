//! Document Store Adapter
//!
//! Source of truth for recipe records and the user collection. Filters are
//! simple equality predicates on identifier or username; errors are
//! reserved for infrastructure failures, so "no matching record" travels
//! as `None` or a matched flag, never as an error.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Recipe, RecipePatch, UserRecord};

pub use memory::MemoryDocumentStore;

// == Document Store Trait ==
/// Contract for persistent document backends.
///
/// Implementations must be safe for concurrent use (`Send + Sync`); each
/// update is a single atomic document-level operation, which is the only
/// serialization concurrent writers get.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // == Recipe Collection ==

    /// Reads all recipe records.
    async fn find_recipes(&self) -> Result<Vec<Recipe>>;

    /// Reads a single recipe by identifier. Returns `None` if no record
    /// matches.
    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>>;

    /// Inserts a new recipe record.
    async fn insert_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Applies a partial field set to the recipe matching `id` and returns
    /// the post-update record, or `None` if no record matched.
    async fn update_recipe(&self, id: &str, patch: &RecipePatch) -> Result<Option<Recipe>>;

    /// Removes the recipe matching `id`. Returns true if a record matched.
    async fn delete_recipe(&self, id: &str) -> Result<bool>;

    // == User Collection ==

    /// Reads a user record by username. Returns `None` if no record
    /// matches.
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Reads a user record matching both username and password digest.
    /// Returns `None` if no record matches.
    async fn find_user_with_digest(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<UserRecord>>;

    /// Inserts a new user record.
    async fn insert_user(&self, user: &UserRecord) -> Result<()>;
}
