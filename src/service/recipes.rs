//! Cache-Aside Engine
//!
//! Read-through/write-invalidate protocol over the document store and the
//! side-cache. Reads consult the cache first and populate it lazily on
//! miss; writes go to the store first, then refresh the per-item entry
//! directly and invalidate the list aggregate unconditionally. The store
//! is always authoritative; the cache only ever holds snapshots.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CacheLookup, CacheStore, LIST_KEY};
use crate::error::{ApiError, Result};
use crate::models::{Recipe, RecipeDraft, RecipePatch};
use crate::store::DocumentStore;

// == Recipe Service ==
/// Cache-aside engine for recipe records.
pub struct RecipeService {
    /// Source of truth
    documents: Arc<dyn DocumentStore>,
    /// Side-cache for serialized snapshots
    cache: Arc<dyn CacheStore>,
    /// Bounded TTL in seconds applied to per-item entries written on the
    /// write path; entries populated on read miss never expire
    item_ttl: u64,
}

impl RecipeService {
    // == Constructor ==
    /// Creates a new engine over the given adapters.
    ///
    /// # Arguments
    /// * `documents` - Document store adapter (source of truth)
    /// * `cache` - Cache store adapter
    /// * `item_ttl` - TTL in seconds for write-path per-item cache entries
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        cache: Arc<dyn CacheStore>,
        item_ttl: u64,
    ) -> Self {
        Self {
            documents,
            cache,
            item_ttl,
        }
    }

    // == List ==
    /// Returns all recipes, serving the cached aggregate when present.
    ///
    /// On miss the full list is read from the store, cached with no
    /// expiry, and returned. A cache read failure is an infrastructure
    /// error, never treated as a miss.
    pub async fn list(&self) -> Result<Vec<Recipe>> {
        match self.cache.get(LIST_KEY).await? {
            CacheLookup::Hit(data) => {
                debug!("Cache hit for recipe list");
                let recipes: Vec<Recipe> = serde_json::from_str(&data)?;
                Ok(recipes)
            }
            CacheLookup::Miss => {
                debug!("Cache miss for recipe list");
                let recipes = self.documents.find_recipes().await?;
                let data = serde_json::to_string(&recipes)?;
                self.populate(LIST_KEY, &data, None).await;
                Ok(recipes)
            }
        }
    }

    // == Get One ==
    /// Returns a single recipe by identifier.
    ///
    /// On miss the record is read from the store; if the identifier does
    /// not exist this is a NotFound outcome, not an infrastructure error,
    /// and nothing is cached.
    pub async fn get(&self, id: &str) -> Result<Recipe> {
        match self.cache.get(id).await? {
            CacheLookup::Hit(data) => {
                debug!(id, "Cache hit for recipe");
                let recipe: Recipe = serde_json::from_str(&data)?;
                Ok(recipe)
            }
            CacheLookup::Miss => {
                debug!(id, "Cache miss for recipe");
                let recipe = self
                    .documents
                    .find_recipe(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound(format!("Recipe not found: {id}")))?;
                let data = serde_json::to_string(&recipe)?;
                self.populate(id, &data, None).await;
                Ok(recipe)
            }
        }
    }

    // == Create ==
    /// Assigns a fresh identifier and creation timestamp, writes the
    /// record to the store, then caches the new item with a bounded TTL
    /// and invalidates the list aggregate. Returns the new identifier.
    pub async fn create(&self, draft: RecipeDraft) -> Result<String> {
        let recipe = Recipe::from_draft(draft);
        self.documents.insert_recipe(&recipe).await?;

        let data = serde_json::to_string(&recipe)?;
        self.populate(&recipe.id, &data, Some(self.item_ttl)).await;
        self.invalidate(LIST_KEY).await;

        Ok(recipe.id)
    }

    // == Update ==
    /// Applies a partial field set to the record matching `id`.
    ///
    /// If no record matches, returns NotFound and performs no cache
    /// writes. On success the per-item entry is overwritten with the
    /// post-update snapshot (bounded TTL) and the list aggregate is
    /// invalidated.
    pub async fn update(&self, id: &str, patch: &RecipePatch) -> Result<Recipe> {
        let updated = self
            .documents
            .update_recipe(id, patch)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Recipe not found: {id}")))?;

        let data = serde_json::to_string(&updated)?;
        self.populate(id, &data, Some(self.item_ttl)).await;
        self.invalidate(LIST_KEY).await;

        Ok(updated)
    }

    // == Delete ==
    /// Removes the record matching `id`.
    ///
    /// If no record matches, returns NotFound. On success the per-item
    /// entry is removed outright (not merely expired) and the list
    /// aggregate is invalidated.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let matched = self.documents.delete_recipe(id).await?;
        if !matched {
            return Err(ApiError::NotFound(format!("Recipe not found: {id}")));
        }

        self.invalidate(id).await;
        self.invalidate(LIST_KEY).await;

        Ok(())
    }

    // == Cache Write Helpers ==
    /// Writes a snapshot into the cache. The store write has already
    /// succeeded by the time this runs, so a cache failure is logged and
    /// the operation still counts as successful; the next read falls
    /// through on miss.
    async fn populate(&self, key: &str, data: &str, ttl: Option<u64>) {
        if let Err(err) = self.cache.set(key, data, ttl).await {
            warn!(key, %err, "Failed to populate cache entry");
        }
    }

    /// Removes a cache entry, logging failures rather than surfacing them
    /// for the same reason as `populate`.
    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            warn!(key, %err, "Failed to invalidate cache entry");
        }
    }
}
