//! In-Memory Document Backend
//!
//! HashMap-backed implementation of the `DocumentStore` contract, used as
//! the shipped backend and by the test suite.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Recipe, RecipePatch, UserRecord};
use crate::store::DocumentStore;

// == Memory Document Store ==
/// In-memory document store holding the recipe and user collections.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    /// Recipe collection keyed by identifier
    recipes: RwLock<HashMap<String, Recipe>>,
    /// User collection keyed by username
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryDocumentStore {
    // == Constructor ==
    /// Creates a new empty document store.
    pub fn new() -> Self {
        Self::default()
    }
}

// == Document Store Implementation ==
#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        let mut all: Vec<Recipe> = recipes.values().cloned().collect();
        // Stable order so repeated reads serialize identically
        all.sort_by(|a, b| a.published_at.cmp(&b.published_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.get(id).cloned())
    }

    async fn insert_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        recipes.insert(recipe.id.clone(), recipe.clone());
        Ok(())
    }

    async fn update_recipe(&self, id: &str, patch: &RecipePatch) -> Result<Option<Recipe>> {
        let mut recipes = self.recipes.write().await;

        let Some(recipe) = recipes.get_mut(id) else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            recipe.name = name.clone();
        }
        if let Some(ingredients) = &patch.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(instructions) = &patch.instructions {
            recipe.instructions = instructions.clone();
        }
        if let Some(tags) = &patch.tags {
            recipe.tags = tags.clone();
        }

        Ok(Some(recipe.clone()))
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let mut recipes = self.recipes.write().await;
        Ok(recipes.remove(id).is_some())
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn find_user_with_digest(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users
            .get(username)
            .filter(|user| user.password_digest == password_digest)
            .cloned())
    }

    async fn insert_user(&self, user: &UserRecord) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }
}
