//! Persistent record types
//!
//! `Recipe` is owned by the document store; the cache only ever holds
//! serialized snapshots of it. `UserRecord` lives in the user collection
//! and carries the password digest, never the password itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::requests::RecipeDraft;

// == Recipe ==
/// A recipe record as stored in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Globally unique identifier, immutable once assigned
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Set once at creation, never mutated
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Materializes a draft into a full record, assigning a fresh
    /// identifier and the creation timestamp.
    pub fn from_draft(draft: RecipeDraft) -> Self {
        Self {
            id: new_recipe_id(),
            name: draft.name,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            tags: draft.tags,
            published_at: Utc::now(),
        }
    }
}

// == User Record ==
/// A user record in the document store's user collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique username
    pub username: String,
    /// Hex-encoded one-way digest of the password
    pub password_digest: String,
}

// == Identifier Generation ==
/// Generates a fresh recipe identifier (32 lowercase hex characters).
pub fn new_recipe_id() -> String {
    Uuid::new_v4().simple().to_string()
}
