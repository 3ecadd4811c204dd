//! API Handlers
//!
//! HTTP request handlers mapping the recipe engine and auth gate outcomes
//! to responses, plus the session-cookie plumbing that addresses each
//! client's session slot.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::cache::{CacheStore, MemoryCacheStore};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CacheStatsResponse, CreatedResponse, Credentials, HealthResponse, MessageResponse, Recipe,
    RecipeDraft, RecipePatch,
};
use crate::service::{AuthGate, RecipeService};
use crate::session::{MemorySessionStore, SessionStore};
use crate::store::{DocumentStore, MemoryDocumentStore};

// == Session Cookie ==
/// Name of the cookie carrying the per-client session slot identifier.
pub const SESSION_COOKIE: &str = "recipes_session";

/// Application state shared across all handlers.
///
/// Service objects are constructed once at startup and dependency-injected
/// here; handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside engine for recipe records
    pub recipes: Arc<RecipeService>,
    /// Session-based authentication gate
    pub auth: Arc<AuthGate>,
    /// Concrete cache backend handle, kept for stats and the TTL sweep
    pub cache: Arc<MemoryCacheStore>,
}

impl AppState {
    /// Creates a new AppState over the given adapters.
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        cache: Arc<MemoryCacheStore>,
        sessions: Arc<dyn SessionStore>,
        item_ttl: u64,
    ) -> Self {
        let cache_adapter: Arc<dyn CacheStore> = cache.clone();
        let recipes = Arc::new(RecipeService::new(
            documents.clone(),
            cache_adapter,
            item_ttl,
        ));
        let auth = Arc::new(AuthGate::new(documents, sessions));
        Self {
            recipes,
            auth,
            cache,
        }
    }

    /// Creates a new AppState from configuration, using the in-memory
    /// backends.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(MemoryDocumentStore::new()),
            Arc::new(MemoryCacheStore::new()),
            Arc::new(MemorySessionStore::new()),
            config.item_cache_ttl,
        )
    }
}

// == Slot Helpers ==
/// Reads the session slot identifier from the request cookies.
fn slot_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Builds the session cookie carrying a slot identifier.
fn session_cookie(slot: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, slot);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

// == Recipe Handlers ==

/// Handler for GET /recipes
///
/// Returns the list of all recipes, served through the cache-aside engine.
pub async fn list_recipes_handler(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>> {
    let recipes = state.recipes.list().await?;
    Ok(Json(recipes))
}

/// Handler for GET /recipes/:id
///
/// Returns a single recipe by identifier.
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>> {
    let recipe = state.recipes.get(&id).await?;
    Ok(Json(recipe))
}

/// Handler for POST /recipes
///
/// Creates a new recipe and returns its identifier.
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    if let Some(error_msg) = draft.validate() {
        return Err(ApiError::InvalidInput(error_msg));
    }

    let id = state.recipes.create(draft).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Handler for PUT /recipes/:id
///
/// Applies a partial field set to an existing recipe.
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RecipePatch>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = patch.validate() {
        return Err(ApiError::InvalidInput(error_msg));
    }

    state.recipes.update(&id, &patch).await?;
    Ok(Json(MessageResponse::new("Recipe has been updated")))
}

/// Handler for DELETE /recipes/:id
///
/// Deletes an existing recipe.
pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.recipes.delete(&id).await?;
    Ok(Json(MessageResponse::new("Recipe has been deleted")))
}

// == Auth Handlers ==

/// Handler for POST /signin
///
/// Verifies credentials and issues a session token into the client's
/// slot, setting the session cookie when the client has none yet.
pub async fn sign_in_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<MessageResponse>)> {
    if let Some(error_msg) = credentials.validate() {
        return Err(ApiError::InvalidInput(error_msg));
    }

    let slot = slot_from_jar(&jar).unwrap_or_else(|| Uuid::new_v4().simple().to_string());
    state.auth.sign_in(&slot, &credentials).await?;

    let jar = jar.add(session_cookie(slot));
    Ok((jar, Json(MessageResponse::new("User signed in"))))
}

/// Handler for POST /signup
///
/// Creates a new user record. Does not authenticate the caller.
pub async fn sign_up_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = credentials.validate() {
        return Err(ApiError::InvalidInput(error_msg));
    }

    state.auth.sign_up(&credentials).await?;
    Ok(Json(MessageResponse::new("User created")))
}

/// Handler for POST /refresh
///
/// Rotates the session token in the client's slot.
pub async fn refresh_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MessageResponse>> {
    let slot = slot_from_jar(&jar)
        .ok_or_else(|| ApiError::Unauthorized("Invalid session cookie".to_string()))?;

    state.auth.refresh(&slot).await?;
    Ok(Json(MessageResponse::new("New session issued")))
}

/// Handler for POST /signout
///
/// Clears the client's session slot and drops the cookie. Succeeds even
/// if no session existed.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>)> {
    if let Some(slot) = slot_from_jar(&jar) {
        state.auth.sign_out(&slot).await?;
    }

    let jar = jar.remove(session_cookie(String::new()));
    Ok((jar, Json(MessageResponse::new("Signed out"))))
}

// == Operational Handlers ==

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /cache/stats
///
/// Returns side-cache effectiveness counters.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.cache.stats().await;

    Json(CacheStatsResponse::new(
        stats.hits,
        stats.misses,
        stats.invalidations,
        stats.total_entries,
    ))
}
