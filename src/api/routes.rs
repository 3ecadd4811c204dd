//! API Routes
//!
//! Configures the Axum router. Mutating recipe routes (and single-recipe
//! reads, which sit behind the same gate) pass through the session
//! middleware before reaching their handlers.

use axum::{
    extract::State,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::{ApiError, Result};

use super::handlers::{
    cache_stats_handler, create_recipe_handler, delete_recipe_handler, get_recipe_handler,
    health_handler, list_recipes_handler, refresh_handler, sign_in_handler, sign_out_handler,
    sign_up_handler, update_recipe_handler, AppState, SESSION_COOKIE,
};

// == Session Middleware ==
/// Gate applied to protected routes: rejects requests whose session slot
/// holds no token. Token presence is the whole check.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: axum::extract::Request,
    next: Next,
) -> Result<Response> {
    let slot = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::Forbidden("Not logged in".to_string()))?;

    state.auth.require_auth(&slot).await?;
    Ok(next.run(request).await)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET  /recipes` - List all recipes (public)
/// - `POST /signin` / `POST /signup` / `POST /refresh` / `POST /signout`
/// - `POST /recipes` - Create a recipe (session required)
/// - `GET  /recipes/:id` - Get one recipe (session required)
/// - `PUT  /recipes/:id` - Update a recipe (session required)
/// - `DELETE /recipes/:id` - Delete a recipe (session required)
/// - `GET  /health` - Health check endpoint
/// - `GET  /cache/stats` - Side-cache effectiveness counters
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
/// - Session gate on the protected route group
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Protected route group behind the session gate
    let protected = Router::new()
        .route("/recipes", post(create_recipe_handler))
        .route(
            "/recipes/:id",
            get(get_recipe_handler)
                .put(update_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Build router with all endpoints
    Router::new()
        .route("/recipes", get(list_recipes_handler))
        .route("/signin", post(sign_in_handler))
        .route("/signup", post(sign_up_handler))
        .route("/refresh", post(refresh_handler))
        .route("/signout", post(sign_out_handler))
        .route("/health", get(health_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
