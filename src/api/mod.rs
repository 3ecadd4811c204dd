//! API Module
//!
//! HTTP handlers and routing for the recipes REST API.
//!
//! # Endpoints
//! - `GET  /recipes` - List all recipes (public)
//! - `POST /signin` - Sign in with username and password
//! - `POST /signup` - Register a new user
//! - `POST /refresh` - Rotate the session token
//! - `POST /signout` - Clear the session
//! - `POST /recipes` - Create a recipe (session required)
//! - `GET  /recipes/:id` - Get one recipe (session required)
//! - `PUT  /recipes/:id` - Update a recipe (session required)
//! - `DELETE /recipes/:id` - Delete a recipe (session required)
//! - `GET  /health` - Health check endpoint
//! - `GET  /cache/stats` - Side-cache effectiveness counters

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
