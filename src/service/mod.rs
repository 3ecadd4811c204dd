//! Service Layer
//!
//! The cache-aside engine for recipe records and the session-based auth
//! gate. Both are explicitly constructed over adapter trait objects and
//! handed to the request handlers; there are no ambient globals.

pub mod auth;
pub mod recipes;

pub use auth::AuthGate;
pub use recipes::RecipeService;
